use contracts::domain::a005_promo_code::{PromoCode, PromoCodeForm, DISCOUNT_TYPES};
use contracts::shared::data_view::placeholder;
use contracts::shared::mutation::{ConfirmState, InFlight, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_promo_code::api;
use crate::domain::a005_promo_code::ui::details::PromoCodeEditForm;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_toolbar::{choices_with_all, ListToolbar};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::mutation_flow::{confirm_delete, run_guarded};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 25;
const COLUMNS: &str = "8";

fn usage_text(promo: &PromoCode) -> String {
    match (promo.times_used, promo.usage_limit) {
        (used, Some(limit)) => format!("{} / {}", used.unwrap_or(0), limit),
        (Some(used), None) => used.to_string(),
        (None, None) => placeholder(None),
    }
}

#[component]
pub fn PromoCodeList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<PromoCode>::new(PAGE_SIZE);
    let list_view = list.list_view();

    let modal = RwSignal::new(ModalState::<PromoCodeForm>::Closed);
    let confirm = RwSignal::new(ConfirmState::Idle);
    let in_flight = RwSignal::new(InFlight::default());

    let load = move || list.reload(session, api::fetch_promo_codes);
    load();

    let on_delete_confirmed = Callback::new(move |_| {
        confirm_delete(session, confirm, in_flight, api::delete_promo_code, move |result| {
            match result {
                Ok(()) => load(),
                Err(e) => list.error.set(Some(e.user_message())),
            }
        });
    });

    let toggle = move |promo: &PromoCode| {
        let dto = match promo.toggled() {
            Ok(dto) => dto,
            Err(message) => {
                list.error.set(Some(format!("{}: {}", promo.code, message)));
                return;
            }
        };
        let id = promo.id.clone();
        let call = api::update_promo_code(session, id.clone(), dto);
        run_guarded(session, in_flight, id, call, move |result| match result {
            Ok(()) => load(),
            Err(e) => list.error.set(Some(e.user_message())),
        });
    };

    let render_row = move |promo: PromoCode| {
        let id = promo.id.clone();
        let id_for_busy = id.clone();
        let busy = Signal::derive(move || in_flight.with(|f| f.contains(&id_for_busy)));
        let for_edit = PromoCodeForm::from(&promo);
        let for_toggle = promo.clone();
        let label = promo.code.clone();
        let expired = promo.is_expired_on(chrono::Local::now().date_naive());
        let toggle_text = if promo.is_active { "Deactivate" } else { "Activate" };
        let code = promo.code.clone();
        let description = placeholder(promo.description.as_deref());
        let discount_text = promo.discount_text();
        let min_order_amount = promo.min_order_amount.clone();
        let validity = format!(
            "{} – {}",
            format_optional_date(promo.valid_from.as_deref()),
            format_optional_date(promo.valid_to.as_deref()),
        );
        let usage = usage_text(&promo);
        let status = promo.status();

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout>
                        <strong>{code}</strong>
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout truncate=true>{description}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{discount_text}</TableCellLayout></TableCell>
                <TableCellMoney value=min_order_amount />
                <TableCell>
                    <TableCellLayout>
                        {validity}
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout>{usage}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=status />
                        {expired.then(|| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Expired"</Badge>
                        })}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=busy
                            on_click=move |_| toggle(&for_toggle)
                        >
                            {toggle_text}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| modal.set(ModalState::open_edit(for_edit.clone()))
                        >
                            {icon("edit")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=busy
                            on_click=move |_| confirm.set(ConfirmState::request(id.clone(), label.clone()))
                        >
                            {icon("delete")}
                        </Button>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a005_promo_code--list" category=PAGE_CAT_LIST>
            <PageHeader title="Promo codes" count=list.filtered_count()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.set(ModalState::open_create(PromoCodeForm::default()))
                >
                    {icon("plus")}
                    " New promo code"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListToolbar
                    view_state=list.view
                    page_info=Signal::derive(move || list_view.with(|lv| PageInfo::from(&lv.page)))
                    loading=list.loading
                    on_refresh=Callback::new(move |_| load())
                    on_export=Callback::new(move |_| list.export())
                    search_placeholder="Code or description..."
                    status_choices=vec![("", "All"), ("active", "Active"), ("inactive", "Inactive")]
                    category_label="Discount type"
                    category_choices=choices_with_all("All types", DISCOUNT_TYPES)
                />

                {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                {move || list.notice.get().map(|msg| view! { <div class="alert alert--warning">{msg}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=110.0>"Code"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Discount"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Min order"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Validity"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Usage"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=170.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = list_view.get().page.items;
                                if rows.is_empty() && !list.loading.get() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMNS>
                                                <div class="table__empty">"No promo codes match the current filters"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter().map(render_row).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Show when=move || modal.with(|m| m.is_open())>
                <PromoCodeEditForm modal=modal on_saved=Callback::new(move |_| load()) />
            </Show>

            <ConfirmDialog
                confirm=confirm
                title="Delete promo code?"
                on_confirm=on_delete_confirmed
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_text() {
        let mut promo: PromoCode = serde_json::from_str(r#"{"_id":"p1","code":"A"}"#).unwrap();
        assert_eq!(usage_text(&promo), "N/A");
        promo.usage_limit = Some(100);
        assert_eq!(usage_text(&promo), "0 / 100");
        promo.times_used = Some(7);
        assert_eq!(usage_text(&promo), "7 / 100");
        promo.usage_limit = None;
        assert_eq!(usage_text(&promo), "7");
    }
}
