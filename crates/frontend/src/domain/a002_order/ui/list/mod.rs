use contracts::domain::a002_order::{Order, ORDER_STATUSES, PAYMENT_STATUSES};
use contracts::domain::common::{StatusChange, StatusUpdateDto};
use contracts::shared::mutation::{InFlight, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_order::api;
use crate::domain::a002_order::ui::details::OrderDetails;
use crate::shared::components::list_toolbar::{choices_with_all, ListToolbar};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::status_change_form::StatusChangeForm;
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;
const COLUMNS: &str = "8";

fn validate_order_status(dto: &StatusUpdateDto) -> Result<(), String> {
    dto.validate(ORDER_STATUSES, &[])
}

#[component]
pub fn OrderList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<Order>::new(PAGE_SIZE);
    let list_view = list.list_view();

    let detail_id = RwSignal::new(Option::<String>::None);
    let status_modal = RwSignal::new(ModalState::<StatusChange>::Closed);
    let in_flight = RwSignal::new(InFlight::default());

    let load = move || list.reload(session, api::fetch_orders);
    load();

    let render_row = move |order: Order| {
        let id_for_detail = order.id.clone();
        let change = StatusChange::new(order.id.clone(), order.number(), order.status.as_deref());
        let number = order.number().to_string();
        let customer_name = order.customer_name();
        let item_count = order.items.len();
        let total = order.computed_total();
        let status = order.status.clone().unwrap_or_default();
        let payment_status = order.payment_status.clone().unwrap_or_default();
        let created_at = format_optional_date(order.created_at.as_deref());

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <a href="#" class="table__link" on:click=move |e| {
                            e.prevent_default();
                            detail_id.set(Some(id_for_detail.clone()));
                        }>
                            {number}
                        </a>
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout truncate=true>{customer_name}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{item_count}</TableCellLayout></TableCell>
                <TableCellMoney value=total bold=true />
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=status />
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=payment_status />
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| status_modal.set(ModalState::open_edit(change.clone()))
                        >
                            {icon("edit")}
                        </Button>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a002_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders" count=list.filtered_count() />

            <div class="page__content">
                <ListToolbar
                    view_state=list.view
                    page_info=Signal::derive(move || list_view.with(|lv| PageInfo::from(&lv.page)))
                    loading=list.loading
                    on_refresh=Callback::new(move |_| load())
                    on_export=Callback::new(move |_| list.export())
                    search_placeholder="Order ID, customer name or email..."
                    status_choices=choices_with_all("All statuses", ORDER_STATUSES)
                    category_label="Payment"
                    category_choices=choices_with_all("All payments", PAYMENT_STATUSES)
                />

                {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                {move || list.notice.get().map(|msg| view! { <div class="alert alert--warning">{msg}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>"Order ID"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>"Items"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Payment"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = list_view.get().page.items;
                                if rows.is_empty() && !list.loading.get() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMNS>
                                                <div class="table__empty">"No orders match the current filters"</div>
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

            {move || detail_id.get().map(|id| view! {
                <OrderDetails
                    order_id=id
                    list=list
                    in_flight=in_flight
                    on_changed=Callback::new(move |_| load())
                    on_close=Callback::new(move |_| detail_id.set(None))
                />
            })}

            <Show when=move || status_modal.with(|m| m.is_open())>
                <StatusChangeForm
                    modal=status_modal
                    statuses=ORDER_STATUSES
                    validate=validate_order_status
                    send=api::update_status
                    on_saved=Callback::new(move |_| load())
                    title="Order status"
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::status_label;

    #[test]
    fn test_order_status_validation() {
        assert!(validate_order_status(&StatusUpdateDto::new("shipped")).is_ok());
        assert!(validate_order_status(&StatusUpdateDto::new("teleported")).is_err());
        assert_eq!(status_label("shipped"), "Shipped");
    }
}
