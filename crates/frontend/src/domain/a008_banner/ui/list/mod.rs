use contracts::domain::a008_banner::{Banner, BannerForm, BANNER_POSITIONS};
use contracts::domain::common::status_label;
use contracts::shared::data_view::placeholder;
use contracts::shared::mutation::{ConfirmState, InFlight, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_banner::api;
use crate::domain::a008_banner::ui::details::BannerEditForm;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_toolbar::{choices_with_all, ListToolbar};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::mutation_flow::{confirm_delete, run_guarded};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;
const COLUMNS: &str = "6";

#[component]
pub fn BannerList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<Banner>::new(PAGE_SIZE);
    let list_view = list.list_view();

    let modal = RwSignal::new(ModalState::<BannerForm>::Closed);
    let confirm = RwSignal::new(ConfirmState::Idle);
    let in_flight = RwSignal::new(InFlight::default());

    let load = move || list.reload(session, api::fetch_banners);
    load();

    let on_delete_confirmed = Callback::new(move |_| {
        confirm_delete(session, confirm, in_flight, api::delete_banner, move |result| {
            match result {
                Ok(()) => load(),
                Err(e) => list.error.set(Some(e.user_message())),
            }
        });
    });

    let render_row = move |banner: Banner| {
        let id = banner.id.clone();
        let id_for_busy = id.clone();
        let id_for_toggle = id.clone();
        let busy = Signal::derive(move || in_flight.with(|f| f.contains(&id_for_busy)));
        let for_edit = BannerForm::from(&banner);
        let toggled = banner.toggled();
        let label = placeholder(banner.title.as_deref());
        let toggle_text = if banner.is_active { "Deactivate" } else { "Activate" };
        let image_url = banner.image_url.clone();
        let title = label.clone();
        let position = status_label(banner.position.as_deref().unwrap_or_default());
        let sort_order = banner.sort_order.map(|n| n.to_string()).unwrap_or_else(|| placeholder(None));
        let status = banner.status();

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout>
                        {image_url.map(|src| view! {
                            <img class="banner-thumb" src=src alt="Banner" />
                        })}
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout truncate=true>{title}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        {position}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        {sort_order}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=status />
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=busy
                            on_click=move |_| {
                                let call = api::update_banner(session, id_for_toggle.clone(), toggled.clone());
                                run_guarded(session, in_flight, id_for_toggle.clone(), call, move |result| {
                                    match result {
                                        Ok(()) => load(),
                                        Err(e) => list.error.set(Some(e.user_message())),
                                    }
                                });
                            }
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
        <PageFrame page_id="a008_banner--list" category=PAGE_CAT_LIST>
            <PageHeader title="Banners" count=list.filtered_count()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.set(ModalState::open_create(BannerForm::default()))
                >
                    {icon("plus")}
                    " New banner"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListToolbar
                    view_state=list.view
                    page_info=Signal::derive(move || list_view.with(|lv| PageInfo::from(&lv.page)))
                    loading=list.loading
                    on_refresh=Callback::new(move |_| load())
                    search_placeholder="Title or position..."
                    status_choices=vec![("", "All"), ("active", "Active"), ("inactive", "Inactive")]
                    category_label="Position"
                    category_choices=choices_with_all("All positions", BANNER_POSITIONS)
                    no_dates=true
                />

                {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>"Image"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Title"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Position"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Order"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
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
                                                <div class="table__empty">"No banners yet"</div>
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
                <BannerEditForm modal=modal on_saved=Callback::new(move |_| load()) />
            </Show>

            <ConfirmDialog
                confirm=confirm
                title="Delete banner?"
                on_confirm=on_delete_confirmed
            />
        </PageFrame>
    }
}
