use contracts::domain::a006_sme_profile::{validate_sme_status, SmeProfile, SME_STATUSES};
use contracts::domain::common::StatusChange;
use contracts::shared::data_view::{distinct_values, placeholder};
use contracts::shared::mutation::{ConfirmState, InFlight, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_sme_profile::api;
use crate::domain::a006_sme_profile::ui::details::SmeProfileDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_toolbar::{choices_with_all, ListToolbar};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::status_change_form::StatusChangeForm;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::mutation_flow::confirm_delete;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 25;
const COLUMNS: &str = "7";

#[component]
pub fn SmeProfileList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<SmeProfile>::new(PAGE_SIZE);
    let list_view = list.list_view();

    let detail = RwSignal::new(Option::<SmeProfile>::None);
    let status_modal = RwSignal::new(ModalState::<StatusChange>::Closed);
    // Options of the open status modal, depend on the record's current status.
    let next_statuses = RwSignal::new(Vec::<&'static str>::new());
    let confirm = RwSignal::new(ConfirmState::Idle);
    let in_flight = RwSignal::new(InFlight::default());

    let load = move || list.reload(session, api::fetch_profiles);
    load();

    let categories = Signal::derive(move || list.items.with(|all| distinct_values(all, "category")));

    let on_delete_confirmed = Callback::new(move |_| {
        confirm_delete(session, confirm, in_flight, api::delete_profile, move |result| {
            match result {
                Ok(()) => load(),
                Err(e) => list.error.set(Some(e.user_message())),
            }
        });
    });

    let render_row = move |profile: SmeProfile| {
        let id = profile.id.clone();
        let id_for_busy = id.clone();
        let busy = Signal::derive(move || in_flight.with(|f| f.contains(&id_for_busy)));
        let for_detail = profile.clone();
        let label = profile.display_name();
        let options = profile.next_statuses();
        let change = StatusChange::new(id.clone(), label.clone(), None);
        let display_name = profile.display_name();
        let owner_name = placeholder(profile.owner_name.as_deref());
        let email = placeholder(profile.email.as_deref());
        let category = placeholder(profile.category.as_deref());
        let status = profile.status_or_pending().to_string();
        let created_at = format_optional_date(profile.created_at.as_deref());

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <a href="#" class="table__link" on:click=move |e| {
                            e.prevent_default();
                            detail.set(Some(for_detail.clone()));
                        }>
                            {display_name}
                        </a>
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout truncate=true>{owner_name}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout truncate=true>{email}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{category}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=status />
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=busy
                            on_click=move |_| {
                                next_statuses.set(options.clone());
                                status_modal.set(ModalState::open_edit(change.clone()));
                            }
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
        <PageFrame page_id="a006_sme_profile--list" category=PAGE_CAT_LIST>
            <PageHeader title="SME" count=list.filtered_count() />

            <div class="page__content">
                <ListToolbar
                    view_state=list.view
                    page_info=Signal::derive(move || list_view.with(|lv| PageInfo::from(&lv.page)))
                    loading=list.loading
                    on_refresh=Callback::new(move |_| load())
                    on_export=Callback::new(move |_| list.export())
                    search_placeholder="Business, owner, email or mobile..."
                    status_choices=choices_with_all("All statuses", SME_STATUSES)
                    category_choices=vec![("", "All categories")]
                    category_options=categories
                />

                {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                {move || list.notice.get().map(|msg| view! { <div class="alert alert--warning">{msg}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Business"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Owner"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Registered"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = list_view.get().page.items;
                                if rows.is_empty() && !list.loading.get() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMNS>
                                                <div class="table__empty">"No SME profiles match the current filters"</div>
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

            {move || detail.get().map(|profile| view! {
                <SmeProfileDetails profile=profile on_close=Callback::new(move |_| detail.set(None)) />
            })}

            <Show when=move || status_modal.with(|m| m.is_open())>
                <StatusChangeForm
                    modal=status_modal
                    statuses=next_statuses.get_untracked()
                    validate=validate_sme_status
                    send=api::update_status
                    on_saved=Callback::new(move |_| load())
                    title="SME status"
                />
            </Show>

            <ConfirmDialog
                confirm=confirm
                title="Delete SME profile?"
                on_confirm=on_delete_confirmed
            />
        </PageFrame>
    }
}
