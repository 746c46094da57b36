use contracts::domain::a007_fpo_profile::{validate_fpo_status, FpoProfile, FPO_STATUSES};
use contracts::domain::common::StatusChange;
use contracts::shared::data_view::placeholder;
use contracts::shared::mutation::{ConfirmState, InFlight, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_fpo_profile::api;
use crate::domain::a007_fpo_profile::ui::details::FpoProfileDetails;
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
pub fn FpoProfileList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<FpoProfile>::new(PAGE_SIZE);
    let list_view = list.list_view();

    let detail = RwSignal::new(Option::<FpoProfile>::None);
    let status_modal = RwSignal::new(ModalState::<StatusChange>::Closed);
    let confirm = RwSignal::new(ConfirmState::Idle);
    let in_flight = RwSignal::new(InFlight::default());

    let load = move || list.reload(session, api::fetch_profiles);
    load();

    let on_delete_confirmed = Callback::new(move |_| {
        confirm_delete(session, confirm, in_flight, api::delete_profile, move |result| {
            match result {
                Ok(()) => load(),
                Err(e) => list.error.set(Some(e.user_message())),
            }
        });
    });

    let render_row = move |profile: FpoProfile| {
        let id = profile.id.clone();
        let id_for_busy = id.clone();
        let busy = Signal::derive(move || in_flight.with(|f| f.contains(&id_for_busy)));
        let for_detail = profile.clone();
        let label = profile.display_name();
        let change = StatusChange::new(id.clone(), label.clone(), None);
        let display_name = profile.display_name();
        let contact_person = placeholder(profile.contact_person.as_deref());
        let email = placeholder(profile.email.as_deref());
        let registration_number = placeholder(profile.registration_number.as_deref());
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
                <TableCell><TableCellLayout truncate=true>{contact_person}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout truncate=true>{email}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{registration_number}</TableCellLayout></TableCell>
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
                            on_click=move |_| status_modal.set(ModalState::open_edit(change.clone()))
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
        <PageFrame page_id="a007_fpo_profile--list" category=PAGE_CAT_LIST>
            <PageHeader title="FPO" count=list.filtered_count() />

            <div class="page__content">
                <ListToolbar
                    view_state=list.view
                    page_info=Signal::derive(move || list_view.with(|lv| PageInfo::from(&lv.page)))
                    loading=list.loading
                    on_refresh=Callback::new(move |_| load())
                    on_export=Callback::new(move |_| list.export())
                    search_placeholder="Name, contact, email or registration no..."
                    status_choices=choices_with_all("All statuses", FPO_STATUSES)
                />

                {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                {move || list.notice.get().map(|msg| view! { <div class="alert alert--warning">{msg}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Contact"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Registration"</TableHeaderCell>
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
                                                <div class="table__empty">"No FPO profiles match the current filters"</div>
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
                <FpoProfileDetails profile=profile on_close=Callback::new(move |_| detail.set(None)) />
            })}

            <Show when=move || status_modal.with(|m| m.is_open())>
                <StatusChangeForm
                    modal=status_modal
                    statuses=&FPO_STATUSES[1..]
                    validate=validate_fpo_status
                    send=api::update_status
                    on_saved=Callback::new(move |_| load())
                    title="FPO approval"
                />
            </Show>

            <ConfirmDialog
                confirm=confirm
                title="Delete FPO profile?"
                on_confirm=on_delete_confirmed
            />
        </PageFrame>
    }
}
