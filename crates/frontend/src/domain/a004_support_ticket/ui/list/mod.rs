use contracts::domain::a004_support_ticket::{SupportTicket, TICKET_PRIORITIES, TICKET_STATUSES};
use contracts::domain::common::{StatusChange, StatusUpdateDto};
use contracts::shared::data_view::placeholder;
use contracts::shared::mutation::{InFlight, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_support_ticket::api;
use crate::domain::a004_support_ticket::ui::details::SupportTicketDetails;
use crate::shared::components::list_toolbar::{choices_with_all, ListToolbar};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::status_change_form::StatusChangeForm;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;
const COLUMNS: &str = "8";

fn validate_ticket_status(dto: &StatusUpdateDto) -> Result<(), String> {
    dto.validate(TICKET_STATUSES, &[])
}

#[component]
pub fn SupportTicketList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<SupportTicket>::new(PAGE_SIZE);
    let list_view = list.list_view();

    let detail_id = RwSignal::new(Option::<String>::None);
    let status_modal = RwSignal::new(ModalState::<StatusChange>::Closed);
    let in_flight = RwSignal::new(InFlight::default());

    let load = move || list.reload(session, api::fetch_tickets);
    load();

    let render_row = move |ticket: SupportTicket| {
        let id_for_detail = ticket.id.clone();
        let change = StatusChange::new(ticket.id.clone(), ticket.number(), ticket.status.as_deref());
        let number = ticket.number().to_string();
        let subject = placeholder(ticket.subject.as_deref());
        let email = placeholder(ticket.email.as_deref());
        let priority = ticket.priority.clone().unwrap_or_default();
        let status = ticket.status.clone().unwrap_or_default();
        let reply_count = ticket.replies.len();
        let created_at = format_optional_date(ticket.created_at.as_deref());

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout>
                        <a href="#" class="table__link" on:click=move |e| {
                            e.prevent_default();
                            detail_id.set(Some(id_for_detail.clone()));
                        }>
                            {number}
                        </a>
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout truncate=true>{subject}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout truncate=true>{email}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=priority />
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=status />
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout>{reply_count}</TableCellLayout></TableCell>
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
        <PageFrame page_id="a004_support_ticket--list" category=PAGE_CAT_LIST>
            <PageHeader title="Buyer support" count=list.filtered_count() />

            <div class="page__content">
                <ListToolbar
                    view_state=list.view
                    page_info=Signal::derive(move || list_view.with(|lv| PageInfo::from(&lv.page)))
                    loading=list.loading
                    on_refresh=Callback::new(move |_| load())
                    on_export=Callback::new(move |_| list.export())
                    search_placeholder="Ticket, subject or email..."
                    status_choices=choices_with_all("All statuses", TICKET_STATUSES)
                    category_label="Priority"
                    category_choices=choices_with_all("All priorities", TICKET_PRIORITIES)
                />

                {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                {move || list.notice.get().map(|msg| view! { <div class="alert alert--warning">{msg}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=110.0>"Ticket"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Subject"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Priority"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Replies"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Opened"</TableHeaderCell>
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
                                                <div class="table__empty">"No tickets match the current filters"</div>
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
                <SupportTicketDetails
                    ticket_id=id
                    list=list
                    in_flight=in_flight
                    on_changed=Callback::new(move |_| load())
                    on_close=Callback::new(move |_| detail_id.set(None))
                />
            })}

            <Show when=move || status_modal.with(|m| m.is_open())>
                <StatusChangeForm
                    modal=status_modal
                    statuses=TICKET_STATUSES
                    validate=validate_ticket_status
                    send=api::update_status
                    on_saved=Callback::new(move |_| load())
                    title="Ticket status"
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_status_validation() {
        assert!(validate_ticket_status(&StatusUpdateDto::new("in_progress")).is_ok());
        assert!(validate_ticket_status(&StatusUpdateDto::new("")).is_err());
    }
}
