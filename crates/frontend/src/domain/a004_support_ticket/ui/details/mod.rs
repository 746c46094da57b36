//! Ticket thread with the admin reply box.

use contracts::domain::a004_support_ticket::{SupportTicket, TicketReply, TicketReplyDto};
use contracts::domain::common::status_label;
use contracts::shared::data_view::placeholder;
use contracts::shared::mutation::InFlight;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_support_ticket::api;
use crate::shared::components::detail_field::DetailField;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::mutation_flow::run_guarded;
use crate::system::auth::context::use_session;

#[component]
fn ThreadMessage(reply: TicketReply) -> impl IntoView {
    let from_admin = reply.is_admin();
    let author = if from_admin { "Admin" } else { "Buyer" };

    view! {
        <div class="thread__message" class:thread__message--admin=from_admin>
            <div class="thread__meta">
                <strong>{author}</strong>
                <span>{format_optional_datetime(reply.created_at.as_deref())}</span>
            </div>
            <div class="thread__text">{reply.message}</div>
        </div>
    }
}

#[component]
fn ReplyBox(
    ticket_id: String,
    list: ListController<SupportTicket>,
    in_flight: RwSignal<InFlight>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let id_for_busy = ticket_id.clone();
    let busy = Signal::derive(move || in_flight.with(|f| f.contains(&id_for_busy)));

    let on_send = move |_| {
        let dto = TicketReplyDto {
            message: message.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        error.set(None);

        let id = ticket_id.clone();
        let local = dto.to_local_reply(&chrono::Utc::now().to_rfc3339());
        let call = api::post_reply(session, id.clone(), dto);
        run_guarded(session, in_flight, id.clone(), call, move |result| match result {
            Ok(()) => {
                list.patch(&id, |ticket| ticket.append_reply(local));
                message.set(String::new());
                on_changed.run(());
            }
            Err(e) => error.set(Some(e.user_message())),
        });
    };

    view! {
        <div class="form__group">
            <Label>"Reply"</Label>
            <Textarea value=message disabled=busy placeholder="Write a reply to the buyer..." />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Primary on_click=on_send disabled=busy>
                    {move || if busy.get() { "Sending..." } else { "Send reply" }}
                </Button>
            </div>
        </div>
    }
}

/// Reads the ticket from `list` so the appended reply and the refetched
/// thread both show up without reopening.
#[component]
pub fn SupportTicketDetails(
    ticket_id: String,
    list: ListController<SupportTicket>,
    in_flight: RwSignal<InFlight>,
    on_changed: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = ticket_id.clone();
    let ticket = Signal::derive(move || {
        list.items
            .with(|items| items.iter().find(|t| t.id == id).cloned())
    });

    let title = Signal::derive(move || {
        ticket
            .get()
            .map(|t| format!("Ticket {}", t.number()))
            .unwrap_or_else(|| "Ticket".to_string())
    });

    view! {
        <Modal title=title on_close=on_close>
            {move || ticket.get().map(|t| view! {
                <div class="detail-grid">
                    <DetailField label="Subject" value=placeholder(t.subject.as_deref()) />
                    <DetailField label="Buyer" value=placeholder(t.buyer_name.as_deref()) />
                    <DetailField label="Email" value=placeholder(t.email.as_deref()) />
                    <DetailField label="Priority" value=status_label(t.priority.as_deref().unwrap_or_default()) />
                    <DetailField label="Status" value=status_label(t.status.as_deref().unwrap_or_default()) />
                    <DetailField label="Opened" value=format_optional_datetime(t.created_at.as_deref()) />
                </div>

                <h3 class="modal-section-title">"Conversation"</h3>
                <div class="thread">
                    <div class="thread__message">
                        <div class="thread__meta"><strong>"Buyer"</strong></div>
                        <div class="thread__text">{placeholder(t.message.as_deref())}</div>
                    </div>
                    {t.replies
                        .into_iter()
                        .map(|reply| view! { <ThreadMessage reply=reply /> })
                        .collect_view()}
                </div>
            })}

            <ReplyBox ticket_id=ticket_id list=list in_flight=in_flight on_changed=on_changed />
        </Modal>
    }
}
