use contracts::domain::a004_support_ticket::{SupportTicket, TicketReplyDto};
use contracts::domain::common::StatusChange;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::record_path;
use crate::shared::http;
use crate::system::auth::session::Session;

const TICKETS: &str = "/admin/support/tickets";

pub async fn fetch_tickets(session: Session) -> Result<Vec<SupportTicket>, ApiError> {
    http::get_list(session, TICKETS).await
}

pub async fn post_reply(session: Session, id: String, dto: TicketReplyDto) -> Result<(), ApiError> {
    let path = format!("{}/reply", record_path(TICKETS, &id));
    http::post_json(session, &path, &dto).await
}

pub async fn update_status(session: Session, change: StatusChange) -> Result<(), ApiError> {
    let path = format!("{}/status", record_path(TICKETS, &change.id));
    http::put_json(session, &path, &change.update).await
}
