use serde::{Deserialize, Serialize};

use crate::shared::data_view::{placeholder, Exportable, Searchable};
use crate::shared::lenient;

pub const TICKET_STATUSES: &[&str] = &["open", "in_progress", "resolved", "closed"];
pub const TICKET_PRIORITIES: &[&str] = &["low", "medium", "high"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketReply {
    #[serde(default, alias = "text", alias = "reply")]
    pub message: String,
    /// `"admin"` or `"buyer"`
    #[serde(default, alias = "from", alias = "repliedBy")]
    pub sender: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TicketReply {
    pub fn is_admin(&self) -> bool {
        self.sender
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("admin"))
            .unwrap_or(false)
    }
}

/// Buyer support ticket with its reply thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "ticketNumber", deserialize_with = "lenient::opt_string")]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, alias = "description")]
    pub message: Option<String>,
    #[serde(default, alias = "name")]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, alias = "responses")]
    pub replies: Vec<TicketReply>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SupportTicket {
    pub fn number(&self) -> &str {
        lenient::non_empty(self.ticket_id.as_deref()).unwrap_or(&self.id)
    }

    /// Local patch applied right after a reply is accepted.
    pub fn append_reply(&mut self, reply: TicketReply) {
        self.replies.push(reply);
    }
}

impl Searchable for SupportTicket {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.ticket_id.as_deref(),
            self.subject.as_deref(),
            self.email.as_deref(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => self.status.clone(),
            "category" | "priority" => self.priority.clone(),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

impl Exportable for SupportTicket {
    const ENTITY: &'static str = "SupportTickets";

    fn headers() -> Vec<&'static str> {
        vec![
            "Ticket",
            "Subject",
            "Buyer",
            "Email",
            "Priority",
            "Status",
            "Replies",
            "Opened",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.number().to_string(),
            placeholder(self.subject.as_deref()),
            placeholder(self.buyer_name.as_deref()),
            placeholder(self.email.as_deref()),
            placeholder(self.priority.as_deref()),
            placeholder(self.status.as_deref()),
            self.replies.len().to_string(),
            placeholder(self.created_at.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketReplyDto {
    pub message: String,
}

impl TicketReplyDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.message.trim().is_empty() {
            return Err("Reply cannot be empty".into());
        }
        if self.message.chars().count() > 2000 {
            return Err("Reply is limited to 2000 characters".into());
        }
        Ok(())
    }

    /// The reply as it will appear in the thread before the refetch lands.
    pub fn to_local_reply(&self, now: &str) -> TicketReply {
        TicketReply {
            message: self.message.trim().to_string(),
            sender: Some("admin".to_string()),
            created_at: Some(now.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::{apply, patch_by_id, FilterState};

    fn tickets() -> Vec<SupportTicket> {
        serde_json::from_str(
            r#"[
                {"_id":"t1","ticketId":"TKT-501","subject":"Refund not received","email":"asha@example.in",
                 "status":"open","priority":"high","replies":[{"message":"Looking into it","from":"admin"}]},
                {"_id":"t2","ticketNumber":502,"subject":"Wrong item","status":"resolved"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode() {
        let list = tickets();
        assert_eq!(list[1].number(), "502");
        assert!(list[0].replies[0].is_admin());
    }

    #[test]
    fn test_search_and_priority_filter() {
        let list = tickets();
        let f = FilterState {
            search: "tkt-5".into(),
            ..Default::default()
        };
        assert_eq!(apply(&list, &f).len(), 1);

        let f = FilterState {
            category: Some("high".into()),
            ..Default::default()
        };
        assert_eq!(apply(&list, &f)[0].id, "t1");
    }

    #[test]
    fn test_reply_append_patch() {
        let mut list = tickets();
        let dto = TicketReplyDto {
            message: "  Refund issued  ".into(),
        };
        assert!(dto.validate().is_ok());
        let reply = dto.to_local_reply("2024-05-01T10:00:00Z");
        assert!(patch_by_id(&mut list, "t1", |t| t.append_reply(reply)));
        assert_eq!(list[0].replies.len(), 2);
        assert_eq!(list[0].replies[1].message, "Refund issued");
        assert!(list[0].replies[1].is_admin());
    }

    #[test]
    fn test_empty_reply_rejected() {
        let dto = TicketReplyDto {
            message: "   ".into(),
        };
        assert!(dto.validate().is_err());
    }
}
