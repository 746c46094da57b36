//! Types shared by several record kinds

use serde::{Deserialize, Serialize};

use crate::shared::data_view::PLACEHOLDER;
use crate::shared::lenient;

/// Postal address as sent by the server. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, alias = "addressLine", alias = "line1")]
    pub street: Option<String>,
    #[serde(default, alias = "district")]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(
        default,
        alias = "pinCode",
        alias = "zip",
        deserialize_with = "lenient::opt_string"
    )]
    pub pincode: Option<String>,
}

impl Address {
    /// `"street, city, state - pincode"`, skipping blank parts.
    /// `None` when every part is blank.
    pub fn joined(&self) -> Option<String> {
        let head: Vec<&str> = [&self.street, &self.city, &self.state]
            .into_iter()
            .filter_map(|p| lenient::non_empty(p.as_deref()))
            .collect();
        let pin = lenient::non_empty(self.pincode.as_deref());

        match (head.is_empty(), pin) {
            (true, None) => None,
            (true, Some(pin)) => Some(pin.to_string()),
            (false, None) => Some(head.join(", ")),
            (false, Some(pin)) => Some(format!("{} - {}", head.join(", "), pin)),
        }
    }
}

/// Joined address, or `"N/A"` when there is none.
pub fn address_text(address: Option<&Address>) -> String {
    address
        .and_then(Address::joined)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// List payloads arrive either bare or wrapped in an envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "items", alias = "results")]
        data: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped { data } => data,
        }
    }
}

/// Body of the status-change endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateDto {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl StatusUpdateDto {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            remark: None,
        }
    }

    /// The status must be one of `allowed`; `remark_required_for` lists the
    /// statuses that need a non-blank remark.
    pub fn validate(&self, allowed: &[&str], remark_required_for: &[&str]) -> Result<(), String> {
        if !allowed.contains(&self.status.as_str()) {
            return Err(format!("Unknown status: {}", self.status));
        }
        if remark_required_for.contains(&self.status.as_str())
            && lenient::non_empty(self.remark.as_deref()).is_none()
        {
            return Err("A remark is required for this status".into());
        }
        Ok(())
    }
}

/// Draft of a status-change modal: which record, and the body to send.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusChange {
    pub id: String,
    /// Shown in the modal title.
    pub label: String,
    pub update: StatusUpdateDto,
}

impl StatusChange {
    pub fn new(id: impl Into<String>, label: impl Into<String>, current: Option<&str>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            update: StatusUpdateDto::new(current.unwrap_or_default().trim().to_lowercase()),
        }
    }

    /// Blank remarks are sent as absent.
    pub fn set_remark(&mut self, remark: &str) {
        let remark = remark.trim();
        self.update.remark = (!remark.is_empty()).then(|| remark.to_string());
    }
}

/// Select options for a record's stored value: `listed`, then `current`
/// (already normalized) when the server sent something outside the list.
pub fn choices_with_current(listed: &[&str], current: &str) -> Vec<String> {
    let mut choices: Vec<String> = listed.iter().map(|s| s.to_string()).collect();
    if !current.is_empty() && !listed.contains(&current) {
        choices.push(current.to_string());
    }
    choices
}

/// `"in_progress"` → `"In progress"`
pub fn status_label(status: &str) -> String {
    let text = status.trim().replace(['_', '-'], " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_joined() {
        let full = Address {
            street: Some("12 Mandi Road".into()),
            city: Some("Nashik".into()),
            state: Some("Maharashtra".into()),
            pincode: Some("422001".into()),
        };
        assert_eq!(
            full.joined().as_deref(),
            Some("12 Mandi Road, Nashik, Maharashtra - 422001")
        );

        let partial = Address {
            city: Some("Nashik".into()),
            state: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(partial.joined().as_deref(), Some("Nashik"));
        assert_eq!(Address::default().joined(), None);
    }

    #[test]
    fn test_choices_with_current() {
        assert_eq!(choices_with_current(&["active", "blocked"], "active"), vec!["active", "blocked"]);
        assert_eq!(
            choices_with_current(&["active", "blocked"], "inactive"),
            vec!["active", "blocked", "inactive"]
        );
        assert_eq!(choices_with_current(&["active"], ""), vec!["active"]);
    }

    #[test]
    fn test_missing_address_renders_placeholder() {
        assert_eq!(address_text(None), "N/A");
        assert_eq!(address_text(Some(&Address::default())), "N/A");
    }

    #[test]
    fn test_numeric_pincode() {
        let a: Address = serde_json::from_str(r#"{"city":"Pune","pinCode":411001}"#).unwrap();
        assert_eq!(a.joined().as_deref(), Some("Pune - 411001"));
    }

    #[test]
    fn test_list_envelope() {
        let bare: ListEnvelope<u32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2, 3]);
        let wrapped: ListEnvelope<u32> = serde_json::from_str(r#"{"data":[4]}"#).unwrap();
        assert_eq!(wrapped.into_vec(), vec![4]);
        let items: ListEnvelope<u32> =
            serde_json::from_str(r#"{"success":true,"items":[5]}"#).unwrap();
        assert_eq!(items.into_vec(), vec![5]);
    }

    #[test]
    fn test_status_update_validation() {
        let allowed = ["approved", "rejected"];
        assert!(StatusUpdateDto::new("approved").validate(&allowed, &["rejected"]).is_ok());
        assert!(StatusUpdateDto::new("rejected").validate(&allowed, &["rejected"]).is_err());
        assert!(StatusUpdateDto::new("deleted").validate(&allowed, &[]).is_err());
    }

    #[test]
    fn test_status_change_draft() {
        let mut change = StatusChange::new("s1", "Green Farms", Some(" Pending "));
        assert_eq!(change.update.status, "pending");
        change.set_remark("   ");
        assert_eq!(change.update.remark, None);
        change.set_remark(" documents missing ");
        assert_eq!(change.update.remark.as_deref(), Some("documents missing"));

        let blank = StatusChange::new("s2", "x", None);
        assert_eq!(blank.update.status, "");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("in_progress"), "In progress");
        assert_eq!(status_label("APPROVED"), "Approved");
        assert_eq!(status_label(""), "N/A");
    }
}
