use serde::{Deserialize, Serialize};

use crate::domain::common::{address_text, Address, StatusUpdateDto};
use crate::shared::data_view::{placeholder, Exportable, Searchable};
use crate::shared::lenient;

pub const SME_STATUSES: &[&str] = &["pending", "approved", "rejected", "suspended"];

/// Small/medium enterprise seller registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmeProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "companyName")]
    pub business_name: Option<String>,
    #[serde(default, alias = "name")]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "phone", deserialize_with = "lenient::opt_string")]
    pub mobile: Option<String>,
    #[serde(default, alias = "businessType")]
    pub category: Option<String>,
    #[serde(default, alias = "gstin", alias = "gstNumber")]
    pub gst_number: Option<String>,
    #[serde(default, alias = "verificationStatus")]
    pub status: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SmeProfile {
    pub fn display_name(&self) -> String {
        placeholder(
            lenient::non_empty(self.business_name.as_deref())
                .or(self.owner_name.as_deref()),
        )
    }

    pub fn status_or_pending(&self) -> &str {
        lenient::non_empty(self.status.as_deref()).unwrap_or("pending")
    }

    pub fn address_text(&self) -> String {
        address_text(self.address.as_ref())
    }

    /// Statuses an admin can move this profile to from its current one.
    pub fn next_statuses(&self) -> Vec<&'static str> {
        let current = self.status_or_pending();
        SME_STATUSES
            .iter()
            .copied()
            .filter(|s| *s != "pending" && *s != current)
            .collect()
    }
}

impl Searchable for SmeProfile {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.business_name.as_deref(),
            self.owner_name.as_deref(),
            self.email.as_deref(),
            self.mobile.as_deref(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status_or_pending().to_string()),
            "category" => self.category.clone(),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

impl Exportable for SmeProfile {
    const ENTITY: &'static str = "SME";

    fn headers() -> Vec<&'static str> {
        vec![
            "Business",
            "Owner",
            "Email",
            "Mobile",
            "Category",
            "GST",
            "Status",
            "Address",
            "Registered",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            placeholder(self.business_name.as_deref()),
            placeholder(self.owner_name.as_deref()),
            placeholder(self.email.as_deref()),
            placeholder(self.mobile.as_deref()),
            placeholder(self.category.as_deref()),
            placeholder(self.gst_number.as_deref()),
            self.status_or_pending().to_string(),
            self.address_text(),
            placeholder(self.created_at.as_deref()),
        ]
    }
}

/// Rejecting or suspending a seller requires a reason.
pub fn validate_sme_status(dto: &StatusUpdateDto) -> Result<(), String> {
    dto.validate(SME_STATUSES, &["rejected", "suspended"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::{apply, FilterState};

    fn profiles() -> Vec<SmeProfile> {
        serde_json::from_str(
            r#"[
                {"_id":"s1","businessName":"Sahyadri Agro Tools","ownerName":"Vikas","phone":9822001100,
                 "businessType":"Equipment","status":"approved"},
                {"_id":"s2","name":"Leela","email":"leela@seeds.in","category":"Seeds"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_and_defaults() {
        let list = profiles();
        assert_eq!(list[0].mobile.as_deref(), Some("9822001100"));
        assert_eq!(list[1].display_name(), "Leela");
        assert_eq!(list[1].status_or_pending(), "pending");
        assert_eq!(list[1].address_text(), "N/A");
    }

    #[test]
    fn test_search_and_filters() {
        let list = profiles();
        let f = FilterState {
            search: "9822".into(),
            ..Default::default()
        };
        assert_eq!(apply(&list, &f)[0].id, "s1");

        let f = FilterState {
            status: Some("pending".into()),
            category: Some("seeds".into()),
            ..Default::default()
        };
        assert_eq!(apply(&list, &f)[0].id, "s2");
    }

    #[test]
    fn test_status_transitions() {
        let list = profiles();
        assert_eq!(list[0].next_statuses(), vec!["rejected", "suspended"]);
        assert_eq!(
            list[1].next_statuses(),
            vec!["approved", "rejected", "suspended"]
        );

        assert!(validate_sme_status(&StatusUpdateDto::new("suspended")).is_err());
        assert!(validate_sme_status(&StatusUpdateDto::new("approved")).is_ok());
    }
}
