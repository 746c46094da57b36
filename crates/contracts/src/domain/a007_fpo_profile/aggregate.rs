use serde::{Deserialize, Serialize};

use crate::domain::common::{address_text, Address, StatusUpdateDto};
use crate::shared::data_view::{placeholder, Exportable, Searchable};
use crate::shared::lenient;

pub const FPO_STATUSES: &[&str] = &["pending", "approved", "rejected"];

/// Farmer producer organisation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FpoProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "name", alias = "organizationName")]
    pub fpo_name: Option<String>,
    #[serde(default, alias = "ceoName")]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "phone", deserialize_with = "lenient::opt_string")]
    pub mobile: Option<String>,
    #[serde(default, alias = "regNo", deserialize_with = "lenient::opt_string")]
    pub registration_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub member_count: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl FpoProfile {
    pub fn display_name(&self) -> String {
        placeholder(self.fpo_name.as_deref())
    }

    pub fn status_or_pending(&self) -> &str {
        lenient::non_empty(self.status.as_deref()).unwrap_or("pending")
    }

    pub fn address_text(&self) -> String {
        address_text(self.address.as_ref())
    }
}

impl Searchable for FpoProfile {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.fpo_name.as_deref(),
            self.contact_person.as_deref(),
            self.email.as_deref(),
            self.registration_number.as_deref(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status_or_pending().to_string()),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

impl Exportable for FpoProfile {
    const ENTITY: &'static str = "FPO";

    fn headers() -> Vec<&'static str> {
        vec![
            "FPO",
            "Contact person",
            "Email",
            "Mobile",
            "Registration no.",
            "Members",
            "Status",
            "Address",
            "Registered",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.display_name(),
            placeholder(self.contact_person.as_deref()),
            placeholder(self.email.as_deref()),
            placeholder(self.mobile.as_deref()),
            placeholder(self.registration_number.as_deref()),
            self.member_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| placeholder(None)),
            self.status_or_pending().to_string(),
            self.address_text(),
            placeholder(self.created_at.as_deref()),
        ]
    }
}

pub fn validate_fpo_status(dto: &StatusUpdateDto) -> Result<(), String> {
    dto.validate(&FPO_STATUSES[1..], &["rejected"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::{apply, FilterState};

    #[test]
    fn test_decode_and_search_by_registration() {
        let list: Vec<FpoProfile> = serde_json::from_str(
            r#"[
                {"_id":"f1","fpoName":"Godavari Farmers Co","regNo":"MH-FPO-2291","memberCount":"420"},
                {"_id":"f2","name":"Vidarbha Growers","contactPerson":"Sunil","status":"approved"}
            ]"#,
        )
        .unwrap();
        assert_eq!(list[0].member_count, Some(420));
        assert_eq!(list[0].status_or_pending(), "pending");

        let f = FilterState {
            search: "fpo-22".into(),
            ..Default::default()
        };
        assert_eq!(apply(&list, &f)[0].id, "f1");

        let f = FilterState {
            search: "sunil".into(),
            status: Some("approved".into()),
            ..Default::default()
        };
        assert_eq!(apply(&list, &f)[0].id, "f2");
        assert_eq!(list[1].to_row()[5], "N/A");
    }

    #[test]
    fn test_status_update_rules() {
        assert!(validate_fpo_status(&StatusUpdateDto::new("pending")).is_err());
        assert!(validate_fpo_status(&StatusUpdateDto::new("rejected")).is_err());
        let dto = StatusUpdateDto {
            status: "rejected".into(),
            remark: Some("Registration certificate missing".into()),
        };
        assert!(validate_fpo_status(&dto).is_ok());
    }
}
