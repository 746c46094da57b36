use serde::{Deserialize, Serialize};

use crate::domain::common::{address_text, choices_with_current, Address};
use crate::shared::data_view::{extra_values, placeholder, Exportable, Searchable};
use crate::shared::lenient;

pub const CUSTOMER_STATUSES: &[&str] = &["active", "blocked"];

/// Fields the Customers page can group by, with their labels.
pub const CUSTOMER_GROUP_FIELDS: &[(&str, &str)] = &[
    ("none", "No grouping"),
    ("occupation", "Occupation"),
    ("gender", "Gender"),
    ("company", "Company"),
    ("status", "Status"),
];

// ============================================================================
// Record
// ============================================================================

/// Registered buyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "fullName")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "phone", deserialize_with = "lenient::opt_string")]
    pub mobile: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default, alias = "companyName")]
    pub company: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub total_orders: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Customer {
    pub fn display_name(&self) -> String {
        placeholder(self.name.as_deref())
    }

    pub fn address_text(&self) -> String {
        address_text(self.address.as_ref())
    }
}

impl Searchable for Customer {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.email.as_deref(),
            self.mobile.as_deref(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => self.status.clone(),
            "category" | "gender" => self.gender.clone(),
            "occupation" => self.occupation.clone(),
            "company" => self.company.clone(),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

impl Exportable for Customer {
    const ENTITY: &'static str = "Customers";

    fn headers() -> Vec<&'static str> {
        vec![
            "Name",
            "Email",
            "Mobile",
            "Gender",
            "Occupation",
            "Company",
            "Status",
            "Address",
            "Orders",
            "Joined",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.display_name(),
            placeholder(self.email.as_deref()),
            placeholder(self.mobile.as_deref()),
            placeholder(self.gender.as_deref()),
            placeholder(self.occupation.as_deref()),
            placeholder(self.company.as_deref()),
            placeholder(self.status.as_deref()),
            self.address_text(),
            self.total_orders
                .map(|n| n.to_string())
                .unwrap_or_else(|| placeholder(None)),
            placeholder(self.created_at.as_deref()),
        ]
    }
}

// ============================================================================
// Edit form
// ============================================================================

/// Editable part of a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdateDto {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub status: String,
    /// Status the record was loaded with; stays selectable even when it is
    /// not one of `CUSTOMER_STATUSES`.
    #[serde(skip)]
    pub stored_status: String,
}

impl From<&Customer> for CustomerUpdateDto {
    fn from(c: &Customer) -> Self {
        let stored = c
            .status
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        let status = if stored.is_empty() {
            CUSTOMER_STATUSES[0].to_string()
        } else {
            stored.clone()
        };
        Self {
            id: c.id.clone(),
            name: c.name.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            mobile: c.mobile.clone().unwrap_or_default(),
            status,
            stored_status: stored,
        }
    }
}

/// Statuses present in the data beyond `CUSTOMER_STATUSES`, for the filter.
pub fn extra_statuses(customers: &[Customer]) -> Vec<String> {
    extra_values(customers, "status", CUSTOMER_STATUSES)
}

impl CustomerUpdateDto {
    pub fn status_options(&self) -> Vec<String> {
        choices_with_current(CUSTOMER_STATUSES, &self.stored_status)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err("Enter a valid email address".into());
        }
        let digits = self.mobile.chars().filter(|c| c.is_ascii_digit()).count();
        if !self.mobile.trim().is_empty() && digits < 10 {
            return Err("Mobile number must have at least 10 digits".into());
        }
        if !self.status_options().contains(&self.status) {
            return Err(format!("Unknown status: {}", self.status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::{build_csv, group_by, GroupKey, UNASSIGNED};

    fn sample() -> Vec<Customer> {
        serde_json::from_str(
            r#"[
                {"_id":"c1","name":"Asha Patil","email":"asha@example.in","mobile":9876543210,
                 "occupation":"Farmer","address":{"city":"Nashik","state":"Maharashtra"}},
                {"_id":"c2","name":"Ravi","occupation":null,"status":"active"},
                {"id":"c3","name":"Meena","occupation":"Farmer","createdAt":"2024-03-15T10:00:00Z"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_partial_records() {
        let customers = sample();
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[0].mobile.as_deref(), Some("9876543210"));
        assert_eq!(customers[2].id, "c3");
        assert!(customers[1].address.is_none());
    }

    #[test]
    fn test_missing_address_is_na_in_detail_and_export() {
        let customers = sample();
        assert_eq!(customers[1].address_text(), "N/A");

        let row = customers[1].to_row();
        let address_col = Customer::headers()
            .iter()
            .position(|h| *h == "Address")
            .unwrap();
        assert_eq!(row[address_col], "N/A");
        assert!(!row.iter().any(|c| c == "undefined" || c == "null"));

        let csv = build_csv(&customers).unwrap();
        assert!(csv.contains("Nashik, Maharashtra"));
    }

    #[test]
    fn test_group_by_occupation() {
        let groups = group_by(&sample(), &GroupKey::Field("occupation".into()));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Farmer");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].label, UNASSIGNED);
        assert_eq!(groups[1].items.len(), 1);
    }

    #[test]
    fn test_update_validation() {
        let customers = sample();
        let mut dto = CustomerUpdateDto::from(&customers[0]);
        assert_eq!(dto.status, "active");
        assert!(dto.validate().is_ok());

        dto.mobile = "12345".into();
        assert!(dto.validate().is_err());

        dto.mobile.clear();
        dto.name = " ".into();
        assert_eq!(dto.validate(), Err("Name is required".to_string()));
    }

    #[test]
    fn test_edit_draft_normalizes_stored_status() {
        let c: Customer =
            serde_json::from_str(r#"{"_id":"c9","name":"Asha","status":" Active "}"#).unwrap();
        let dto = CustomerUpdateDto::from(&c);
        assert_eq!(dto.status, "active");
        assert!(dto.validate().is_ok());
        assert_eq!(dto.status_options(), vec!["active", "blocked"]);

        let c: Customer =
            serde_json::from_str(r#"{"_id":"c10","name":"Ravi","status":"inactive"}"#).unwrap();
        let mut dto = CustomerUpdateDto::from(&c);
        assert!(dto.validate().is_ok());
        assert_eq!(dto.status_options(), vec!["active", "blocked", "inactive"]);

        dto.status = "deleted".into();
        assert_eq!(dto.validate(), Err("Unknown status: deleted".to_string()));
    }

    #[test]
    fn test_extra_statuses_for_filter() {
        let customers: Vec<Customer> = serde_json::from_str(
            r#"[{"_id":"a","status":"Active"},{"_id":"b","status":"Inactive"},
                {"_id":"c","status":"inactive"},{"_id":"d"}]"#,
        )
        .unwrap();
        assert_eq!(extra_statuses(&customers), vec!["Inactive"]);
    }
}
