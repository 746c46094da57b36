use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::choices_with_current;
use crate::shared::data_view::export::amount_or_placeholder;
use crate::shared::data_view::filter::parse_record_date;
use crate::shared::data_view::{placeholder, Exportable, Searchable};
use crate::shared::lenient;

pub const DISCOUNT_TYPES: &[&str] = &["percentage", "flat"];

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub discount_type: Option<String>,
    #[serde(default, alias = "discount", deserialize_with = "lenient::opt_f64")]
    pub discount_value: Option<f64>,
    #[serde(default, alias = "minOrderValue", deserialize_with = "lenient::opt_f64")]
    pub min_order_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub max_discount: Option<f64>,
    #[serde(default, alias = "startDate")]
    pub valid_from: Option<String>,
    #[serde(default, alias = "endDate", alias = "expiryDate")]
    pub valid_to: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub usage_limit: Option<i64>,
    #[serde(default, alias = "usedCount", deserialize_with = "lenient::opt_i64")]
    pub times_used: Option<i64>,
    #[serde(default, alias = "active", deserialize_with = "lenient::bool_or_false")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PromoCode {
    pub fn status(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }

    /// `"10%"` or `"₹50.00"`
    pub fn discount_text(&self) -> String {
        match (self.discount_type.as_deref(), self.discount_value) {
            (_, None) => placeholder(None),
            (Some(t), Some(v)) if normalize_discount_type(t) == "percentage" => format!("{}%", v),
            (_, Some(v)) => format!("₹{:.2}", v),
        }
    }

    /// Body for the toggle button: the stored code with the flag flipped.
    /// Fails when the stored record no longer passes form validation.
    pub fn toggled(&self) -> Result<PromoCodeDto, String> {
        let mut form = PromoCodeForm::from(self);
        form.is_active = !self.is_active;
        form.to_dto()
    }

    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.valid_to
            .as_deref()
            .and_then(parse_record_date)
            .map(|to| to < today)
            .unwrap_or(false)
    }
}

impl Searchable for PromoCode {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.code.as_str()), self.description.as_deref()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status().to_string()),
            "category" | "discountType" => self.discount_type.clone(),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

impl Exportable for PromoCode {
    const ENTITY: &'static str = "PromoCodes";

    fn headers() -> Vec<&'static str> {
        vec![
            "Code",
            "Description",
            "Discount",
            "Min order",
            "Max discount",
            "Valid from",
            "Valid to",
            "Usage",
            "Status",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        let usage = match (self.times_used, self.usage_limit) {
            (Some(used), Some(limit)) => format!("{}/{}", used, limit),
            (Some(used), None) => used.to_string(),
            (None, Some(limit)) => format!("0/{}", limit),
            (None, None) => placeholder(None),
        };
        vec![
            self.code.clone(),
            placeholder(self.description.as_deref()),
            self.discount_text(),
            amount_or_placeholder(self.min_order_amount),
            amount_or_placeholder(self.max_discount),
            placeholder(self.valid_from.as_deref()),
            placeholder(self.valid_to.as_deref()),
            usage,
            self.status().to_string(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

/// Request body for create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeDto {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: String,
    pub discount_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    pub valid_from: String,
    pub valid_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i64>,
    pub is_active: bool,
}

/// Text inputs of the promo code modal, as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoCodeForm {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub discount_type: String,
    pub discount_value: String,
    pub min_order_amount: String,
    pub max_discount: String,
    pub valid_from: String,
    pub valid_to: String,
    pub usage_limit: String,
    pub is_active: bool,
    /// Discount type the record was loaded with; stays selectable even when
    /// it is not one of `DISCOUNT_TYPES`.
    pub stored_discount_type: String,
}

/// Lower-cased discount type with the usual spellings folded onto
/// `DISCOUNT_TYPES`.
pub fn normalize_discount_type(value: &str) -> String {
    let value = value.trim().to_lowercase();
    match value.as_str() {
        "percent" | "percentage" | "%" => "percentage".to_string(),
        "flat" | "fixed" | "amount" => "flat".to_string(),
        _ => value,
    }
}

impl Default for PromoCodeForm {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            description: String::new(),
            discount_type: DISCOUNT_TYPES[0].to_string(),
            discount_value: String::new(),
            min_order_amount: String::new(),
            max_discount: String::new(),
            valid_from: String::new(),
            valid_to: String::new(),
            usage_limit: String::new(),
            is_active: true,
            stored_discount_type: String::new(),
        }
    }
}

impl From<&PromoCode> for PromoCodeForm {
    fn from(p: &PromoCode) -> Self {
        let amount = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        let date = |v: &Option<String>| {
            v.as_deref()
                .and_then(parse_record_date)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        let stored_discount_type = p
            .discount_type
            .as_deref()
            .map(normalize_discount_type)
            .unwrap_or_default();
        let discount_type = if stored_discount_type.is_empty() {
            DISCOUNT_TYPES[0].to_string()
        } else {
            stored_discount_type.clone()
        };
        Self {
            id: Some(p.id.clone()),
            code: p.code.clone(),
            description: p.description.clone().unwrap_or_default(),
            discount_type,
            discount_value: amount(p.discount_value),
            min_order_amount: amount(p.min_order_amount),
            max_discount: amount(p.max_discount),
            valid_from: date(&p.valid_from),
            valid_to: date(&p.valid_to),
            usage_limit: p.usage_limit.map(|v| v.to_string()).unwrap_or_default(),
            is_active: p.is_active,
            stored_discount_type,
        }
    }
}

fn parse_optional_amount(value: &str, label: &str) -> Result<Option<f64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(format!("{} must be a non-negative number", label)),
    }
}

impl PromoCodeForm {
    pub fn discount_type_options(&self) -> Vec<String> {
        choices_with_current(DISCOUNT_TYPES, &self.stored_discount_type)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_dto().map(|_| ())
    }

    pub fn to_dto(&self) -> Result<PromoCodeDto, String> {
        let code = self.code.trim().to_uppercase();
        if code.is_empty() {
            return Err("Code is required".into());
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err("Code may only contain letters, digits, '-' and '_'".into());
        }
        if !self.discount_type_options().contains(&self.discount_type) {
            return Err(format!("Unknown discount type: {}", self.discount_type));
        }

        let discount_value = match parse_optional_amount(&self.discount_value, "Discount")? {
            Some(v) if v > 0.0 => v,
            _ => return Err("Discount must be greater than zero".into()),
        };
        if self.discount_type == "percentage" && discount_value > 100.0 {
            return Err("Percentage discount cannot exceed 100".into());
        }

        let min_order_amount = parse_optional_amount(&self.min_order_amount, "Minimum order")?;
        let max_discount = parse_optional_amount(&self.max_discount, "Maximum discount")?;

        let from = NaiveDate::parse_from_str(self.valid_from.trim(), "%Y-%m-%d")
            .map_err(|_| "Valid from must be a date".to_string())?;
        let to = NaiveDate::parse_from_str(self.valid_to.trim(), "%Y-%m-%d")
            .map_err(|_| "Valid to must be a date".to_string())?;
        if from > to {
            return Err("Valid from must not be after valid to".into());
        }

        let usage_limit = match self.usage_limit.trim() {
            "" => None,
            raw => match raw.parse::<i64>() {
                Ok(v) if v > 0 => Some(v),
                _ => return Err("Usage limit must be a positive whole number".into()),
            },
        };

        let description = self.description.trim();
        Ok(PromoCodeDto {
            code,
            description: (!description.is_empty()).then(|| description.to_string()),
            discount_type: self.discount_type.clone(),
            discount_value,
            min_order_amount,
            max_discount,
            valid_from: from.format("%Y-%m-%d").to_string(),
            valid_to: to.format("%Y-%m-%d").to_string(),
            usage_limit,
            is_active: self.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PromoCodeForm {
        PromoCodeForm {
            code: " kharif25 ".into(),
            discount_value: "25".into(),
            valid_from: "2024-06-01".into(),
            valid_to: "2024-09-30".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_to_dto() {
        let dto = form().to_dto().unwrap();
        assert_eq!(dto.code, "KHARIF25");
        assert_eq!(dto.discount_value, 25.0);
        assert_eq!(dto.description, None);
        assert!(dto.is_active);
    }

    #[test]
    fn test_form_rules() {
        let mut f = form();
        f.discount_value = "120".into();
        assert_eq!(
            f.validate(),
            Err("Percentage discount cannot exceed 100".to_string())
        );

        f.discount_type = "flat".into();
        assert!(f.validate().is_ok());

        f.valid_to = "2024-05-01".into();
        assert!(f.validate().is_err());

        let mut f = form();
        f.discount_value = "0".into();
        assert!(f.validate().is_err());

        let mut f = form();
        f.code = "SAVE 10".into();
        assert!(f.validate().is_err());

        let mut f = form();
        f.usage_limit = "-3".into();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_edit_roundtrip_from_record() {
        let record: PromoCode = serde_json::from_str(
            r#"{"_id":"pc1","code":"RABI10","discountType":"flat","discount":"50",
                "startDate":"2024-10-01T00:00:00.000Z","expiryDate":"2024-12-31","active":true}"#,
        )
        .unwrap();
        let form = PromoCodeForm::from(&record);
        assert_eq!(form.id.as_deref(), Some("pc1"));
        assert_eq!(form.valid_from, "2024-10-01");
        assert_eq!(form.discount_value, "50");
        assert!(form.validate().is_ok());
        assert_eq!(record.discount_text(), "₹50.00");
        assert_eq!(record.status(), "active");
    }

    #[test]
    fn test_expiry() {
        let record: PromoCode =
            serde_json::from_str(r#"{"_id":"pc2","code":"OLD","validTo":"2024-01-31"}"#).unwrap();
        let day = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        assert!(record.is_expired_on(day("2024-02-01")));
        assert!(!record.is_expired_on(day("2024-01-31")));
        assert_eq!(record.to_row()[7], "N/A");
    }

    #[test]
    fn test_toggle_flips_active_flag() {
        let record: PromoCode = serde_json::from_str(
            r#"{"_id":"p1","code":"RABI10","discountType":"percentage","discount":10,
                "startDate":"2024-10-01","endDate":"2025-01-31","active":true}"#,
        )
        .unwrap();
        let dto = record.toggled().unwrap();
        assert!(!dto.is_active);
        assert_eq!(dto.code, "RABI10");

        let broken: PromoCode = serde_json::from_str(r#"{"_id":"p2","code":"OLD"}"#).unwrap();
        assert!(broken.toggled().is_err());
    }

    #[test]
    fn test_edit_form_normalizes_discount_type() {
        let record: PromoCode = serde_json::from_str(
            r#"{"_id":"p3","code":"RABI10","discountType":"Percentage","discount":10,
                "startDate":"2024-10-01","endDate":"2025-01-31"}"#,
        )
        .unwrap();
        let form = PromoCodeForm::from(&record);
        assert_eq!(form.discount_type, "percentage");
        assert!(form.validate().is_ok());
        assert_eq!(record.discount_text(), "10%");

        let record: PromoCode = serde_json::from_str(
            r#"{"_id":"p4","code":"SEED50","discountType":"FIXED","discount":50,
                "startDate":"2024-10-01","endDate":"2025-01-31"}"#,
        )
        .unwrap();
        assert_eq!(PromoCodeForm::from(&record).discount_type, "flat");

        let record: PromoCode = serde_json::from_str(
            r#"{"_id":"p5","code":"SHIP","discountType":"free_shipping","discount":1,
                "startDate":"2024-10-01","endDate":"2025-01-31"}"#,
        )
        .unwrap();
        let mut form = PromoCodeForm::from(&record);
        assert_eq!(form.discount_type_options(), vec!["percentage", "flat", "free_shipping"]);
        assert!(form.validate().is_ok());
        form.discount_type = "bogus".into();
        assert!(form.validate().is_err());
    }

}
