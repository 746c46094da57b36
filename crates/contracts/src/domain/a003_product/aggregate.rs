use serde::{Deserialize, Serialize};

use crate::domain::common::StatusUpdateDto;
use crate::shared::data_view::export::amount_or_placeholder;
use crate::shared::data_view::{placeholder, Exportable, Searchable};
use crate::shared::lenient;

pub const REVIEW_STATUSES: &[&str] = &["pending", "approved", "rejected"];
/// Decisions an admin can take on a listing
pub const REVIEW_DECISIONS: &[&str] = &["approved", "rejected"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeller {
    #[serde(default, alias = "businessName")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    #[serde(default, alias = "title")]
    pub name: Option<String>,
}

/// Seller listing awaiting or past moderation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "productName", alias = "title")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "vendor")]
    pub seller: Option<ProductSeller>,
    #[serde(default)]
    pub category: Option<ProductCategory>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub stock: Option<i64>,
    #[serde(default, alias = "status", alias = "approvalStatus")]
    pub review_status: Option<String>,
    #[serde(default, alias = "remark")]
    pub review_remark: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    pub fn seller_name(&self) -> String {
        placeholder(self.seller.as_ref().and_then(|s| s.name.as_deref()))
    }

    pub fn category_name(&self) -> String {
        placeholder(self.category.as_ref().and_then(|c| c.name.as_deref()))
    }

    /// Listings without a status are treated as awaiting review.
    pub fn review_status_or_pending(&self) -> &str {
        lenient::non_empty(self.review_status.as_deref()).unwrap_or("pending")
    }
}

impl Searchable for Product {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.seller.as_ref().and_then(|s| s.name.as_deref()),
            self.category.as_ref().and_then(|c| c.name.as_deref()),
        ]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.review_status_or_pending().to_string()),
            "category" => self.category.as_ref().and_then(|c| c.name.clone()),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

impl Exportable for Product {
    const ENTITY: &'static str = "ProductReviews";

    fn headers() -> Vec<&'static str> {
        vec![
            "Product",
            "Seller",
            "Category",
            "Price",
            "Stock",
            "Review status",
            "Remark",
            "Submitted",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            placeholder(self.name.as_deref()),
            self.seller_name(),
            self.category_name(),
            amount_or_placeholder(self.price),
            self.stock
                .map(|s| s.to_string())
                .unwrap_or_else(|| placeholder(None)),
            self.review_status_or_pending().to_string(),
            placeholder(self.review_remark.as_deref()),
            placeholder(self.created_at.as_deref()),
        ]
    }
}

/// Approve/reject decision. Rejections must carry a remark for the seller.
pub fn validate_review(dto: &StatusUpdateDto) -> Result<(), String> {
    dto.validate(REVIEW_DECISIONS, &["rejected"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::{apply, FilterState};

    fn products() -> Vec<Product> {
        serde_json::from_str(
            r#"[
                {"_id":"p1","name":"Organic Wheat","seller":{"businessName":"Green Acres FPO"},
                 "category":{"name":"Grains"},"price":"42.5"},
                {"_id":"p2","name":"Drip Kit","category":{"name":"Irrigation"},"status":"approved"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_nested_fields_flatten() {
        let list = products();
        assert_eq!(list[0].seller_name(), "Green Acres FPO");
        assert_eq!(list[1].seller_name(), "N/A");
        assert_eq!(list[0].to_row()[3], "42.50");
    }

    #[test]
    fn test_missing_status_counts_as_pending() {
        let list = products();
        let pending = FilterState {
            status: Some("pending".into()),
            ..Default::default()
        };
        let found = apply(&list, &pending);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "p1");
    }

    #[test]
    fn test_search_by_seller_and_category() {
        let list = products();
        let f = FilterState {
            search: "green".into(),
            ..Default::default()
        };
        assert_eq!(apply(&list, &f).len(), 1);
        let f = FilterState {
            category: Some("irrigation".into()),
            ..Default::default()
        };
        assert_eq!(apply(&list, &f)[0].id, "p2");
    }

    #[test]
    fn test_reject_needs_remark() {
        let mut dto = StatusUpdateDto::new("rejected");
        assert!(validate_review(&dto).is_err());
        dto.remark = Some("Blurry images".into());
        assert!(validate_review(&dto).is_ok());
        assert!(validate_review(&StatusUpdateDto::new("approved")).is_ok());
    }
}
