use serde::{Deserialize, Serialize};

use crate::domain::common::{address_text, Address};
use crate::shared::data_view::export::amount_or_placeholder;
use crate::shared::data_view::{placeholder, Exportable, Searchable};
use crate::shared::lenient;

pub const ORDER_STATUSES: &[&str] = &[
    "pending",
    "confirmed",
    "shipped",
    "delivered",
    "cancelled",
];

pub const PAYMENT_STATUSES: &[&str] = &["pending", "paid", "failed", "refunded"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    #[serde(default, alias = "fullName")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "phone", deserialize_with = "lenient::opt_string")]
    pub mobile: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, alias = "name", alias = "productName")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
}

impl OrderItem {
    pub fn line_total(&self) -> Option<f64> {
        Some(self.quantity? * self.price?)
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Human-facing order number
    #[serde(default, alias = "orderNumber", deserialize_with = "lenient::opt_string")]
    pub order_id: Option<String>,
    #[serde(default, alias = "user", alias = "buyer")]
    pub customer: Option<OrderCustomer>,
    #[serde(default, alias = "products")]
    pub items: Vec<OrderItem>,
    #[serde(default, alias = "totalPrice", deserialize_with = "lenient::opt_f64")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub delivery_charge: Option<f64>,
    #[serde(default, alias = "orderStatus")]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default, alias = "address")]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Order {
    /// Order number, falling back to the record id.
    pub fn number(&self) -> &str {
        lenient::non_empty(self.order_id.as_deref()).unwrap_or(&self.id)
    }

    pub fn customer_name(&self) -> String {
        placeholder(self.customer.as_ref().and_then(|c| c.name.as_deref()))
    }

    pub fn customer_email(&self) -> String {
        placeholder(self.customer.as_ref().and_then(|c| c.email.as_deref()))
    }

    pub fn shipping_address_text(&self) -> String {
        address_text(self.shipping_address.as_ref())
    }

    /// Sum of item lines, when the server did not send a total.
    pub fn computed_total(&self) -> Option<f64> {
        self.total_amount.or_else(|| {
            let lines: Option<Vec<f64>> = self.items.iter().map(OrderItem::line_total).collect();
            lines
                .filter(|l| !l.is_empty())
                .map(|l| l.iter().sum::<f64>() + self.delivery_charge.unwrap_or(0.0))
        })
    }

    /// Local patch applied right after a delivery charge update is accepted.
    /// When the server sent a total the difference is carried over into it.
    pub fn apply_delivery_charge(&mut self, charge: f64) {
        let previous = self.delivery_charge.unwrap_or(0.0);
        if let Some(total) = self.total_amount.as_mut() {
            *total += charge - previous;
        }
        self.delivery_charge = Some(charge);
    }
}

impl Searchable for Order {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        let customer = self.customer.as_ref();
        vec![
            self.order_id.as_deref(),
            Some(self.id.as_str()),
            customer.and_then(|c| c.name.as_deref()),
            customer.and_then(|c| c.email.as_deref()),
        ]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => self.status.clone(),
            "category" | "paymentStatus" => self.payment_status.clone(),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

impl Exportable for Order {
    const ENTITY: &'static str = "Orders";

    fn headers() -> Vec<&'static str> {
        vec![
            "Order ID",
            "Customer",
            "Email",
            "Items",
            "Total",
            "Delivery charge",
            "Status",
            "Payment",
            "Shipping address",
            "Date",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.number().to_string(),
            self.customer_name(),
            self.customer_email(),
            self.items.len().to_string(),
            amount_or_placeholder(self.computed_total()),
            amount_or_placeholder(self.delivery_charge),
            placeholder(self.status.as_deref()),
            placeholder(self.payment_status.as_deref()),
            self.shipping_address_text(),
            placeholder(self.created_at.as_deref()),
        ]
    }
}

// ============================================================================
// Mutations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryChargeDto {
    pub delivery_charge: f64,
}

/// Parse and check the delivery charge typed into the inline editor.
pub fn parse_delivery_charge(input: &str) -> Result<DeliveryChargeDto, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Delivery charge must be a number".to_string())?;
    if !value.is_finite() || value < 0.0 {
        return Err("Delivery charge cannot be negative".into());
    }
    Ok(DeliveryChargeDto {
        delivery_charge: value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::{apply, patch_by_id, FilterState};

    fn orders() -> Vec<Order> {
        serde_json::from_str(
            r#"[
                {"_id":"o1","orderId":"ORD-1001","user":{"name":"Asha","email":"asha@example.in"},
                 "products":[{"name":"Urea 50kg","quantity":2,"price":"300"}],
                 "totalAmount":650,"deliveryCharge":50,"status":"pending"},
                {"_id":"o2","orderId":1002,"status":"Delivered","createdAt":"2024-04-01T08:00:00Z"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_and_helpers() {
        let list = orders();
        assert_eq!(list[0].customer_name(), "Asha");
        assert_eq!(list[0].items[0].line_total(), Some(600.0));
        assert_eq!(list[1].number(), "1002");
        assert_eq!(list[1].customer_name(), "N/A");
        assert_eq!(list[1].shipping_address_text(), "N/A");
    }

    #[test]
    fn test_search_by_order_number_and_customer() {
        let list = orders();
        let by_number = FilterState {
            search: "ord-10".into(),
            ..Default::default()
        };
        assert_eq!(apply(&list, &by_number).len(), 1);

        let by_status = FilterState {
            status: Some("delivered".into()),
            ..Default::default()
        };
        assert_eq!(apply(&list, &by_status)[0].id, "o2");
    }

    #[test]
    fn test_delivery_charge_patch() {
        let mut list = orders();
        let dto = parse_delivery_charge(" 80 ").unwrap();
        assert!(patch_by_id(&mut list, "o1", |o| o.apply_delivery_charge(dto.delivery_charge)));
        assert_eq!(list[0].delivery_charge, Some(80.0));
        assert_eq!(list[0].total_amount, Some(680.0));

        assert!(parse_delivery_charge("-5").is_err());
        assert!(parse_delivery_charge("abc").is_err());
    }

    #[test]
    fn test_computed_total_from_items() {
        let mut order = orders().remove(0);
        order.total_amount = None;
        assert_eq!(order.computed_total(), Some(650.0));
    }
}
