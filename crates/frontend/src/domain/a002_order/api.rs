use contracts::domain::a002_order::{DeliveryChargeDto, Order};
use contracts::domain::common::StatusChange;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::record_path;
use crate::shared::http;
use crate::system::auth::session::Session;

const ORDERS: &str = "/admin/orders";

pub async fn fetch_orders(session: Session) -> Result<Vec<Order>, ApiError> {
    http::get_list(session, ORDERS).await
}

pub async fn update_status(session: Session, change: StatusChange) -> Result<(), ApiError> {
    let path = format!("{}/status", record_path(ORDERS, &change.id));
    http::put_json(session, &path, &change.update).await
}

pub async fn update_delivery_charge(
    session: Session,
    id: String,
    dto: DeliveryChargeDto,
) -> Result<(), ApiError> {
    let path = format!("{}/delivery-charge", record_path(ORDERS, &id));
    http::put_json(session, &path, &dto).await
}
