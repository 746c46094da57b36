use contracts::domain::a001_customer::{Customer, CustomerUpdateDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::record_path;
use crate::shared::http;
use crate::system::auth::session::Session;

const CUSTOMERS: &str = "/admin/customers";

pub async fn fetch_customers(session: Session) -> Result<Vec<Customer>, ApiError> {
    http::get_list(session, CUSTOMERS).await
}

pub async fn update_customer(session: Session, dto: CustomerUpdateDto) -> Result<(), ApiError> {
    http::put_json(session, &record_path(CUSTOMERS, &dto.id), &dto).await
}

pub async fn delete_customer(session: Session, id: String) -> Result<(), ApiError> {
    http::delete(session, &record_path(CUSTOMERS, &id)).await
}
