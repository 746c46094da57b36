use contracts::domain::a003_product::Product;
use contracts::domain::common::StatusChange;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::record_path;
use crate::shared::http;
use crate::system::auth::session::Session;

const PRODUCTS: &str = "/admin/products";

pub async fn fetch_for_review(session: Session) -> Result<Vec<Product>, ApiError> {
    http::get_list(session, &format!("{}/review", PRODUCTS)).await
}

/// Approve or reject a listing; the remark travels back to the seller.
pub async fn review_product(session: Session, change: StatusChange) -> Result<(), ApiError> {
    let path = format!("{}/review", record_path(PRODUCTS, &change.id));
    http::put_json(session, &path, &change.update).await
}
