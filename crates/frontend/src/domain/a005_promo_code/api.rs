use contracts::domain::a005_promo_code::{PromoCode, PromoCodeDto, PromoCodeForm};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::record_path;
use crate::shared::http;
use crate::system::auth::session::Session;

const PROMO_CODES: &str = "/admin/promocodes";

pub async fn fetch_promo_codes(session: Session) -> Result<Vec<PromoCode>, ApiError> {
    http::get_list(session, PROMO_CODES).await
}

/// POST for a new code, PUT when the form carries an id.
pub async fn save_promo_code(session: Session, form: PromoCodeForm) -> Result<(), ApiError> {
    let dto = form.to_dto().map_err(ApiError::Invalid)?;
    match form.id {
        Some(id) => update_promo_code(session, id, dto).await,
        None => http::post_json(session, PROMO_CODES, &dto).await,
    }
}

pub async fn update_promo_code(session: Session, id: String, dto: PromoCodeDto) -> Result<(), ApiError> {
    http::put_json(session, &record_path(PROMO_CODES, &id), &dto).await
}

pub async fn delete_promo_code(session: Session, id: String) -> Result<(), ApiError> {
    http::delete(session, &record_path(PROMO_CODES, &id)).await
}
