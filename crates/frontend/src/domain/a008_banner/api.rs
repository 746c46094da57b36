use contracts::domain::a008_banner::{Banner, BannerDto, BannerForm};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::record_path;
use crate::shared::http;
use crate::system::auth::session::Session;

const BANNERS: &str = "/admin/banners";

pub async fn fetch_banners(session: Session) -> Result<Vec<Banner>, ApiError> {
    http::get_list(session, BANNERS).await
}

pub async fn save_banner(session: Session, form: BannerForm) -> Result<(), ApiError> {
    let dto = form.to_dto().map_err(ApiError::Invalid)?;
    match form.id {
        Some(id) => update_banner(session, id, dto).await,
        None => http::post_json(session, BANNERS, &dto).await,
    }
}

pub async fn update_banner(session: Session, id: String, dto: BannerDto) -> Result<(), ApiError> {
    http::put_json(session, &record_path(BANNERS, &id), &dto).await
}

pub async fn delete_banner(session: Session, id: String) -> Result<(), ApiError> {
    http::delete(session, &record_path(BANNERS, &id)).await
}
