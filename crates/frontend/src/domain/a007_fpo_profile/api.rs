use contracts::domain::a007_fpo_profile::FpoProfile;
use contracts::domain::common::StatusChange;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::record_path;
use crate::shared::http;
use crate::system::auth::session::Session;

const FPO: &str = "/admin/fpo";

pub async fn fetch_profiles(session: Session) -> Result<Vec<FpoProfile>, ApiError> {
    http::get_list(session, FPO).await
}

pub async fn update_status(session: Session, change: StatusChange) -> Result<(), ApiError> {
    let path = format!("{}/status", record_path(FPO, &change.id));
    http::put_json(session, &path, &change.update).await
}

pub async fn delete_profile(session: Session, id: String) -> Result<(), ApiError> {
    http::delete(session, &record_path(FPO, &id)).await
}
