use contracts::domain::a006_sme_profile::SmeProfile;
use contracts::domain::common::StatusChange;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::record_path;
use crate::shared::http;
use crate::system::auth::session::Session;

const SME: &str = "/admin/sme";

pub async fn fetch_profiles(session: Session) -> Result<Vec<SmeProfile>, ApiError> {
    http::get_list(session, SME).await
}

pub async fn update_status(session: Session, change: StatusChange) -> Result<(), ApiError> {
    let path = format!("{}/status", record_path(SME, &change.id));
    http::put_json(session, &path, &change.update).await
}

pub async fn delete_profile(session: Session, id: String) -> Result<(), ApiError> {
    http::delete(session, &record_path(SME, &id)).await
}
