use contracts::dashboards::d400_overview::DashboardStats;
use contracts::shared::api_error::ApiError;

use crate::shared::http;
use crate::system::auth::session::Session;

const STATS: &str = "/admin/dashboard/stats";

/// Headline counters and the monthly series for the overview tab.
pub async fn get_stats(session: Session) -> Result<DashboardStats, ApiError> {
    http::get_json(session, STATS).await
}
