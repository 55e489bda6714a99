use contracts::dashboards::d400_home_summary::{
    PendingOrders, SummaryMetrics, HOME_PENDING_API_PATH, HOME_SUMMARY_API_PATH,
};
use contracts::shared::error::AppError;

use crate::shared::api_utils::get_data;

pub async fn get_summary() -> Result<SummaryMetrics, AppError> {
    get_data(HOME_SUMMARY_API_PATH).await
}

pub async fn get_pending_orders() -> Result<PendingOrders, AppError> {
    get_data(HOME_PENDING_API_PATH).await
}
