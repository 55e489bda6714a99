use contracts::domain::a003_billing::{Bill, BillDetails, CreateBillRequest, BILLING_API_PATH};
use contracts::shared::api::MutationAck;
use contracts::shared::error::AppError;

use crate::shared::api_utils::{delete, entity_path, get_list, post_for_data};

pub async fn fetch_bills() -> Result<Vec<Bill>, AppError> {
    get_list(BILLING_API_PATH).await
}

/// The server totals the sale and stitching order linked to the item.
pub async fn create_bill(request: &CreateBillRequest) -> Result<BillDetails, AppError> {
    post_for_data(BILLING_API_PATH, request).await
}

pub async fn delete_bill(bill_id: &str) -> Result<MutationAck, AppError> {
    delete(&entity_path(BILLING_API_PATH, bill_id)).await
}
