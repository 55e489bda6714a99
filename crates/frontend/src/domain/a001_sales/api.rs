use contracts::domain::a001_sales::{SaleDto, SaleRecord, SALES_API_PATH};
use contracts::shared::api::MutationAck;
use contracts::shared::error::AppError;

use crate::shared::api_utils::{delete, entity_path, get_list, post_json, put_json};

pub async fn fetch_sales() -> Result<Vec<SaleRecord>, AppError> {
    get_list(SALES_API_PATH).await
}

pub async fn create_sale(dto: &SaleDto) -> Result<MutationAck, AppError> {
    post_json(SALES_API_PATH, dto).await
}

pub async fn update_sale(item_id: &str, dto: &SaleDto) -> Result<MutationAck, AppError> {
    put_json(&entity_path(SALES_API_PATH, item_id), dto).await
}

pub async fn delete_sale(item_id: &str) -> Result<MutationAck, AppError> {
    delete(&entity_path(SALES_API_PATH, item_id)).await
}
