use contracts::domain::a002_stitching::{StitchingDto, StitchingOrder, STITCHING_API_PATH};
use contracts::shared::api::MutationAck;
use contracts::shared::error::AppError;

use crate::shared::api_utils::{delete, entity_path, get_list, post_json, put_json};

pub async fn fetch_orders() -> Result<Vec<StitchingOrder>, AppError> {
    get_list(STITCHING_API_PATH).await
}

pub async fn create_order(dto: &StitchingDto) -> Result<MutationAck, AppError> {
    post_json(STITCHING_API_PATH, dto).await
}

/// The identity travels in the path only; the body never carries it.
pub async fn update_order(stitching_id: &str, dto: &StitchingDto) -> Result<MutationAck, AppError> {
    put_json(&entity_path(STITCHING_API_PATH, stitching_id), dto).await
}

pub async fn delete_order(stitching_id: &str) -> Result<MutationAck, AppError> {
    delete(&entity_path(STITCHING_API_PATH, stitching_id)).await
}
