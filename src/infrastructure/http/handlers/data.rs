//! Data HTTP Handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetDataset, SaveDataset};
use crate::domain::board::Dataset;
use crate::infrastructure::http::dto::{parse_json_body, OkResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取完整数据集
pub async fn get_data(State(state): State<Arc<AppState>>) -> Result<Json<Dataset>, ApiError> {
    let dataset = state.get_dataset_handler.handle(GetDataset).await?;
    Ok(Json(dataset))
}

/// 整体覆盖数据集
pub async fn save_data(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<OkResponse>, ApiError> {
    let dataset: Dataset = parse_json_body(&body?)?;
    state
        .save_dataset_handler
        .handle(SaveDataset { dataset })
        .await?;
    Ok(Json(OkResponse::ok()))
}
