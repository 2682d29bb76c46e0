use crate::{error::Result, models::CodeValue, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use tokio::task;

/// `GET /codes/:code_type`
pub async fn list_codes(
    State(state): State<AppState>,
    Path(code_type): Path<String>,
) -> Result<Json<Vec<CodeValue>>> {
    let service = state.codes.clone();
    let codes = task::spawn_blocking(move || service.find_code_values_by_type(&code_type)).await??;
    Ok(Json(codes))
}

/// `GET /codes/:code_type/:code`
pub async fn get_code(
    State(state): State<AppState>,
    Path((code_type, code)): Path<(String, String)>,
) -> Result<Json<CodeValue>> {
    let service = state.codes.clone();
    let value = task::spawn_blocking(move || {
        service.find_code_value_by_type_and_code(&code_type, &code)
    })
    .await??;
    Ok(Json(value))
}
