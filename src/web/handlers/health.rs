//! Health check HTTP handler

use axum::{Json, extract::State};

use crate::web::{
    AppState,
    responses::{ApiResponse, HealthResponse},
};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse::healthy(state.start_time)))
}
