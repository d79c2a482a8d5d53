use crate::error::Result;
use crate::model::HealthResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let shortcodes = state.shortener().count().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        shortcodes,
    }))
}
