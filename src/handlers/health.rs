use axum::extract::State;
use diesel::prelude::*;
use http::StatusCode;
use std::sync::Arc;

use crate::models::AppState;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Database is reachable"),
        (status = 503, description = "Database is unreachable")
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.db.get() {
        Ok(mut conn) => match diesel::sql_query("SELECT 1").execute(&mut conn) {
            Ok(_) => StatusCode::OK,
            Err(_) => StatusCode::SERVICE_UNAVAILABLE,
        },
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
