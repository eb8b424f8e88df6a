use axum::Json;

use crate::models::dtos::MessageResponse;

#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    ),
    tag = "Health"
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, world!".to_string(),
    })
}
