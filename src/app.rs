use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    create_user::create_user, health::health_check, hello::hello, list_users::list_users,
};
use crate::models::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/hello", axum::routing::get(hello))
        .route("/api/health", axum::routing::get(health_check))
        .route(
            "/api/v1/users",
            axum::routing::post(create_user).get(list_users),
        )
        .with_state(state)
}
