use axum::{
    extract::{Query, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use tracing::error;

use crate::error::ApiError;
use crate::models::dtos::ListUsersQuery;
use crate::models::entities::User;
use crate::models::AppState;
use crate::schema::users;
use crate::validation;

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Matching users", body = [User]),
        (status = 400, description = "Validation failure, body lists every violated rule"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    validation::validate_list_users(&query).map_err(ApiError::Validation)?;

    let mut conn = state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    // No pagination and no ordering guarantee: rows come back in whatever
    // order the storage engine yields them.
    let rows: Vec<User> = match query.search.as_deref() {
        Some(term) => {
            let pattern = format!("%{}%", term);
            users::table
                .filter(
                    users::username
                        .like(pattern.clone())
                        .or(users::display_name.like(pattern)),
                )
                .select(User::as_select())
                .load(&mut conn)?
        }
        None => users::table.select(User::as_select()).load(&mut conn)?,
    };

    Ok(Json(rows))
}
