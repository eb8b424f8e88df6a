use axum::{extract::State, Json};
use diesel::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::ApiError;
use crate::models::dtos::CreateUserRequest;
use crate::models::entities::{NewUser, User};
use crate::models::AppState;
use crate::schema::users;
use crate::validation;

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Validation failure, body lists every violated rule"),
        (status = 409, description = "Username is already taken"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    // Validation runs before any connection is borrowed; invalid requests
    // never touch the database.
    let fields = validation::validate_create_user(&payload).map_err(ApiError::Validation)?;

    let mut conn = state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    // MySQL has no RETURNING, so the persisted row is read back inside the
    // same transaction. `username` is unique, which makes it a safe key.
    let saved: User = conn.transaction(|conn| {
        diesel::insert_into(users::table)
            .values(NewUser {
                username: &fields.username,
                display_name: &fields.display_name,
                bio: &fields.bio,
                birth_date: fields.birth_date,
            })
            .execute(conn)?;

        users::table
            .filter(users::username.eq(&fields.username))
            .select(User::as_select())
            .first(conn)
    })?;

    info!("User created: id={} username={}", saved.id, saved.username);
    Ok(Json(saved))
}
