use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /api/v1/users`. Every field deserializes as optional so
/// that absences are reported by the field validators, not as a 422 from
/// the JSON extractor.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    /// ISO 8601 date (`YYYY-MM-DD`), validated to be in the past.
    pub birth_date: Option<String>,
}

/// Query string of `GET /api/v1/users`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// Case-insensitive substring matched against username and display name.
    pub search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
