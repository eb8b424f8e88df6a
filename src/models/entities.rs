use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A persisted user row. `id` and the timestamps are server-assigned;
/// `status` defaults to true and nothing ever sets it false. `last_updated`
/// has no update path because the API has no update operation.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub birth_date: NaiveDate,
    pub create_date: NaiveDateTime,
    pub last_updated: NaiveDateTime,
    pub status: bool,
}

/// Insert shape: only the four user-supplied fields. The database fills in
/// the identity, timestamps and the active flag.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub display_name: &'a str,
    pub bio: &'a str,
    pub birth_date: NaiveDate,
}
