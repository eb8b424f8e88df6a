//! Field validators for the two user operations.
//!
//! Each rule is a pure function from a field value to an optional violation
//! message. Every rule in an operation's list runs; nothing short-circuits,
//! so a missing field reports both its "required" and its "length" rule.

use chrono::{NaiveDate, NaiveDateTime, ParseError, Utc};

use crate::models::dtos::{CreateUserRequest, ListUsersQuery};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The create payload after every rule has passed: fields present, bio
/// defaulted, birth date parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserFields {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub birth_date: NaiveDate,
}

pub fn validate_create_user(req: &CreateUserRequest) -> Result<CreateUserFields, Vec<String>> {
    validate_create_user_at(req, Utc::now().naive_utc())
}

fn validate_create_user_at(
    req: &CreateUserRequest,
    now: NaiveDateTime,
) -> Result<CreateUserFields, Vec<String>> {
    // An empty birth date is the required rule's problem alone; the date
    // rules only see a non-empty value.
    let parsed_birth_date = req
        .birth_date
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(parse_date);

    let messages: Vec<String> = [
        required("username", req.username.as_deref()),
        length_between("username", req.username.as_deref(), 1, 16),
        required("displayName", req.display_name.as_deref()),
        length_between("displayName", req.display_name.as_deref(), 1, 16),
        required("birthDate", req.birth_date.as_deref()),
        birth_date_in_past(parsed_birth_date.as_ref(), now),
    ]
    .into_iter()
    .flatten()
    .collect();

    match (&req.username, &req.display_name, parsed_birth_date) {
        (Some(username), Some(display_name), Some(Ok(birth_date))) if messages.is_empty() => {
            Ok(CreateUserFields {
                username: username.clone(),
                display_name: display_name.clone(),
                bio: req.bio.clone().unwrap_or_default(),
                birth_date,
            })
        }
        _ => Err(messages),
    }
}

pub fn validate_list_users(query: &ListUsersQuery) -> Result<(), Vec<String>> {
    let messages: Vec<String> = [search_length(query.search.as_deref())]
        .into_iter()
        .flatten()
        .collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(messages)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Fails on a missing field and on an empty string alike.
fn required(field: &str, value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => None,
        _ => Some(format!("Parameter \"{field}\" is required.")),
    }
}

/// A missing field counts as length zero, so it also fails its length rule.
fn length_between(field: &str, value: Option<&str>, min: usize, max: usize) -> Option<String> {
    let len = value.map(|v| v.chars().count()).unwrap_or(0);
    if len < min || len > max {
        Some(format!(
            "Parameter \"{field}\" length must be between {min} and {max} characters."
        ))
    } else {
        None
    }
}

fn birth_date_in_past(
    parsed: Option<&Result<NaiveDate, ParseError>>,
    now: NaiveDateTime,
) -> Option<String> {
    match parsed? {
        Err(_) => Some("Parameter \"birthDate\" must be a valid date.".to_string()),
        // Compared at midnight, as a timestamp: today's date is already in
        // the past by the time the request arrives.
        Ok(date) => {
            if date.and_hms_opt(0, 0, 0)? >= now {
                Some("Parameter \"birthDate\" cannot be greater than current date.".to_string())
            } else {
                None
            }
        }
    }
}

fn search_length(value: Option<&str>) -> Option<String> {
    let len = value?.chars().count();
    if !(1..=255).contains(&len) {
        Some("Query parameter \"search\" length must be between 1 and 255 characters.".to_string())
    } else {
        None
    }
}
