pub mod create_user;
pub mod health;
pub mod hello;
pub mod list_users;
