use crate::config::db_config::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
}
