pub mod db_config;
pub mod swagger_config;
