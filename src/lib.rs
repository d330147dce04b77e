pub mod configuration;
pub mod db_interaction;
pub mod domain;
pub mod models;
pub mod schema;
pub mod schema_reset;
pub mod seed;
pub mod telemetry;
pub mod utils;
