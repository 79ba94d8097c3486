pub mod app;
pub mod authz;
pub mod config;
pub mod db;
pub mod docs;
pub mod errors;
pub mod models;
pub mod routes;
pub mod rules;
pub mod workflows;

// Re-export commonly used items for tests
pub use app::{create_app, create_app_with};
pub use config::AppConfig;
