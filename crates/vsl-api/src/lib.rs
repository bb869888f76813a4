pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod note;
pub mod project;
pub mod quiz;
pub mod router;
pub mod state;
pub mod study;
pub mod tracing;

pub use config::ApiConfig;
pub use state::ApiState;
