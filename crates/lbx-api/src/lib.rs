pub mod config;
pub mod error;
pub mod flashcard;
pub mod middleware;
pub mod router;
pub mod state;
pub mod study;
pub mod tracing;

pub use config::ApiConfig;
pub use error::ApiError;
pub use state::ApiState;
