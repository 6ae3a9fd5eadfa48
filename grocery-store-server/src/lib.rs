pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{AppConfig, ConfigError, StorageBackend};
pub use routes::create_router;
pub use server::{Server, ServerConfig};
pub use state::AppState;
