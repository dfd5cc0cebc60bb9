//! HTTP API layer

pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod stations;
pub mod types;

pub use router::create_router;
pub use state::AppState;
