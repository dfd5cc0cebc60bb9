//! Infrastructure layer - adapters around the domain

pub mod auth;
pub mod logging;
pub mod services;

pub use auth::AdminTokenVerifier;
