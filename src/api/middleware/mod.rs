//! Request middleware

mod admin_auth;

pub use admin_auth::RequireAdmin;
