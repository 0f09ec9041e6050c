//! Admin-page middleware.

pub mod web_auth;
