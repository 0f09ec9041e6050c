//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Request-time draft slug matching
//! - [`services::mapping_service::MappingService`] - Mapping editor listing and saving
//! - [`services::auth_service::AuthService`] - Admin token authentication
//! - [`services::csrf_service::CsrfService`] - CSRF tokens for admin forms

pub mod services;
