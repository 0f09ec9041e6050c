//! Public HTTP surface.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`handlers`] - Public page and health handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
