//! Admin layer for browser-based redirect management.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`dto`] - Form payloads
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Cookie session authentication
//! - [`routes`] - Admin route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
