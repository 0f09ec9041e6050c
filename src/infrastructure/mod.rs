//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repositories and settings store
//! - [`kv`] - Redis settings store
//! - [`memory`] - Process-local implementations for development and tests

pub mod kv;
pub mod memory;
pub mod persistence;
