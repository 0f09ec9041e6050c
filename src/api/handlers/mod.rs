//! HTTP request handlers for the public surface.

pub mod health;
pub mod public;

pub use health::health_handler;
pub use public::public_handler;
