//! Business logic services for the application layer.

pub mod auth_service;
pub mod csrf_service;
pub mod mapping_service;
pub mod redirect_map_store;
pub mod redirect_service;

pub use auth_service::AuthService;
pub use csrf_service::CsrfService;
pub use mapping_service::{EditorRow, EditorView, MappingService, TargetOption};
pub use redirect_map_store::RedirectMapStore;
pub use redirect_service::{RedirectService, RequestOutcome};
