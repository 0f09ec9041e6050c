//! Form payloads accepted by the admin pages.

pub mod login;
pub mod redirects;

pub use login::LoginForm;
pub use redirects::MappingSubmission;
