//! HTML template rendering handlers for the admin pages.

mod login;
mod redirects;

pub use login::{login_page, login_submit, logout};
pub use redirects::{SAVE_REDIRECTS_ACTION, redirects_page, save_redirects};
