//! Parsing of the mapping editor form.
//!
//! The editor posts one `draft_post[<id>]` field per draft row plus the
//! `redirect_nonce` CSRF field:
//!
//! ```text
//! redirect_nonce=4f1c...&draft_post[12]=https://example.com/sale/&draft_post[15]=
//! ```

use crate::domain::entities::MappingEntry;

/// Name of the hidden CSRF field.
pub const NONCE_FIELD: &str = "redirect_nonce";

const ENTRY_PREFIX: &str = "draft_post[";

/// A typed editor submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSubmission {
    pub nonce: Option<String>,
    pub entries: Vec<MappingEntry>,
}

impl MappingSubmission {
    /// Builds a submission from raw form pairs, in submission order.
    ///
    /// Keys whose id is not an integer and unrelated fields are dropped.
    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        let mut submission = Self::default();

        for (key, value) in fields {
            if key == NONCE_FIELD {
                submission.nonce = Some(value);
                continue;
            }

            let Some(item_id) = key
                .strip_prefix(ENTRY_PREFIX)
                .and_then(|rest| rest.strip_suffix(']'))
                .and_then(|id| id.trim().parse::<i64>().ok())
            else {
                continue;
            };

            submission.entries.push(MappingEntry {
                item_id,
                target_url: value,
            });
        }

        submission
    }
}
