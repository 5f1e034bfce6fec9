//! Shared query parameter types for page handlers.

use filmcrew_core::people::Notice;
use serde::Deserialize;

/// `?notice=` parameter carrying a success message across a redirect.
///
/// Unknown values are rejected by the extractor with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<Notice>,
}
