//! Error types for the museum viewer.

use thiserror::Error;

/// Failures a viewer operation can report.
///
/// `show_image` recovers from a bad URL by skipping the display action, so
/// this surfaces only through [`crate::museum::MuseumObject::object_url_parsed`]
/// for callers that want to know why nothing was shown.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("invalid object URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}
