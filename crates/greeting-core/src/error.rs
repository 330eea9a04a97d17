//! Error types for the greeting core.

use std::path::PathBuf;

use thiserror::Error;

/// A playback request that the host refused or could not carry out.
///
/// None of these are ever shown to the user. A refused automatic attempt
/// turns into the manual-enable affordance; a refused manual attempt simply
/// leaves it in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The host's autoplay policy rejected unattended playback.
    #[error("playback not allowed by autoplay policy")]
    NotAllowed,

    /// The source could not be decoded or is in an unsupported format.
    #[error("media source not supported")]
    Unsupported,

    /// The bound media element does not exist in the rendered tree.
    #[error("media element `{0}` not found")]
    MissingElement(String),

    /// Any other host-reported failure.
    #[error("host playback error: {0}")]
    Host(String),
}

impl PlaybackError {
    /// Maps a DOMException-style error name reported by a webview host.
    pub fn from_dom_name(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" => PlaybackError::NotAllowed,
            "NotSupportedError" => PlaybackError::Unsupported,
            _ => PlaybackError::Host(format!("{name}: {message}")),
        }
    }
}

/// Errors raised while loading greeting content from disk.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
