//! Editor errors and their stable codes.
//!
//! DESIGN
//! ======
//! Every check that can fail runs before the surface is touched, so an `Err`
//! always means the canvas is exactly as it was before the call. Selection and
//! style failures come back as plain `Err` values; load failures are the `Err`
//! of the async flow that awaited them.

use crate::assets::FetchError;

/// Stable machine-readable code for an error, for the host UI to branch on.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    /// Whether repeating the same call could succeed.
    fn retryable(&self) -> bool {
        false
    }
}

/// Errors returned by [`crate::Editor`] operations.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A mutation was requested with no active object.
    #[error("no object selected")]
    NoSelection,

    /// An image was about to replace the active object, but that object is text.
    #[error("{selected} cannot be replaced with an image")]
    IncompatibleSelectionType { selected: &'static str },

    /// An image or markup fetch failed.
    #[error("failed to load asset {url}: {source}")]
    AssetLoad {
        url: String,
        #[source]
        source: FetchError,
    },
}

impl EditorError {
    pub(crate) fn asset_load(url: &str, source: FetchError) -> Self {
        Self::AssetLoad { url: url.to_string(), source }
    }
}

impl ErrorCode for EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoSelection => "E_NO_SELECTION",
            Self::IncompatibleSelectionType { .. } => "E_INCOMPATIBLE_SELECTION",
            Self::AssetLoad { .. } => "E_ASSET_LOAD",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::AssetLoad { source, .. } => source.retryable(),
            _ => false,
        }
    }
}

/// A UI token (alignment, stacking direction) that names no known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} token: {token:?}")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
