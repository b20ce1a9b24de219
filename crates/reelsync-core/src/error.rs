//! Unified error type for the reelsync crates.
//!
//! The only hard failures in the system are caller bugs: preference labels
//! outside the known enumerations, or a metadata document that is not even a
//! JSON array. Absence of data (empty catalogs, no qualifying stream) is
//! never an error.

/// Unified error type covering all failure modes in reelsync.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A resolution label outside the known vertical-resolution scale.
    #[error("unknown resolution label: {0:?}")]
    UnknownResolution(String),

    /// A video codec label outside the known codec set.
    #[error("unknown video codec label: {0:?}")]
    UnknownVideoCodec(String),

    /// An audio codec label outside the known codec set.
    #[error("unknown audio codec label: {0:?}")]
    UnknownAudioCodec(String),

    /// A fallback policy label outside the known policies.
    #[error("unknown fallback policy: {0:?}")]
    UnknownFallbackPolicy(String),

    /// A raw stream-metadata document that could not be read at all.
    #[error("metadata error: {0}")]
    Metadata(String),
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
