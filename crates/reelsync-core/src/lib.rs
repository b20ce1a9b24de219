//! reelsync-core: shared types, format codes, errors, and preference profiles.
//!
//! This crate is the foundational dependency for the other reelsync crates,
//! providing the closed media-domain enums (resolution scale, codecs,
//! frame-rate class, dynamic range), the opaque [`FormatCode`] identifier,
//! the per-source [`PreferenceProfile`], and a unified error type.

pub mod error;
pub mod ids;
pub mod media;
pub mod profile;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use ids::FormatCode;
pub use media::*;
pub use profile::{FallbackPolicy, PreferenceProfile, TargetResolution};
