//! # reelsync-catalog
//!
//! Normalizes raw provider-reported stream descriptors into a validated,
//! typed [`StreamCatalog`].
//!
//! Provider metadata arrives as a loosely-structured list: codec strings
//! like `"avc1.4d401e"` or `"none"`, free-form resolution labels, fractional
//! frame rates, and optional dynamic-range notes. This crate promotes each
//! descriptor into the closed enums of `reelsync-core` and drops anything it
//! cannot place, so a catalog is always well-formed (possibly empty) and
//! downstream selection never touches a string comparison.
//!
//! ## Quick start
//!
//! ```
//! use reelsync_catalog::StreamCatalog;
//!
//! let catalog = StreamCatalog::from_json(
//!     r#"[
//!         {"id": "243", "format": "360p", "vcodec": "vp9", "fps": 24},
//!         {"id": "251", "acodec": "opus"},
//!         {"id": "sb0", "format": "storyboard"}
//!     ]"#,
//! )
//! .unwrap();
//! assert_eq!(catalog.len(), 2); // the storyboard entry is dropped
//! ```

pub mod catalog;
pub mod descriptor;

// Re-export key types at crate root for convenience.
pub use catalog::{AudioStreamInfo, StreamCatalog, StreamFormat, StreamPayload, VideoStreamInfo};
pub use descriptor::RawStreamDescriptor;
