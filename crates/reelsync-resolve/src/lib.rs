//! # reelsync-resolve
//!
//! The format resolution engine: given a media item's [`StreamCatalog`] and
//! a per-source [`PreferenceProfile`], deterministically select the single
//! best video-only, audio-only, and combined stream, or report that none
//! qualifies.
//!
//! Selection is a pure decision procedure with no I/O and no retained
//! state. When an exact match is unavailable and the profile permits
//! fallback, candidates are searched through an ordered relaxation ladder
//! (dynamic range, then frame rate, then codec, then resolution step-down);
//! the first level with a candidate wins and ties break deterministically
//! toward the lowest format code.
//!
//! ## Quick start
//!
//! ```
//! use reelsync_catalog::StreamCatalog;
//! use reelsync_core::PreferenceProfile;
//! use reelsync_resolve::resolve_video;
//!
//! let catalog = StreamCatalog::from_json(
//!     r#"[{"id": "248", "format": "1080p", "vcodec": "vp9", "fps": 24}]"#,
//! )
//! .unwrap();
//! let profile =
//!     PreferenceProfile::from_labels("1080p", "vp9", "opus", false, false, "fail").unwrap();
//!
//! let result = resolve_video(&catalog, &profile);
//! assert!(result.is_exact);
//! assert_eq!(result.code.unwrap().as_str(), "248");
//! ```
//!
//! [`StreamCatalog`]: reelsync_catalog::StreamCatalog
//! [`PreferenceProfile`]: reelsync_core::PreferenceProfile

mod ladder;
pub mod resolver;

pub use resolver::{resolve_audio, resolve_combined, resolve_video, MatchResult};
