//! Per-source stream preference profile.
//!
//! A [`PreferenceProfile`] is the immutable value object the resolution
//! engine receives for every call. It is assembled from persisted per-source
//! configuration; label-based construction goes through
//! [`PreferenceProfile::from_labels`], which rejects anything outside the
//! known enumerations up front so the engine itself never has to validate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::media::{AudioCodec, DynamicRange, FrameRateClass, Resolution, VideoCodec};

// ---------------------------------------------------------------------------
// TargetResolution
// ---------------------------------------------------------------------------

/// Requested resolution, or the audio-only sentinel.
///
/// Serializes as the bare label (`"audio"`, `"1080p"`, ...), matching the
/// shape persisted by source configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetResolution {
    /// Audio-only intent: video selection is disabled entirely and
    /// resolution becomes irrelevant to audio selection.
    Audio,
    /// Select video at the given vertical resolution.
    Video(Resolution),
}

impl TargetResolution {
    /// The requested resolution, unless this is the audio-only sentinel.
    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        match self {
            Self::Audio => None,
            Self::Video(res) => Some(*res),
        }
    }
}

impl fmt::Display for TargetResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Video(res) => write!(f, "{res}"),
        }
    }
}

impl FromStr for TargetResolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("audio") {
            Ok(Self::Audio)
        } else {
            Resolution::from_str(s).map(Self::Video)
        }
    }
}

impl TryFrom<String> for TargetResolution {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TargetResolution> for String {
    fn from(target: TargetResolution) -> Self {
        target.to_string()
    }
}

// ---------------------------------------------------------------------------
// FallbackPolicy
// ---------------------------------------------------------------------------

/// What the engine may do when no exact match exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Accept only an exact match; otherwise report nothing to download.
    Fail,
    /// Degrade through the relaxation ladder until something qualifies.
    NextBest,
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::NextBest => write!(f, "nextbest"),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "nextbest" | "next-best" | "next_best" => Ok(Self::NextBest),
            _ => Err(Error::UnknownFallbackPolicy(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// PreferenceProfile
// ---------------------------------------------------------------------------

/// Per-source stream preferences, immutable for the duration of a
/// resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Requested resolution, or the audio-only sentinel.
    pub resolution: TargetResolution,
    /// Desired video codec.
    pub video_codec: VideoCodec,
    /// Desired audio codec.
    pub audio_codec: AudioCodec,
    /// Whether high-frame-rate delivery is wanted.
    pub prefer_60fps: bool,
    /// Whether HDR delivery is wanted.
    pub prefer_hdr: bool,
    /// Fallback policy when no exact match exists.
    pub fallback: FallbackPolicy,
}

impl PreferenceProfile {
    /// Build a profile from persisted configuration labels, failing fast on
    /// any label outside the known enumerations.
    pub fn from_labels(
        resolution: &str,
        video_codec: &str,
        audio_codec: &str,
        prefer_60fps: bool,
        prefer_hdr: bool,
        fallback: &str,
    ) -> Result<Self> {
        Ok(Self {
            resolution: resolution.parse()?,
            video_codec: video_codec.parse()?,
            audio_codec: audio_codec.parse()?,
            prefer_60fps,
            prefer_hdr,
            fallback: fallback.parse()?,
        })
    }

    /// True when the source only wants audio.
    #[must_use]
    pub fn is_audio_only(&self) -> bool {
        self.resolution == TargetResolution::Audio
    }

    /// The frame-rate class an exact match must carry.
    #[must_use]
    pub fn wanted_frame_rate(&self) -> FrameRateClass {
        if self.prefer_60fps {
            FrameRateClass::High60
        } else {
            FrameRateClass::Standard
        }
    }

    /// The dynamic range an exact match must carry.
    #[must_use]
    pub fn wanted_dynamic_range(&self) -> DynamicRange {
        if self.prefer_hdr {
            DynamicRange::Hdr
        } else {
            DynamicRange::Sdr
        }
    }
}
