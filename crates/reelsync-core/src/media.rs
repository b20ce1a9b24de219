//! Media-domain enums for stream variants: resolutions, codecs, frame-rate
//! classes, and dynamic range.
//!
//! All enums serialize as their provider-facing labels and implement
//! `Display` manually for consistent string representation. The ones that
//! appear in per-source configuration also implement `FromStr`, promoting
//! loosely-typed labels into the closed set and failing fast on anything
//! unknown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Vertical resolution scale, ascending.
///
/// The derived `Ord` follows declaration order, so `P144 < P240 < ... <
/// P4320`; the resolution engine relies on this when stepping down through
/// the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "144p")]
    P144,
    #[serde(rename = "240p")]
    P240,
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "1440p")]
    P1440,
    #[serde(rename = "2160p")]
    P2160,
    #[serde(rename = "4320p")]
    P4320,
}

impl Resolution {
    /// Every known resolution, ascending.
    pub const ALL: [Resolution; 9] = [
        Resolution::P144,
        Resolution::P240,
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
        Resolution::P4320,
    ];

    /// Vertical height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        match self {
            Self::P144 => 144,
            Self::P240 => 240,
            Self::P360 => 360,
            Self::P480 => 480,
            Self::P720 => 720,
            Self::P1080 => 1080,
            Self::P1440 => 1440,
            Self::P2160 => 2160,
            Self::P4320 => 4320,
        }
    }

    /// Map an exact pixel height back onto the scale.
    #[must_use]
    pub fn from_height(height: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.height() == height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.height())
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "144p" => Ok(Self::P144),
            "240p" => Ok(Self::P240),
            "360p" => Ok(Self::P360),
            "480p" => Ok(Self::P480),
            "720p" => Ok(Self::P720),
            "1080p" => Ok(Self::P1080),
            "1440p" => Ok(Self::P1440),
            "2160p" => Ok(Self::P2160),
            "4320p" => Ok(Self::P4320),
            _ => Err(Error::UnknownResolution(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// VideoCodec
// ---------------------------------------------------------------------------

/// Supported video codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoCodec {
    Avc1,
    Vp9,
}

impl VideoCodec {
    /// The other member of the two-codec set.
    ///
    /// The relaxation ladder retries every level with the non-target codec
    /// before stepping down a resolution.
    #[must_use]
    pub fn alternate(&self) -> Self {
        match self {
            Self::Avc1 => Self::Vp9,
            Self::Vp9 => Self::Avc1,
        }
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avc1 => write!(f, "avc1"),
            Self::Vp9 => write!(f, "vp9"),
        }
    }
}

impl FromStr for VideoCodec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avc1" => Ok(Self::Avc1),
            "vp9" => Ok(Self::Vp9),
            _ => Err(Error::UnknownVideoCodec(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// AudioCodec
// ---------------------------------------------------------------------------

/// Supported audio codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCodec {
    Mp4a,
    Opus,
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mp4a => write!(f, "mp4a"),
            Self::Opus => write!(f, "opus"),
        }
    }
}

impl FromStr for AudioCodec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp4a" => Ok(Self::Mp4a),
            "opus" => Ok(Self::Opus),
            _ => Err(Error::UnknownAudioCodec(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// FrameRateClass
// ---------------------------------------------------------------------------

/// Frame-rate classification of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameRateClass {
    /// Up to and including standard broadcast rates.
    Standard,
    /// High frame rate delivery (50fps and above).
    High60,
}

impl fmt::Display for FrameRateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::High60 => write!(f, "high60"),
        }
    }
}

// ---------------------------------------------------------------------------
// DynamicRange
// ---------------------------------------------------------------------------

/// Dynamic-range classification of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicRange {
    Sdr,
    Hdr,
}

impl fmt::Display for DynamicRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sdr => write!(f, "sdr"),
            Self::Hdr => write!(f, "hdr"),
        }
    }
}

// ---------------------------------------------------------------------------
// StreamKind
// ---------------------------------------------------------------------------

/// Delivery category of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    /// Video track only; audio must be fetched separately.
    Video,
    /// Audio track only.
    Audio,
    /// Video and audio muxed into a single container.
    Combined,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Combined => write!(f, "combined"),
        }
    }
}
