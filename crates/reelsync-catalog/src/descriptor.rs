//! Raw per-stream descriptors, as reported by the remote provider.
//!
//! Providers describe each variant with full codec strings
//! (`"avc1.4d401e"`, `"vp09.00.10.08"`), the literal `"none"` for an absent
//! track, fractional frame rates, and free-form dynamic-range notes. The
//! accessors here reduce those to the closed enums of `reelsync-core`;
//! [`StreamFormat::from_raw`](crate::StreamFormat::from_raw) decides whether
//! the descriptor as a whole is usable.

use serde::{Deserialize, Serialize};

use reelsync_core::{AudioCodec, DynamicRange, FrameRateClass, Resolution, VideoCodec};

/// One stream variant as reported by the provider, prior to validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStreamDescriptor {
    /// Provider-assigned format identifier.
    pub id: String,
    /// Resolution label, e.g. `"360p"` or `"720p60"`.
    #[serde(default)]
    pub format: Option<String>,
    /// Vertical height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
    /// Video codec string; `"none"` means no video track.
    #[serde(default)]
    pub vcodec: Option<String>,
    /// Audio codec string; `"none"` means no audio track.
    #[serde(default)]
    pub acodec: Option<String>,
    /// Frames per second.
    #[serde(default)]
    pub fps: Option<f64>,
    /// Dynamic-range note, e.g. `"SDR"` or `"HDR10"`.
    #[serde(default)]
    pub dynamic_range: Option<String>,
}

impl RawStreamDescriptor {
    /// The declared video codec string, with `"none"` and empty strings
    /// treated as absent.
    #[must_use]
    pub fn declared_vcodec(&self) -> Option<&str> {
        declared(self.vcodec.as_deref())
    }

    /// The declared audio codec string, with `"none"` and empty strings
    /// treated as absent.
    #[must_use]
    pub fn declared_acodec(&self) -> Option<&str> {
        declared(self.acodec.as_deref())
    }

    /// Resolution from the label, falling back to an exact height match.
    ///
    /// Labels may carry a high-frame-rate suffix (`"720p60"`); the suffix is
    /// ignored here since the frame-rate class comes from `fps`.
    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        if let Some(label) = self.format.as_deref() {
            let label = label.trim();
            if let Ok(res) = label.parse() {
                return Some(res);
            }
            if let Some(stripped) = label.strip_suffix("60") {
                if let Ok(res) = stripped.parse() {
                    return Some(res);
                }
            }
        }
        self.height.and_then(Resolution::from_height)
    }

    /// Frame-rate classification: 50fps and above counts as high rate.
    #[must_use]
    pub fn frame_rate(&self) -> FrameRateClass {
        match self.fps {
            Some(fps) if fps >= 50.0 => FrameRateClass::High60,
            _ => FrameRateClass::Standard,
        }
    }

    /// Dynamic-range classification from the provider note; absent means SDR.
    #[must_use]
    pub fn dynamic_range(&self) -> DynamicRange {
        match self.dynamic_range.as_deref() {
            Some(note) if note.to_ascii_lowercase().contains("hdr") => DynamicRange::Hdr,
            _ => DynamicRange::Sdr,
        }
    }
}

fn declared(label: Option<&str>) -> Option<&str> {
    match label {
        None => None,
        Some(s) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(s)
            }
        }
    }
}

/// Reduce a full video codec string to its family.
pub(crate) fn video_codec_family(label: &str) -> Option<VideoCodec> {
    let label = label.trim().to_ascii_lowercase();
    if label.starts_with("avc1") || label.starts_with("h264") {
        Some(VideoCodec::Avc1)
    } else if label.starts_with("vp9") || label.starts_with("vp09") {
        Some(VideoCodec::Vp9)
    } else {
        None
    }
}

/// Reduce a full audio codec string to its family.
pub(crate) fn audio_codec_family(label: &str) -> Option<AudioCodec> {
    let label = label.trim().to_ascii_lowercase();
    if label.starts_with("mp4a") || label.starts_with("aac") {
        Some(AudioCodec::Mp4a)
    } else if label.starts_with("opus") {
        Some(AudioCodec::Opus)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_families_match_on_prefix() {
        assert_eq!(video_codec_family("avc1.4d401e"), Some(VideoCodec::Avc1));
        assert_eq!(video_codec_family("AVC1.64002a"), Some(VideoCodec::Avc1));
        assert_eq!(video_codec_family("vp9"), Some(VideoCodec::Vp9));
        assert_eq!(video_codec_family("vp09.00.10.08"), Some(VideoCodec::Vp9));
        assert_eq!(video_codec_family("av01.0.08M.08"), None);
        assert_eq!(audio_codec_family("mp4a.40.2"), Some(AudioCodec::Mp4a));
        assert_eq!(audio_codec_family("OPUS"), Some(AudioCodec::Opus));
        assert_eq!(audio_codec_family("ec-3"), None);
    }

    #[test]
    fn none_and_empty_codecs_are_absent() {
        let desc = RawStreamDescriptor {
            id: "18".into(),
            vcodec: Some("none".into()),
            acodec: Some("".into()),
            ..Default::default()
        };
        assert_eq!(desc.declared_vcodec(), None);
        assert_eq!(desc.declared_acodec(), None);
    }

    #[test]
    fn resolution_prefers_label_over_height() {
        let desc = RawStreamDescriptor {
            id: "247".into(),
            format: Some("720p".into()),
            height: Some(1080),
            ..Default::default()
        };
        assert_eq!(desc.resolution(), Some(Resolution::P720));
    }

    #[test]
    fn resolution_accepts_high_rate_labels() {
        let desc = RawStreamDescriptor {
            id: "302".into(),
            format: Some("720p60".into()),
            ..Default::default()
        };
        assert_eq!(desc.resolution(), Some(Resolution::P720));
    }

    #[test]
    fn resolution_falls_back_to_exact_height() {
        let desc = RawStreamDescriptor {
            id: "137".into(),
            height: Some(1080),
            ..Default::default()
        };
        assert_eq!(desc.resolution(), Some(Resolution::P1080));

        let odd = RawStreamDescriptor {
            id: "x".into(),
            height: Some(1079),
            ..Default::default()
        };
        assert_eq!(odd.resolution(), None);
    }

    #[test]
    fn frame_rate_class_boundary() {
        let mk = |fps| RawStreamDescriptor {
            id: "v".into(),
            fps,
            ..Default::default()
        };
        assert_eq!(mk(Some(29.97)).frame_rate(), FrameRateClass::Standard);
        assert_eq!(mk(Some(50.0)).frame_rate(), FrameRateClass::High60);
        assert_eq!(mk(Some(59.94)).frame_rate(), FrameRateClass::High60);
        assert_eq!(mk(None).frame_rate(), FrameRateClass::Standard);
    }

    #[test]
    fn dynamic_range_from_note() {
        let mk = |note: Option<&str>| RawStreamDescriptor {
            id: "v".into(),
            dynamic_range: note.map(str::to_owned),
            ..Default::default()
        };
        assert_eq!(mk(Some("HDR10")).dynamic_range(), DynamicRange::Hdr);
        assert_eq!(mk(Some("hdr")).dynamic_range(), DynamicRange::Hdr);
        assert_eq!(mk(Some("SDR")).dynamic_range(), DynamicRange::Sdr);
        assert_eq!(mk(None).dynamic_range(), DynamicRange::Sdr);
    }

    #[test]
    fn descriptor_deserializes_with_missing_fields() {
        let desc: RawStreamDescriptor =
            serde_json::from_str(r#"{"id": "251", "acodec": "opus"}"#).unwrap();
        assert_eq!(desc.id, "251");
        assert_eq!(desc.declared_acodec(), Some("opus"));
        assert_eq!(desc.declared_vcodec(), None);
    }
}
