//! Typed stream formats and the per-media-item catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use reelsync_core::{
    AudioCodec, DynamicRange, Error, FormatCode, FrameRateClass, Resolution, Result, StreamKind,
    VideoCodec,
};

use crate::descriptor::{audio_codec_family, video_codec_family, RawStreamDescriptor};

/// Video parameters of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStreamInfo {
    /// Vertical resolution.
    pub resolution: Resolution,
    /// Video codec.
    pub codec: VideoCodec,
    /// Frame-rate classification.
    pub frame_rate: FrameRateClass,
    /// Dynamic-range classification.
    pub dynamic_range: DynamicRange,
}

/// Audio parameters of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamInfo {
    /// Audio codec.
    pub codec: AudioCodec,
}

/// Kind-specific stream parameters.
///
/// The variant is the kind, so "exactly one kind per record" and "kind
/// determines which parameters are populated" hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StreamPayload {
    /// Video track only.
    Video(VideoStreamInfo),
    /// Audio track only.
    Audio(AudioStreamInfo),
    /// Video and audio muxed into one container.
    Combined {
        video: VideoStreamInfo,
        audio: AudioStreamInfo,
    },
}

/// One immutable provider-reported stream variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamFormat {
    /// Provider-assigned identifier, unique within a catalog.
    pub code: FormatCode,
    /// Kind-specific stream parameters.
    #[serde(flatten)]
    pub payload: StreamPayload,
}

impl StreamFormat {
    /// Promote a raw descriptor into a typed format.
    ///
    /// Returns `None` for descriptors that cannot be placed: no usable
    /// codec on either track, a codec outside the known families, a
    /// video-bearing stream without a resolvable resolution, or a blank id.
    #[must_use]
    pub fn from_raw(desc: &RawStreamDescriptor) -> Option<Self> {
        if desc.id.trim().is_empty() {
            return None;
        }
        let vcodec = match desc.declared_vcodec() {
            None => None,
            Some(label) => Some(video_codec_family(label)?),
        };
        let acodec = match desc.declared_acodec() {
            None => None,
            Some(label) => Some(audio_codec_family(label)?),
        };
        let payload = match (vcodec, acodec) {
            (None, None) => return None,
            (None, Some(codec)) => StreamPayload::Audio(AudioStreamInfo { codec }),
            (Some(codec), None) => StreamPayload::Video(video_info(desc, codec)?),
            (Some(video), Some(codec)) => StreamPayload::Combined {
                video: video_info(desc, video)?,
                audio: AudioStreamInfo { codec },
            },
        };
        Some(Self {
            code: FormatCode::from(desc.id.as_str()),
            payload,
        })
    }

    /// Delivery category of this stream.
    #[must_use]
    pub fn kind(&self) -> StreamKind {
        match self.payload {
            StreamPayload::Video(_) => StreamKind::Video,
            StreamPayload::Audio(_) => StreamKind::Audio,
            StreamPayload::Combined { .. } => StreamKind::Combined,
        }
    }

    /// Video parameters, for video-only and combined streams.
    #[must_use]
    pub fn video(&self) -> Option<&VideoStreamInfo> {
        match &self.payload {
            StreamPayload::Video(video) | StreamPayload::Combined { video, .. } => Some(video),
            StreamPayload::Audio(_) => None,
        }
    }

    /// Audio parameters, for audio-only and combined streams.
    #[must_use]
    pub fn audio(&self) -> Option<&AudioStreamInfo> {
        match &self.payload {
            StreamPayload::Audio(audio) | StreamPayload::Combined { audio, .. } => Some(audio),
            StreamPayload::Video(_) => None,
        }
    }
}

fn video_info(desc: &RawStreamDescriptor, codec: VideoCodec) -> Option<VideoStreamInfo> {
    Some(VideoStreamInfo {
        resolution: desc.resolution()?,
        codec,
        frame_rate: desc.frame_rate(),
        dynamic_range: desc.dynamic_range(),
    })
}

/// The set of stream variants one media item offers.
///
/// Built once per media item from raw metadata and read-only afterwards;
/// the resolution engine never mutates it. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCatalog {
    formats: Vec<StreamFormat>,
}

impl StreamCatalog {
    /// Build a catalog from already-typed formats.
    ///
    /// Codes are unique within a catalog; a duplicate keeps the first
    /// occurrence and drops the rest.
    #[must_use]
    pub fn new(formats: Vec<StreamFormat>) -> Self {
        let mut seen = BTreeSet::new();
        let mut kept = Vec::with_capacity(formats.len());
        for fmt in formats {
            if seen.insert(fmt.code.clone()) {
                kept.push(fmt);
            } else {
                tracing::debug!(code = %fmt.code, "dropping stream with duplicate code");
            }
        }
        Self { formats: kept }
    }

    /// Normalize raw provider descriptors, dropping anything malformed.
    ///
    /// Never fails: a fully unusable list yields an empty catalog, which
    /// the resolution engine treats as "no match", not an error.
    #[must_use]
    pub fn from_raw(descriptors: &[RawStreamDescriptor]) -> Self {
        let mut formats = Vec::with_capacity(descriptors.len());
        for desc in descriptors {
            match StreamFormat::from_raw(desc) {
                Some(fmt) => formats.push(fmt),
                None => tracing::debug!(id = %desc.id, "dropping unusable stream descriptor"),
            }
        }
        Self::new(formats)
    }

    /// Parse a JSON array of raw descriptors.
    ///
    /// Only an unreadable document errors; individual entries that fail to
    /// deserialize are dropped like any other malformed descriptor.
    pub fn from_json(json_str: &str) -> Result<Self> {
        let doc: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| Error::Metadata(format!("stream list parse error: {e}")))?;
        let entries = doc
            .as_array()
            .ok_or_else(|| Error::Metadata("stream list is not an array".into()))?;
        let descriptors: Vec<RawStreamDescriptor> = entries
            .iter()
            .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                Ok(desc) => Some(desc),
                Err(e) => {
                    tracing::debug!(error = %e, "dropping undecodable stream descriptor");
                    None
                }
            })
            .collect();
        Ok(Self::from_raw(&descriptors))
    }

    /// Iterate over the formats.
    pub fn iter(&self) -> impl Iterator<Item = &StreamFormat> {
        self.formats.iter()
    }

    /// Look up a format by code.
    #[must_use]
    pub fn get(&self, code: &FormatCode) -> Option<&StreamFormat> {
        self.formats.iter().find(|f| &f.code == code)
    }

    /// Number of formats in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str) -> RawStreamDescriptor {
        RawStreamDescriptor {
            id: id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn video_only_descriptor_becomes_video_format() {
        let desc = RawStreamDescriptor {
            format: Some("1080p".into()),
            vcodec: Some("vp9".into()),
            fps: Some(24.0),
            ..raw("248")
        };
        let fmt = StreamFormat::from_raw(&desc).unwrap();
        assert_eq!(fmt.kind(), StreamKind::Video);
        let video = fmt.video().unwrap();
        assert_eq!(video.resolution, Resolution::P1080);
        assert_eq!(video.codec, VideoCodec::Vp9);
        assert_eq!(video.frame_rate, FrameRateClass::Standard);
        assert_eq!(video.dynamic_range, DynamicRange::Sdr);
        assert!(fmt.audio().is_none());
    }

    #[test]
    fn audio_only_descriptor_ignores_video_axes() {
        let desc = RawStreamDescriptor {
            acodec: Some("mp4a.40.2".into()),
            vcodec: Some("none".into()),
            ..raw("140")
        };
        let fmt = StreamFormat::from_raw(&desc).unwrap();
        assert_eq!(fmt.kind(), StreamKind::Audio);
        assert_eq!(fmt.audio().unwrap().codec, AudioCodec::Mp4a);
        assert!(fmt.video().is_none());
    }

    #[test]
    fn combined_descriptor_carries_both_tracks() {
        let desc = RawStreamDescriptor {
            format: Some("360p".into()),
            vcodec: Some("avc1.42001E".into()),
            acodec: Some("mp4a.40.2".into()),
            fps: Some(30.0),
            ..raw("18")
        };
        let fmt = StreamFormat::from_raw(&desc).unwrap();
        assert_eq!(fmt.kind(), StreamKind::Combined);
        assert_eq!(fmt.video().unwrap().codec, VideoCodec::Avc1);
        assert_eq!(fmt.audio().unwrap().codec, AudioCodec::Mp4a);
    }

    #[test]
    fn unusable_descriptors_are_dropped() {
        // No codec on either track (storyboards, images).
        assert!(StreamFormat::from_raw(&RawStreamDescriptor {
            format: Some("storyboard".into()),
            ..raw("sb0")
        })
        .is_none());
        // Unknown video codec family.
        assert!(StreamFormat::from_raw(&RawStreamDescriptor {
            format: Some("1080p".into()),
            vcodec: Some("av01.0.08M.08".into()),
            ..raw("399")
        })
        .is_none());
        // Video stream without a resolvable resolution.
        assert!(StreamFormat::from_raw(&RawStreamDescriptor {
            vcodec: Some("vp9".into()),
            ..raw("247")
        })
        .is_none());
        // Blank id.
        assert!(StreamFormat::from_raw(&RawStreamDescriptor {
            acodec: Some("opus".into()),
            ..raw("  ")
        })
        .is_none());
    }

    #[test]
    fn from_raw_keeps_good_entries_and_drops_bad_ones() {
        let catalog = StreamCatalog::from_raw(&[
            RawStreamDescriptor {
                format: Some("360p".into()),
                vcodec: Some("vp9".into()),
                ..raw("243")
            },
            RawStreamDescriptor {
                acodec: Some("opus".into()),
                ..raw("251")
            },
            RawStreamDescriptor {
                format: Some("premium".into()),
                vcodec: Some("unknown".into()),
                ..raw("616")
            },
        ]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(&FormatCode::from("243")).is_some());
        assert!(catalog.get(&FormatCode::from("251")).is_some());
        assert!(catalog.get(&FormatCode::from("616")).is_none());
    }

    #[test]
    fn duplicate_codes_keep_first_occurrence() {
        let sdr = RawStreamDescriptor {
            format: Some("360p".into()),
            vcodec: Some("vp9".into()),
            ..raw("243")
        };
        let hdr = RawStreamDescriptor {
            format: Some("360p".into()),
            vcodec: Some("vp9".into()),
            dynamic_range: Some("HDR".into()),
            ..raw("243")
        };
        let catalog = StreamCatalog::from_raw(&[sdr, hdr]);
        assert_eq!(catalog.len(), 1);
        let kept = catalog.get(&FormatCode::from("243")).unwrap();
        assert_eq!(kept.video().unwrap().dynamic_range, DynamicRange::Sdr);
    }

    #[test]
    fn from_json_drops_undecodable_entries() {
        let catalog = StreamCatalog::from_json(
            r#"[
                {"id": "136", "format": "720p", "vcodec": "avc1.4d401f", "acodec": "none"},
                {"id": 42, "vcodec": "vp9"},
                {"height": "tall"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.iter().next().unwrap().code,
            FormatCode::from("136")
        );
    }

    #[test]
    fn from_json_rejects_non_array_documents() {
        assert!(matches!(
            StreamCatalog::from_json(r#"{"formats": []}"#),
            Err(Error::Metadata(_))
        ));
        assert!(matches!(
            StreamCatalog::from_json("not json"),
            Err(Error::Metadata(_))
        ));
    }

    #[test]
    fn empty_list_yields_empty_catalog() {
        let catalog = StreamCatalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn stream_format_serde_round_trip() {
        let desc = RawStreamDescriptor {
            format: Some("2160p".into()),
            vcodec: Some("vp9".into()),
            fps: Some(60.0),
            dynamic_range: Some("HDR10".into()),
            ..raw("337")
        };
        let fmt = StreamFormat::from_raw(&desc).unwrap();
        let json = serde_json::to_string(&fmt).unwrap();
        assert!(json.contains(r#""kind":"video""#));
        let back: StreamFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fmt);
    }
}
