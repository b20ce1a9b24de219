//! Best-stream selection for the three delivery categories.
//!
//! All three operations are pure functions of a read-only catalog and
//! profile: no state survives a call, and "nothing qualifies" is a normal
//! [`MatchResult`] value rather than an error.

use serde::{Deserialize, Serialize};

use reelsync_catalog::{StreamCatalog, StreamFormat, StreamPayload, VideoStreamInfo};
use reelsync_core::{
    AudioCodec, FallbackPolicy, FormatCode, PreferenceProfile, Resolution, StreamKind,
    TargetResolution, VideoCodec,
};

use crate::ladder::RUNGS;

/// Outcome of one resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// True only when every requested preference axis matched with zero
    /// relaxation.
    pub is_exact: bool,
    /// The selected format, or `None` when no stream qualifies under the
    /// policy in force.
    pub code: Option<FormatCode>,
}

impl MatchResult {
    /// A zero-relaxation match.
    #[must_use]
    pub fn exact(code: FormatCode) -> Self {
        Self {
            is_exact: true,
            code: Some(code),
        }
    }

    /// A match reached through the relaxation ladder.
    #[must_use]
    pub fn fallback(code: FormatCode) -> Self {
        Self {
            is_exact: false,
            code: Some(code),
        }
    }

    /// No qualifying stream.
    #[must_use]
    pub fn none() -> Self {
        Self {
            is_exact: false,
            code: None,
        }
    }
}

/// Select the best video-only stream.
///
/// Candidates are searched through an ordered ladder and the first level
/// with at least one candidate wins: exact match, relaxed dynamic range,
/// relaxed frame rate, both relaxed, the same four levels with the
/// alternate codec, and finally the whole sequence again at each lower
/// resolution present in the catalog. Under [`FallbackPolicy::Fail`] only
/// the exact level is attempted.
#[must_use]
pub fn resolve_video(catalog: &StreamCatalog, profile: &PreferenceProfile) -> MatchResult {
    let target = match profile.resolution {
        TargetResolution::Audio => return MatchResult::none(),
        TargetResolution::Video(res) => res,
    };
    let wanted_rate = profile.wanted_frame_rate();
    let wanted_range = profile.wanted_dynamic_range();

    let pool: Vec<(&StreamFormat, &VideoStreamInfo)> = catalog
        .iter()
        .filter(|f| f.kind() == StreamKind::Video)
        .filter_map(|f| f.video().map(|v| (f, v)))
        .collect();

    let resolutions = ladder_resolutions(&pool, target, profile.fallback);
    let codecs: &[VideoCodec] = match profile.fallback {
        FallbackPolicy::Fail => &[profile.video_codec],
        FallbackPolicy::NextBest => &[profile.video_codec, profile.video_codec.alternate()],
    };
    let rungs = match profile.fallback {
        FallbackPolicy::Fail => &RUNGS[..1],
        FallbackPolicy::NextBest => &RUNGS[..],
    };

    for (step, &res) in resolutions.iter().enumerate() {
        for &codec in codecs {
            for (level, rung) in rungs.iter().enumerate() {
                let best = pool
                    .iter()
                    .copied()
                    .filter(|&(_, v)| v.resolution == res && v.codec == codec)
                    .filter(|&(_, v)| !rung.match_frame_rate || v.frame_rate == wanted_rate)
                    .filter(|&(_, v)| !rung.match_dynamic_range || v.dynamic_range == wanted_range)
                    .min_by_key(|&(f, v)| {
                        // Within a level the codec is already fixed; break
                        // ties toward the preferred axes, then lowest code.
                        (
                            v.frame_rate != wanted_rate,
                            v.dynamic_range != wanted_range,
                            &f.code,
                        )
                    });
                if let Some((fmt, _)) = best {
                    let exact = step == 0 && codec == profile.video_codec && level == 0;
                    return if exact {
                        MatchResult::exact(fmt.code.clone())
                    } else {
                        MatchResult::fallback(fmt.code.clone())
                    };
                }
            }
        }
    }
    MatchResult::none()
}

/// Select the best audio-only stream.
///
/// Resolution, frame-rate, and dynamic-range preferences never apply to
/// audio. An exact codec match wins; under [`FallbackPolicy::NextBest`] any
/// remaining audio stream is accepted. Ties break toward the lowest code.
#[must_use]
pub fn resolve_audio(catalog: &StreamCatalog, profile: &PreferenceProfile) -> MatchResult {
    let pool: Vec<(&FormatCode, AudioCodec)> = catalog
        .iter()
        .filter(|f| f.kind() == StreamKind::Audio)
        .filter_map(|f| f.audio().map(|a| (&f.code, a.codec)))
        .collect();
    if pool.is_empty() {
        return MatchResult::none();
    }

    if let Some(code) = pool
        .iter()
        .filter(|&&(_, codec)| codec == profile.audio_codec)
        .map(|&(code, _)| code)
        .min()
    {
        return MatchResult::exact(code.clone());
    }
    match profile.fallback {
        FallbackPolicy::Fail => MatchResult::none(),
        FallbackPolicy::NextBest => {
            let code = pool.iter().map(|&(code, _)| code).min().unwrap();
            MatchResult::fallback(code.clone())
        }
    }
}

/// Select the best combined (muxed) stream.
///
/// Combined matching is exact-only regardless of policy: relaxing it would
/// silently swap codecs the caller explicitly asked to mux together. Every
/// preference axis must match; ties break toward the lowest code.
#[must_use]
pub fn resolve_combined(catalog: &StreamCatalog, profile: &PreferenceProfile) -> MatchResult {
    let target = match profile.resolution {
        TargetResolution::Audio => return MatchResult::none(),
        TargetResolution::Video(res) => res,
    };
    let wanted_rate = profile.wanted_frame_rate();
    let wanted_range = profile.wanted_dynamic_range();

    let best = catalog
        .iter()
        .filter_map(|f| match &f.payload {
            StreamPayload::Combined { video, audio } => Some((f, video, audio)),
            _ => None,
        })
        .filter(|&(_, video, audio)| {
            video.resolution == target
                && video.codec == profile.video_codec
                && audio.codec == profile.audio_codec
                && video.frame_rate == wanted_rate
                && video.dynamic_range == wanted_range
        })
        .min_by_key(|&(f, _, _)| &f.code);
    match best {
        Some((fmt, _, _)) => MatchResult::exact(fmt.code.clone()),
        None => MatchResult::none(),
    }
}

/// Resolutions to visit, in ladder order: the target first, then (when
/// fallback is permitted) each lower resolution that actually has a
/// video-only candidate, descending.
fn ladder_resolutions(
    pool: &[(&StreamFormat, &VideoStreamInfo)],
    target: Resolution,
    fallback: FallbackPolicy,
) -> Vec<Resolution> {
    let mut resolutions = vec![target];
    if fallback == FallbackPolicy::NextBest {
        let mut lower: Vec<Resolution> = pool
            .iter()
            .map(|&(_, v)| v.resolution)
            .filter(|&res| res < target)
            .collect();
        lower.sort_unstable();
        lower.dedup();
        lower.reverse();
        resolutions.extend(lower);
    }
    resolutions
}
