//! The relaxation ladder, expressed as data.
//!
//! Each rung records which preference axes must still match exactly at that
//! level; iterating the rung table in order replaces what would otherwise
//! be a tangle of nested conditionals, and reordering levels becomes a data
//! change rather than a control-flow rewrite.

/// One rung of the video relaxation ladder.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rung {
    /// The candidate's frame-rate class must equal the preferred one.
    pub match_frame_rate: bool,
    /// The candidate's dynamic range must equal the preferred one.
    pub match_dynamic_range: bool,
}

/// Rungs in relaxation order: exact, relax dynamic range, relax frame rate,
/// relax both. Resolution and codec are held fixed across the table; the
/// resolver retries it per codec and then per lower resolution.
pub(crate) const RUNGS: [Rung; 4] = [
    Rung {
        match_frame_rate: true,
        match_dynamic_range: true,
    },
    Rung {
        match_frame_rate: true,
        match_dynamic_range: false,
    },
    Rung {
        match_frame_rate: false,
        match_dynamic_range: true,
    },
    Rung {
        match_frame_rate: false,
        match_dynamic_range: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rung_is_exact_and_last_is_fully_relaxed() {
        assert!(RUNGS[0].match_frame_rate && RUNGS[0].match_dynamic_range);
        assert!(!RUNGS[3].match_frame_rate && !RUNGS[3].match_dynamic_range);
    }

    #[test]
    fn dynamic_range_relaxes_before_frame_rate() {
        assert!(RUNGS[1].match_frame_rate && !RUNGS[1].match_dynamic_range);
        assert!(!RUNGS[2].match_frame_rate && RUNGS[2].match_dynamic_range);
    }
}
