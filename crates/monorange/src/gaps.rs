use std::ops::RangeInclusive;

use log::debug;

use crate::{Error, Result};

/// Spacing multiple above which two consecutive samples are split by a gap.
pub const DEFAULT_GAP_THRESHOLD: f64 = 1.5;

/// Options for scanning a sampled series for gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapOptions {
    /// Nominal spacing between samples. Inferred from the data when `None`.
    pub sample_interval: Option<f64>,
    /// A spacing greater than `threshold * sample_interval` is a gap.
    pub threshold: f64,
}

impl Default for GapOptions {
    fn default() -> Self {
        Self {
            sample_interval: None,
            threshold: DEFAULT_GAP_THRESHOLD,
        }
    }
}

impl GapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_interval(mut self, sample_interval: f64) -> Self {
        self.sample_interval = Some(sample_interval);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn validate(&self) -> Result<()> {
        if !is_positive_finite(self.threshold) {
            return Err(Error::InvalidGapThreshold(self.threshold));
        }
        match self.sample_interval {
            Some(dt) if !is_positive_finite(dt) => Err(Error::InvalidSampleInterval(dt)),
            _ => Ok(()),
        }
    }
}

/// A break in sampling between `before` and `after = before + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gap {
    /// Last sample before the gap.
    pub before: usize,
    /// First sample after the gap.
    pub after: usize,
    /// Absolute spacing across the gap.
    pub duration: f64,
}

#[inline]
fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Median of the absolute finite non-zero spacings between consecutive samples.
pub fn sample_interval(times: &[f64]) -> Option<f64> {
    let mut spacings: Vec<f64> = times
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|&dt| is_positive_finite(dt))
        .collect();

    if spacings.is_empty() {
        return None;
    }

    spacings.sort_unstable_by(f64::total_cmp);
    let mid = spacings.len() / 2;
    Some(if spacings.len() % 2 == 0 {
        (spacings[mid - 1] + spacings[mid]) / 2.0
    } else {
        spacings[mid]
    })
}

/// Finds the gaps in a monotonic, nominally uniformly sampled series.
///
/// Works for ascending and descending series alike. Series shorter than two
/// samples have no gaps.
///
/// # Errors
///
/// [`Error::InvalidGapThreshold`] or [`Error::InvalidSampleInterval`] for bad
/// options, [`Error::UndeterminedSampleInterval`] when no sample interval is
/// given and none can be inferred from `times`.
pub fn find_gaps(times: &[f64], options: GapOptions) -> Result<Vec<Gap>> {
    options.validate()?;

    if times.len() < 2 {
        return Ok(vec![]);
    }

    let dt = match options.sample_interval {
        Some(dt) => dt,
        None => sample_interval(times).ok_or(Error::UndeterminedSampleInterval)?,
    };
    let limit = options.threshold * dt;

    let gaps: Vec<Gap> = times
        .windows(2)
        .enumerate()
        .filter_map(|(before, w)| {
            let duration = (w[1] - w[0]).abs();
            (duration > limit).then_some(Gap {
                before,
                after: before + 1,
                duration,
            })
        })
        .collect();

    debug!(
        "found {} gaps in {} samples (sample interval {dt}, limit {limit})",
        gaps.len(),
        times.len()
    );

    Ok(gaps)
}

/// Continuous runs of sample indices between `gaps`, covering `0..len` in order.
///
/// Gaps out of order or outside `0..len` are ignored.
pub fn segments(len: usize, gaps: &[Gap]) -> Vec<RangeInclusive<usize>> {
    if len == 0 {
        return vec![];
    }

    let mut runs = Vec::with_capacity(gaps.len() + 1);
    let mut start = 0;
    for gap in gaps {
        if gap.before < start || gap.after <= gap.before || gap.after >= len {
            continue;
        }
        runs.push(start..=gap.before);
        start = gap.after;
    }
    runs.push(start..=len - 1);
    runs
}
