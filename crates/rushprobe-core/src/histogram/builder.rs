use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::CoreError;

/// Widest move range that gets one bucket per integer.
pub const MAX_AXIS_SPAN: u32 = 1_000;

/// Occurrences of each move-count across a batch of samples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistogram {
    counts: BTreeMap<u32, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveStats {
    pub samples: usize,
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

impl MoveHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, moves: u32) {
        *self.counts.entry(moves).or_default() += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of samples recorded.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, moves: u32) -> usize {
        self.counts.get(&moves).copied().unwrap_or(0)
    }

    /// Observed values with their counts, ascending by move-count.
    pub fn sorted_counts(&self) -> Vec<(u32, usize)> {
        self.counts.iter().map(|(&m, &c)| (m, c)).collect()
    }

    pub fn axis_range(&self) -> Option<RangeInclusive<u32>> {
        let min = *self.counts.keys().next()?;
        let max = *self.counts.keys().next_back()?;
        Some(min..=max)
    }

    /// Every integer from min to max, including values that never occurred.
    ///
    /// Fails when the range holds more than [`MAX_AXIS_SPAN`] integers.
    pub fn dense_buckets(&self) -> Result<Vec<(u32, usize)>, CoreError> {
        let Some(range) = self.axis_range() else {
            return Ok(Vec::new());
        };
        let (min, max) = (*range.start(), *range.end());
        if max - min >= MAX_AXIS_SPAN {
            return Err(CoreError::AxisTooWide {
                min,
                max,
                limit: MAX_AXIS_SPAN,
            });
        }
        Ok(range.map(|m| (m, self.count(m))).collect())
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn stats(&self) -> Option<MoveStats> {
        let range = self.axis_range()?;
        let samples = self.total();
        let sum: u64 = self
            .counts
            .iter()
            .map(|(&m, &c)| u64::from(m) * c as u64)
            .sum();
        Some(MoveStats {
            samples,
            min: *range.start(),
            max: *range.end(),
            mean: sum as f64 / samples as f64,
        })
    }
}

impl FromIterator<u32> for MoveHistogram {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for moves in iter {
            histogram.record(moves);
        }
        histogram
    }
}
