use serde::Serialize;

use super::StopPolicy;
use crate::model::Sample;

/// Stops at the first sample that differs from the first one seen.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    first: Option<(Sample, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChangeOutcome {
    Changed {
        /// 1-based attempt at which the differing sample arrived.
        attempt: usize,
        /// Requests issued after the first one.
        requests_since_first: usize,
        first: Sample,
        current: Sample,
    },
    Unchanged {
        attempts: usize,
        first: Option<Sample>,
    },
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StopPolicy for ChangeDetector {
    type Outcome = ChangeOutcome;

    fn observe(&mut self, attempt: usize, sample: &Sample) -> Option<ChangeOutcome> {
        let canonical = sample.canonical();
        if let Some((first, first_canonical)) = &self.first {
            if *first_canonical == canonical {
                return None;
            }
            return Some(ChangeOutcome::Changed {
                attempt,
                requests_since_first: attempt.saturating_sub(1),
                first: first.clone(),
                current: sample.clone(),
            });
        }
        tracing::debug!(attempt, fingerprint = %sample.fingerprint(), "recorded first sample");
        self.first = Some((sample.clone(), canonical));
        None
    }

    fn exhausted(self, attempts: usize) -> ChangeOutcome {
        ChangeOutcome::Unchanged {
            attempts,
            first: self.first.map(|(s, _)| s),
        }
    }
}
