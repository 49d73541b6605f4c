use std::collections::HashMap;

use serde::Serialize;

use super::StopPolicy;
use crate::model::Sample;

/// Stops at the first sample whose canonical form was already seen.
#[derive(Debug, Default)]
pub struct RepeatDetector {
    first_seen: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RepeatOutcome {
    Repeated {
        first_seen: usize,
        repeated_at: usize,
        gap: usize,
        sample: Sample,
    },
    AllUnique {
        attempts: usize,
        unique: usize,
    },
}

impl RepeatDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StopPolicy for RepeatDetector {
    type Outcome = RepeatOutcome;

    fn observe(&mut self, attempt: usize, sample: &Sample) -> Option<RepeatOutcome> {
        let canonical = sample.canonical();
        if let Some(&first_seen) = self.first_seen.get(&canonical) {
            return Some(RepeatOutcome::Repeated {
                first_seen,
                repeated_at: attempt,
                gap: attempt - first_seen,
                sample: sample.clone(),
            });
        }
        self.first_seen.insert(canonical, attempt);
        None
    }

    fn exhausted(self, attempts: usize) -> RepeatOutcome {
        RepeatOutcome::AllUnique {
            attempts,
            unique: self.first_seen.len(),
        }
    }
}
