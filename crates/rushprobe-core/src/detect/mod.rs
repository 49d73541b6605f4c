pub mod change;
pub mod repeat;

pub use change::{ChangeDetector, ChangeOutcome};
pub use repeat::{RepeatDetector, RepeatOutcome};

use crate::model::Sample;

/// Decides after each sample whether a polling run should stop.
///
/// `attempt` is 1-based and strictly increasing across calls.
pub trait StopPolicy {
    type Outcome;

    /// Inspect one sample. `Some` ends the run with that outcome.
    fn observe(&mut self, attempt: usize, sample: &Sample) -> Option<Self::Outcome>;

    /// Outcome when the attempt budget ran out without a stop.
    fn exhausted(self, attempts: usize) -> Self::Outcome;
}
