use rushprobe_core::config::SamplingBudget;
use rushprobe_core::detect::StopPolicy;
use rushprobe_core::model::Sample;

use crate::error::{FetchError, SamplerError};
use crate::http::SampleSource;

/// Issues up to `budget.max_attempts` requests, strictly one after another.
pub struct Sampler<S> {
    source: S,
    budget: SamplingBudget,
}

/// Reported while a run is in flight.
#[derive(Debug)]
pub enum SampleEvent<'a> {
    /// The first sample of a polling run, before any stop decision.
    First { sample: &'a Sample },
    Progress { attempt: usize },
    Failed { attempt: usize, error: &'a FetchError },
}

/// Outcome of a batch collection. Failed requests are counted, not kept.
#[derive(Debug, Default)]
pub struct Collection {
    /// Successful samples with their 1-based attempt index.
    pub samples: Vec<(usize, Sample)>,
    pub failures: usize,
    pub attempts: usize,
}

impl<S: SampleSource> Sampler<S> {
    pub fn new(source: S, budget: SamplingBudget) -> Self {
        Self { source, budget }
    }

    /// Poll until `policy` stops the run or the budget runs out.
    ///
    /// The first failed request aborts the run. `on_event` sees the first
    /// sample as soon as it arrives, then every progress point the run
    /// continues past.
    pub fn run_until<P: StopPolicy>(
        &mut self,
        mut policy: P,
        mut on_event: impl FnMut(SampleEvent<'_>),
    ) -> Result<P::Outcome, SamplerError> {
        for attempt in 1..=self.budget.max_attempts {
            let sample = self
                .source
                .fetch()
                .map_err(|source| SamplerError::Aborted { attempt, source })?;
            tracing::trace!(attempt, fingerprint = %sample.fingerprint(), "sample received");
            if attempt == 1 {
                on_event(SampleEvent::First { sample: &sample });
            }

            if let Some(outcome) = policy.observe(attempt, &sample) {
                tracing::info!(attempt, "stop condition met");
                return Ok(outcome);
            }
            if self.budget.is_progress_point(attempt) {
                on_event(SampleEvent::Progress { attempt });
            }
        }
        tracing::info!(attempts = self.budget.max_attempts, "attempt budget exhausted");
        Ok(policy.exhausted(self.budget.max_attempts))
    }

    /// Issue exactly `budget.max_attempts` requests, skipping failures.
    pub fn collect(&mut self, mut on_event: impl FnMut(SampleEvent<'_>)) -> Collection {
        let mut collection = Collection {
            samples: Vec::with_capacity(self.budget.max_attempts),
            failures: 0,
            attempts: self.budget.max_attempts,
        };

        for attempt in 1..=self.budget.max_attempts {
            match self.source.fetch() {
                Ok(sample) => {
                    collection.samples.push((attempt, sample));
                    if self.budget.is_progress_point(attempt) {
                        on_event(SampleEvent::Progress { attempt });
                    }
                }
                Err(error) => {
                    tracing::debug!(attempt, %error, "skipping failed request");
                    collection.failures += 1;
                    on_event(SampleEvent::Failed {
                        attempt,
                        error: &error,
                    });
                }
            }
        }

        collection
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
