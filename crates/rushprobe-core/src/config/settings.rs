use std::time::Duration;

use crate::error::CoreError;

pub const DEFAULT_ENDPOINT: &str = "https://www.michaelfogleman.com/rushserver/random.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where to send requests and how long to wait for each one.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ProbeConfig {
    /// Build a validated config. Only http and https endpoints are accepted.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, CoreError> {
        let endpoint = endpoint.into();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(CoreError::InvalidConfig(format!(
                "endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        if timeout_secs == 0 {
            return Err(CoreError::InvalidConfig(
                "timeout must be at least one second".into(),
            ));
        }
        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            user_agent: format!("rushprobe/{}", env!("CARGO_PKG_VERSION")),
        })
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("rushprobe/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// How many requests a run may issue and how often it reports progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingBudget {
    pub max_attempts: usize,
    pub progress_every: usize,
}

impl SamplingBudget {
    pub fn new(max_attempts: usize, progress_every: usize) -> Result<Self, CoreError> {
        if max_attempts == 0 {
            return Err(CoreError::InvalidConfig(
                "attempt budget must be at least 1".into(),
            ));
        }
        if progress_every == 0 {
            return Err(CoreError::InvalidConfig(
                "progress interval must be at least 1".into(),
            ));
        }
        Ok(Self {
            max_attempts,
            progress_every,
        })
    }

    /// Budget used by the polling commands.
    pub fn watch_default() -> Self {
        Self {
            max_attempts: 250,
            progress_every: 50,
        }
    }

    /// Budget used by the histogram command.
    pub fn histogram_default() -> Self {
        Self {
            max_attempts: 100,
            progress_every: 20,
        }
    }

    pub fn is_progress_point(&self, attempt: usize) -> bool {
        attempt % self.progress_every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProbeConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("rushprobe/"));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let err = ProbeConfig::new("ftp://example.com/random.json", 10).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!(ProbeConfig::new("http://localhost:8080/random.json", 0).is_err());
    }

    #[test]
    fn test_budget_validation() {
        assert!(SamplingBudget::new(0, 10).is_err());
        assert!(SamplingBudget::new(10, 0).is_err());
        let budget = SamplingBudget::new(250, 50).unwrap();
        assert_eq!(budget, SamplingBudget::watch_default());
    }

    #[test]
    fn test_progress_points() {
        let budget = SamplingBudget::histogram_default();
        assert!(!budget.is_progress_point(19));
        assert!(budget.is_progress_point(20));
        assert!(budget.is_progress_point(100));
    }
}
