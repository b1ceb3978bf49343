/// Configures per-attempt timeout and the rate-limit retry policy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchOptions {
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total number of requests issued for one fetch, the first one included.
    pub max_attempts: usize,
    /// Added on top of the server's `Retry-After` hint before retrying.
    pub safety_margin_ms: u64,
    /// Wait used when a 429 carries no usable `Retry-After` hint.
    pub default_retry_after_ms: u64,
}

impl FetchOptions {
    /// Default attempt budget for one fetch.
    pub const MAX_ATTEMPTS: usize = 5;

    /// Overrides the per-request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Overrides the attempt budget. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_attempts: Self::MAX_ATTEMPTS,
            safety_margin_ms: 500,
            default_retry_after_ms: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FetchOptions;

    #[test]
    fn defaults_follow_cooperative_policy() {
        let options = FetchOptions::default();
        assert_eq!(options.max_attempts, 5);
        assert_eq!(options.safety_margin_ms, 500);
        assert_eq!(options.default_retry_after_ms, 1_000);
    }

    #[test]
    fn attempt_budget_never_drops_to_zero() {
        assert_eq!(FetchOptions::default().with_max_attempts(0).max_attempts, 1);
    }
}
