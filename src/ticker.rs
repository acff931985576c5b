use std::time::Duration;

/// Default UI poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Fastest allowed poll interval
pub const MIN_POLL_MS: u64 = 50;

/// Slowest allowed poll interval
pub const MAX_POLL_MS: u64 = 1000;

/// Get poll duration for a configured interval
pub fn poll_duration(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_POLL_MS, MAX_POLL_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_duration() {
        assert_eq!(poll_duration(DEFAULT_POLL_MS), Duration::from_millis(250));
        assert_eq!(poll_duration(0), Duration::from_millis(MIN_POLL_MS));
        assert_eq!(poll_duration(5000), Duration::from_millis(MAX_POLL_MS));
    }
}
