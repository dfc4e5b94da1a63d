use rand::Rng;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MIN_INTERVAL_MS: u64 = 4000;
pub const DEFAULT_MAX_INTERVAL_MS: u64 = 6000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min interval {min:?} is greater than max interval {max:?}")]
    EmptyRange { min: Duration, max: Duration },
    #[error("poll interval must be non-zero")]
    ZeroPollInterval,
}

/// Timing of the phase cycle.
///
/// Each phase lasts a uniformly drawn duration in `[min_interval, max_interval]`,
/// checked every `poll_interval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseTiming {
    pub min_interval: Duration,
    pub max_interval: Duration,
    pub poll_interval: Duration,
}

impl PhaseTiming {
    pub fn from_millis(min_ms: u64, max_ms: u64, poll_ms: u64) -> Result<PhaseTiming, ConfigError> {
        let timing = PhaseTiming {
            min_interval: Duration::from_millis(min_ms),
            max_interval: Duration::from_millis(max_ms),
            poll_interval: Duration::from_millis(poll_ms),
        };
        timing.validate()?;
        Ok(timing)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_interval > self.max_interval {
            return Err(ConfigError::EmptyRange {
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    /// Draws the length of the next phase, millisecond granularity.
    pub fn sample_interval<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min = self.min_interval.as_millis() as u64;
        let max = self.max_interval.as_millis() as u64;
        Duration::from_millis(rng.gen_range(min..=max))
    }
}

impl Default for PhaseTiming {
    fn default() -> Self {
        PhaseTiming {
            min_interval: Duration::from_millis(DEFAULT_MIN_INTERVAL_MS),
            max_interval: Duration::from_millis(DEFAULT_MAX_INTERVAL_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}
