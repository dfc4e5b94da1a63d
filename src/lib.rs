pub mod blocking_queue;
pub use blocking_queue::BlockingQueue;

pub mod config;
pub use config::{ConfigError, PhaseTiming};

pub mod phase;
pub use phase::Phase;

pub mod simulate;
pub use simulate::{Simulate, SimulationError};

pub mod traffic_light;
pub use traffic_light::TrafficLight;

/// Error returned by the binaries.
///
/// The library itself reports `ConfigError` and `SimulationError`; both
/// convert into this boxed error so `main` can use `?` on either.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// A specialized `Result` type for traffic light applications.
pub type Result<T> = std::result::Result<T, Error>;
