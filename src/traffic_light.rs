use crate::blocking_queue::BlockingQueue;
use crate::config::{ConfigError, PhaseTiming};
use crate::phase::Phase;
use crate::simulate::{Simulate, SimulationError};

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

struct Shared {
    phase: AtomicU8,
    queue: BlockingQueue<Phase>,
    stop: AtomicBool,
}

impl Shared {
    fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire)).unwrap_or_default()
    }
}

/// A single traffic light cycling between red and green on its own thread.
///
/// Every transition is pushed to an internal [`BlockingQueue`]; consumers
/// synchronize on it through [`TrafficLight::wait_for_green`]. Dropping the
/// light stops the cycling thread and waits for it to exit.
pub struct TrafficLight {
    shared: Arc<Shared>,
    timing: PhaseTiming,
    started: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl TrafficLight {
    pub fn new() -> TrafficLight {
        TrafficLight::build(PhaseTiming::default())
    }

    pub fn with_timing(timing: PhaseTiming) -> Result<TrafficLight, ConfigError> {
        timing.validate()?;
        Ok(TrafficLight::build(timing))
    }

    fn build(timing: PhaseTiming) -> TrafficLight {
        TrafficLight {
            shared: Arc::new(Shared {
                phase: AtomicU8::new(Phase::Red.as_u8()),
                queue: BlockingQueue::new(),
                stop: AtomicBool::new(false),
            }),
            timing,
            started: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }

    pub fn timing(&self) -> PhaseTiming {
        self.timing
    }

    /// Snapshot of the phase; may be stale by the time the caller looks at it.
    pub fn current_phase(&self) -> Phase {
        self.shared.phase()
    }

    /// Blocks until the next queued phase notification.
    pub fn next_phase_change(&self) -> Phase {
        self.shared.queue.receive()
    }

    /// Blocks until a green notification is received. Red notifications are
    /// discarded. Never returns on a light that is not cycling and has no
    /// green pending.
    pub fn wait_for_green(&self) {
        loop {
            if self.next_phase_change().is_green() {
                return;
            }
        }
    }

    /// Returns `false` if no green notification arrived within `timeout`.
    pub fn wait_for_green_timeout(&self, timeout: Duration) -> bool {
        let deadline = match Instant::now().checked_add(timeout) {
            Some(deadline) => deadline,
            None => {
                self.wait_for_green();
                return true;
            }
        };
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.shared.queue.receive_timeout(remaining) {
                Some(Phase::Green) => return true,
                Some(Phase::Red) => continue,
                None => return false,
            }
        }
    }

    pub fn is_running(&self) -> bool {
        match self.handle.lock().unwrap().as_ref() {
            Some(handle) => !handle.is_finished(),
            None => false,
        }
    }

    /// Asks the cycling thread to exit after its current poll.
    pub fn stop(&self) {
        self.shared.stop.store(true, Ordering::Release);
    }

    /// Stops the cycling thread and waits for it. A light that was never
    /// started joins immediately.
    pub fn join(&self) -> Result<(), SimulationError> {
        self.stop();
        let handle = self.handle.lock().unwrap().take();
        if let Some(handle) = handle {
            debug!("waiting for traffic light thread to exit");
            handle.join().map_err(|_| SimulationError::Panicked)?;
        }
        Ok(())
    }
}

impl Simulate for TrafficLight {
    fn simulate(&self) -> Result<(), SimulationError> {
        if self.started.swap(true, Ordering::AcqRel) {
            warn!("traffic light simulate called twice");
            return Err(SimulationError::AlreadyStarted);
        }

        let shared = Arc::clone(&self.shared);
        let timing = self.timing;
        let handle = thread::Builder::new()
            .name("traffic-light".into())
            .spawn(move || {
                info!("traffic light thread started");
                cycle_through_phases(&shared, timing);
                info!("traffic light thread exiting");
            })
            .map_err(|e| {
                self.started.store(false, Ordering::Release);
                SimulationError::Spawn(e)
            })?;

        *self.handle.lock().unwrap() = Some(handle);
        Ok(())
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TrafficLight {
    fn drop(&mut self) {
        let _ = self.join();
    }
}

fn cycle_through_phases(shared: &Shared, timing: PhaseTiming) {
    let mut rng = rand::thread_rng();
    let mut phase = shared.phase();
    let mut cycle = timing.sample_interval(&mut rng);
    let mut last_update = Instant::now();

    while !shared.stop.load(Ordering::Acquire) {
        thread::sleep(timing.poll_interval);
        if last_update.elapsed() < cycle {
            continue;
        }

        phase = phase.toggled();
        shared.phase.store(phase.as_u8(), Ordering::Release);
        shared.queue.send(phase);

        cycle = timing.sample_interval(&mut rng);
        last_update = Instant::now();
        debug!(%phase, next_ms = cycle.as_millis() as u64, "phase changed");
    }
}
