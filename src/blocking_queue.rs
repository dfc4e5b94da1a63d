use std::sync::{Arc, Mutex, Condvar};
use std::time::{Duration, Instant};

/// Mutex + condvar handoff buffer.
///
/// Every pop takes the most recently sent item (stack order), not the oldest.
/// This is intentional and kept for behavioral parity with the traffic light,
/// whose consumer drains close to real time so at most one item is pending.
/// Prefer a FIFO queue when reusing this elsewhere.
///
/// The buffer is unbounded: `send` never blocks and there is no backpressure.
#[derive(Clone)]
pub struct BlockingQueue<T> {
    pair: Arc<(Mutex<Vec::<T>>, Condvar)>,
}

impl<T> BlockingQueue<T> {
    pub fn new() -> Self {
        BlockingQueue {
            pair: Arc::new((Mutex::new(Vec::<T>::new()), Condvar::new())),
        }
    }

    /// Pushes `t` and wakes one waiting receiver.
    pub fn send(&self, t: T) {
        let (lock, cvar) = &*self.pair;
        {
            let mut stack = lock.lock().unwrap();
            stack.push(t);
        }
        // item is visible before the wake, lock already released
        cvar.notify_one();
    }

    /// Blocks until an item is available and pops the most recent one.
    pub fn receive(&self) -> T {
        let (lock, cvar) = &*self.pair;
        let mut stack = lock.lock().unwrap();
        loop {
            if let Some(last) = stack.pop() {
                return last;
            }
            stack = cvar.wait(stack).unwrap();
        }
    }

    /// Like `receive`, but returns `None` if nothing arrives within `timeout`.
    pub fn receive_timeout(&self, timeout: Duration) -> Option<T> {
        let deadline = match Instant::now().checked_add(timeout) {
            Some(deadline) => deadline,
            None => return Some(self.receive()),
        };
        let (lock, cvar) = &*self.pair;
        let mut stack = lock.lock().unwrap();
        loop {
            if let Some(last) = stack.pop() {
                return Some(last);
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            let (guard, _) = cvar.wait_timeout(stack, deadline - now).unwrap();
            stack = guard;
        }
    }

    pub fn try_receive(&self) -> Option<T> {
        let (lock, _) = &*self.pair;
        let mut stack = lock.lock().unwrap();
        stack.pop()
    }

    pub fn len(&self) -> usize {
        let (lock, _) = &*self.pair;
        let stack = lock.lock().unwrap();
        stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
