//! Trailing-edge debounce over a [`Scheduler`].
//!
//! Each call drops the previously scheduled action and waits the full quiet
//! period again. There is no forced flush: continuous input postpones the
//! action indefinitely.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::rc::Rc;
use std::time::Duration;

use super::timer::{Scheduler, TimerHandle};

pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    quiet: Duration,
    pending: Option<TimerHandle>,
}

impl Debouncer {
    pub fn new(scheduler: Rc<dyn Scheduler>, quiet: Duration) -> Self {
        Self { scheduler, quiet, pending: None }
    }

    /// Replace any waiting action with `action`, restarting the quiet period.
    pub fn call(&mut self, action: impl FnOnce() + 'static) {
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.quiet, Box::new(action)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
