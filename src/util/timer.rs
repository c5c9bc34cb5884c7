//! Single-shot timers with cancel-on-drop handles.
//!
//! DESIGN
//! ======
//! A [`TimerHandle`] owns whatever the platform needs to keep a countdown
//! alive; dropping the handle cancels it. Every "reset" in the app is
//! therefore `drop old handle, schedule new one`, which guarantees at most
//! one outstanding countdown per owner.
//!
//! The browser build schedules through `gloo-timers`; native tests drive a
//! virtual clock via `ManualScheduler`.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::any::Any;
use std::rc::Rc;
use std::time::Duration;

/// Keeps a scheduled callback alive. Dropping it cancels the callback.
pub struct TimerHandle {
    _guard: Box<dyn Any>,
}

impl TimerHandle {
    pub fn new<G: 'static>(guard: G) -> Self {
        Self { _guard: Box::new(guard) }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TimerHandle")
    }
}

/// Schedules one-shot callbacks on the UI event loop.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// `setTimeout`-backed scheduler; `gloo_timers::callback::Timeout` clears
/// itself on drop.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimerHandle::new(gloo_timers::callback::Timeout::new(millis, callback))
    }
}

/// Scheduler for server rendering: callbacks never fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertScheduler;

impl Scheduler for InertScheduler {
    fn schedule(&self, _delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        drop(callback);
        TimerHandle::new(())
    }
}

/// Scheduler appropriate for the current build.
pub fn default_scheduler() -> Rc<dyn Scheduler> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(BrowserScheduler)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(InertScheduler)
    }
}

/// Inactivity countdown: `ARMED` while a handle is held, `DISARMED` otherwise.
pub struct SessionTimer {
    scheduler: Rc<dyn Scheduler>,
    window: Duration,
    pending: Option<TimerHandle>,
}

impl SessionTimer {
    pub fn new(scheduler: Rc<dyn Scheduler>, window: Duration) -> Self {
        Self { scheduler, window, pending: None }
    }

    /// Start the full window, cancelling any countdown already running.
    pub fn arm(&mut self, on_expire: Box<dyn FnOnce()>) {
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.window, on_expire));
    }

    pub fn disarm(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use super::{Scheduler, TimerHandle};

    struct Pending {
        id: u64,
        due: Duration,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        pending: Vec<Pending>,
    }

    struct CancelOnDrop {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for CancelOnDrop {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().pending.retain(|p| p.id != self.id);
            }
        }
    }

    /// Virtual-time scheduler; callbacks run only inside [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn now(&self) -> Duration {
            self.clock.borrow().now
        }

        pub(crate) fn pending_count(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        /// Move the clock forward, firing due callbacks in deadline order.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.now() + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let idx = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(idx, _)| idx);
                    idx.map(|idx| {
                        let p = clock.pending.remove(idx);
                        clock.now = p.due;
                        p.callback
                    })
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.pending.push(Pending { id, due, callback });
            TimerHandle::new(CancelOnDrop { id, clock: Rc::downgrade(&self.clock) })
        }
    }
}
