//! User-activity monitoring for the inactivity timeout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager starts the monitor when a session is established and
//! stops it on logout. Subscriptions are RAII: dropping an
//! [`ActivitySubscription`] removes the window listeners, so tearing down the
//! manager can never leak a listener.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use std::any::Any;
use std::rc::Rc;

/// DOM events treated as user activity.
pub const ACTIVITY_EVENTS: [&str; 2] = ["mousemove", "keypress"];

/// Live listener registration. Dropping it unsubscribes.
pub struct ActivitySubscription {
    _guard: Box<dyn Any>,
}

impl ActivitySubscription {
    pub fn new<G: 'static>(guard: G) -> Self {
        Self { _guard: Box::new(guard) }
    }
}

/// Source of coarse user-input signals.
pub trait ActivitySource {
    fn subscribe(&self, on_activity: Rc<dyn Fn()>) -> ActivitySubscription;
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowActivitySource;

#[cfg(feature = "hydrate")]
struct WindowListeners {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn Fn()>,
}

#[cfg(feature = "hydrate")]
impl Drop for WindowListeners {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        for event in ACTIVITY_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(feature = "hydrate")]
impl ActivitySource for WindowActivitySource {
    fn subscribe(&self, on_activity: Rc<dyn Fn()>) -> ActivitySubscription {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return ActivitySubscription::new(());
        };
        let callback = wasm_bindgen::closure::Closure::<dyn Fn()>::new(move || on_activity());
        for event in ACTIVITY_EVENTS {
            let _ = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
        ActivitySubscription::new(WindowListeners { window, callback })
    }
}

/// Source for server rendering: never signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertActivitySource;

impl ActivitySource for InertActivitySource {
    fn subscribe(&self, _on_activity: Rc<dyn Fn()>) -> ActivitySubscription {
        ActivitySubscription::new(())
    }
}

pub fn default_activity_source() -> Rc<dyn ActivitySource> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(WindowActivitySource)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(InertActivitySource)
    }
}

/// Holds at most one subscription to an [`ActivitySource`].
pub struct ActivityMonitor {
    source: Rc<dyn ActivitySource>,
    subscription: Option<ActivitySubscription>,
}

impl ActivityMonitor {
    pub fn new(source: Rc<dyn ActivitySource>) -> Self {
        Self { source, subscription: None }
    }

    /// Subscribe unless already listening.
    pub fn start(&mut self, on_activity: Rc<dyn Fn()>) {
        if self.subscription.is_none() {
            self.subscription = Some(self.source.subscribe(on_activity));
        }
    }

    pub fn stop(&mut self) {
        self.subscription = None;
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualActivitySource;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::{ActivitySource, ActivitySubscription};

    type Listeners = Vec<(u64, Rc<dyn Fn()>)>;

    struct Unsubscribe {
        id: u64,
        listeners: Weak<RefCell<Listeners>>,
    }

    impl Drop for Unsubscribe {
        fn drop(&mut self) {
            if let Some(listeners) = self.listeners.upgrade() {
                listeners.borrow_mut().retain(|(id, _)| *id != self.id);
            }
        }
    }

    /// Test source; [`ManualActivitySource::emit`] plays one input event.
    #[derive(Clone, Default)]
    pub(crate) struct ManualActivitySource {
        listeners: Rc<RefCell<Listeners>>,
        next_id: Rc<RefCell<u64>>,
    }

    impl ManualActivitySource {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        pub(crate) fn emit(&self) {
            let snapshot: Vec<Rc<dyn Fn()>> = self.listeners.borrow().iter().map(|(_, cb)| cb.clone()).collect();
            for cb in snapshot {
                cb();
            }
        }
    }

    impl ActivitySource for ManualActivitySource {
        fn subscribe(&self, on_activity: Rc<dyn Fn()>) -> ActivitySubscription {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            self.listeners.borrow_mut().push((id, on_activity));
            ActivitySubscription::new(Unsubscribe { id, listeners: Rc::downgrade(&self.listeners) })
        }
    }
}
