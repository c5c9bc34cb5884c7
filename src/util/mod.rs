//! Browser-facing helpers behind testable seams.
//!
//! Each module pairs a trait (storage, scheduling, input events) with a
//! browser implementation under `hydrate` and an in-memory one for server
//! rendering and tests.

pub mod activity;
pub mod debounce;
pub mod forms;
pub mod route_guard;
pub mod storage;
pub mod timer;
