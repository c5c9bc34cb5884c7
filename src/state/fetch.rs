//! Loading / error / data triple shared by the data-backed pages.
//!
//! ERROR HANDLING
//! ==============
//! A failed load keeps whatever data was already shown and records a banner
//! message. Nothing here ever panics or clears the view.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::error::ClientError;

#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: T::default(), loading: true, error: None }
    }
}

impl<T> FetchState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Apply a load result. Errors are logged and turned into a banner.
    pub fn finish(&mut self, result: Result<T, ClientError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => self.fail(&e),
        }
    }

    /// Record a failed action without touching the loaded data.
    pub fn fail(&mut self, error: &ClientError) {
        leptos::logging::warn!("{error}");
        self.loading = false;
        self.error = Some(error.banner());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
