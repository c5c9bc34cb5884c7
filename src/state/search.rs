//! Search panel state for the header search bar.
//!
//! DESIGN
//! ======
//! The component owns the debounce timer and the fetch; this module owns
//! everything that decides what the panel shows. Each issued request gets a
//! ticket with a monotonically increasing sequence number, and only the
//! response carrying the latest number is applied, so a slow reply for "ho"
//! can never overwrite the results for "hou".

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::error::ClientError;
use crate::net::types::{SearchItem, SearchResults};

/// Result domains, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchCategory {
    Resources,
    Forum,
    Courses,
}

impl SearchCategory {
    pub const ALL: [Self; 3] = [Self::Resources, Self::Forum, Self::Courses];

    pub fn label(self) -> &'static str {
        match self {
            Self::Resources => "resources",
            Self::Forum => "forum",
            Self::Courses => "courses",
        }
    }

    /// Detail view for one result.
    pub fn detail_path(self, id: &str) -> String {
        match self {
            Self::Resources => format!("/resources/{id}"),
            Self::Forum => format!("/forum/topic/{id}"),
            Self::Courses => format!("/courses/{id}"),
        }
    }

    fn items(self, results: &SearchResults) -> &[SearchItem] {
        match self {
            Self::Resources => &results.resources,
            Self::Forum => &results.forum,
            Self::Courses => &results.courses,
        }
    }
}

/// One issued query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    /// Whether the results panel is showing.
    pub open: bool,
    pub loading: bool,
    pub results: SearchResults,
    pub error: Option<String>,
    latest_seq: u64,
}

impl SearchState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a request for the current query once input has settled.
    ///
    /// An empty query resets the results and returns `None`: nothing to send.
    /// Either way any request still in flight becomes stale.
    pub fn begin_request(&mut self) -> Option<SearchTicket> {
        self.latest_seq += 1;
        if self.query.is_empty() {
            self.results = SearchResults::default();
            self.loading = false;
            self.error = None;
            return None;
        }
        self.loading = true;
        Some(SearchTicket { seq: self.latest_seq, query: self.query.clone() })
    }

    /// Apply a response. Returns `false` when it belongs to a superseded request.
    pub fn apply_response(&mut self, seq: u64, response: Result<SearchResults, ClientError>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.loading = false;
        match response {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(e) => {
                self.results = SearchResults::default();
                self.error = Some(e.banner());
            }
        }
        self.open = true;
        true
    }

    /// Non-empty categories in display order.
    pub fn groups(&self) -> Vec<(SearchCategory, &[SearchItem])> {
        SearchCategory::ALL
            .into_iter()
            .map(|category| (category, category.items(&self.results)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    pub fn has_results(&self) -> bool {
        SearchCategory::ALL.iter().any(|c| !c.items(&self.results).is_empty())
    }

    /// Pick a result: close the panel, clear the input, return where to go.
    pub fn select(&mut self, category: SearchCategory, id: &str) -> String {
        self.open = false;
        self.query.clear();
        self.results = SearchResults::default();
        self.loading = false;
        self.error = None;
        self.latest_seq += 1;
        category.detail_path(id)
    }

    /// Click outside the control: hide the panel, keep the query.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn focus(&mut self) {
        if !self.query.is_empty() {
            self.open = true;
        }
    }
}
