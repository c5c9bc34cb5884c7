//! Forum listing filters and topic thread state.

#[cfg(test)]
#[path = "forum_test.rs"]
mod forum_test;

use crate::net::types::{Comment, ReportRequest, Topic};

pub const FORUM_CATEGORIES: &[(&str, &str)] = &[
    ("", "All Categories"),
    ("general", "General Discussion"),
    ("legal", "Legal Questions"),
    ("maintenance", "Maintenance"),
    ("rights", "Tenant Rights"),
];

pub const SORT_OPTIONS: &[(&str, &str)] = &[("latest", "Latest"), ("popular", "Most Popular"), ("active", "Most Active")];

/// Reason sent with every moderation report.
pub const REPORT_REASON: &str = "inappropriate content";

pub const NEW_TOPIC_PATH: &str = "/forum/new";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicFilters {
    pub category: String,
    pub sort_by: String,
}

impl Default for TopicFilters {
    fn default() -> Self {
        Self { category: String::new(), sort_by: "latest".to_owned() }
    }
}

impl TopicFilters {
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [("category", self.category.as_str()), ("sortBy", self.sort_by.as_str())]
    }
}

pub fn topic_path(topic_id: &str) -> String {
    format!("/forum/topic/{topic_id}")
}

pub fn report_from(reporter_id: &str) -> ReportRequest {
    ReportRequest { reporter_id: reporter_id.to_owned(), reason: REPORT_REASON.to_owned() }
}

/// One topic with its comments, as shown on the topic page.
#[derive(Clone, Debug, PartialEq)]
pub struct Thread {
    pub topic: Topic,
    pub comments: Vec<Comment>,
}

impl Thread {
    pub fn new(topic: Topic) -> Self {
        Self { topic, comments: Vec::new() }
    }

    /// Append a comment the server just accepted.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
