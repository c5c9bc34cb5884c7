//! Course catalog filters and in-course progression.
//!
//! DESIGN
//! ======
//! Network calls live in `net::api`; this module only decides which module
//! is active and what happens once one is completed. The last module's
//! completion hands off to certificate issuance.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::types::{Course, CourseModule};

pub const COURSE_CATEGORIES: &[(&str, &str)] = &[
    ("", "All Categories"),
    ("legal", "Legal Rights"),
    ("financial", "Financial Management"),
    ("maintenance", "Property Maintenance"),
];

pub const PROGRESS_FILTERS: &[(&str, &str)] =
    &[("", "All Courses"), ("inProgress", "In Progress"), ("completed", "Completed")];

/// Catalog filters; empty strings mean "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseFilters {
    pub category: String,
    pub language: String,
    pub progress: String,
}

impl CourseFilters {
    /// Query pairs in the order the server expects.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [("category", self.category.as_str()), ("language", self.language.as_str()), ("progress", self.progress.as_str())]
    }
}

/// What completing the active module leads to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progression {
    /// Another module follows; it is now active.
    Next(String),
    /// That was the last module: request the certificate.
    Complete,
}

/// A loaded course plus which module is on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseView {
    pub course: Course,
    active: Option<String>,
}

impl CourseView {
    /// Open on the server's current module when it is part of the course,
    /// otherwise on the first module.
    pub fn new(course: Course) -> Self {
        let resumed = course
            .current_module
            .as_ref()
            .map(|m| m.id.clone())
            .filter(|id| course.modules.iter().any(|m| &m.id == id));
        let active = resumed.or_else(|| course.modules.first().map(|m| m.id.clone()));
        Self { course, active }
    }

    pub fn active_module(&self) -> Option<&CourseModule> {
        let id = self.active.as_deref()?;
        self.course.modules.iter().find(|m| m.id == id)
    }

    pub fn is_active(&self, module_id: &str) -> bool {
        self.active.as_deref() == Some(module_id)
    }

    /// Jump to a module from the sidebar. Unknown ids are ignored.
    pub fn select(&mut self, module_id: &str) {
        if self.course.modules.iter().any(|m| m.id == module_id) {
            self.active = Some(module_id.to_owned());
        }
    }

    /// Mark the active module done after the server recorded it.
    ///
    /// Returns `None` when no module is active, e.g. a course without modules.
    pub fn complete_active(&mut self) -> Option<Progression> {
        let index = self.active_index()?;
        self.course.modules[index].completed = true;
        let progression = match self.course.modules.get(index + 1) {
            Some(next) => {
                let id = next.id.clone();
                self.active = Some(id.clone());
                Progression::Next(id)
            }
            None => Progression::Complete,
        };
        Some(progression)
    }

    /// Completion percentage clamped for the progress bar.
    pub fn percent(&self) -> f64 {
        self.course.progress.unwrap_or(0.0).clamp(0.0, 100.0)
    }

    fn active_index(&self) -> Option<usize> {
        let id = self.active.as_deref()?;
        self.course.modules.iter().position(|m| m.id == id)
    }
}

pub fn certificate_path(course_id: &str) -> String {
    format!("/courses/{course_id}/certificate")
}
