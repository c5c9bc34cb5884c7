//! Resource library filters and preview selection.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use crate::config::ClientConfig;
use crate::net::api::resource_download_endpoint;
use crate::net::types::ResourcePreview;

pub const RESOURCE_TYPES: &[(&str, &str)] = &[("", "All Types"), ("pdf", "PDF"), ("video", "Video"), ("document", "Document")];

pub const RESOURCE_CATEGORIES: &[(&str, &str)] =
    &[("", "All Categories"), ("legal", "Legal"), ("financial", "Financial"), ("maintenance", "Maintenance")];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceFilters {
    pub kind: String,
    pub category: String,
    pub language: String,
}

impl ResourceFilters {
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [("type", self.kind.as_str()), ("category", self.category.as_str()), ("language", self.language.as_str())]
    }
}

/// Direct link the browser can download from.
pub fn download_url(config: &ClientConfig, resource_id: &str) -> String {
    config.url(&resource_download_endpoint(resource_id))
}

/// File name offered for a download.
pub fn download_name(resource_id: &str) -> String {
    format!("resource-{resource_id}")
}

/// Preview overlay: at most one resource at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewPanel {
    pub current: Option<ResourcePreview>,
}

impl PreviewPanel {
    pub fn show(&mut self, preview: ResourcePreview) {
        self.current = Some(preview);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
