//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call resolves to
//! [`ClientError::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Non-success statuses carry
//! the server's `{"error": ...}` message when it sends one, otherwise the
//! status code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Certificate, Comment, Course, Credentials, LoginResponse, RegisterRequest, ReportRequest, Resource,
    ResourcePreview, SearchResults, Topic, UserProfile,
};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::state::session::AuthTransport;
use crate::util::forms::{ApplicationForm, NewCommentRequest, NewTopicRequest};

// =============================================================
// Paths
// =============================================================

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const APPLICATIONS_ENDPOINT: &str = "/api/applications/";

pub fn social_login_endpoint(provider: &str) -> String {
    format!("/api/auth/{}", urlencoding::encode(provider))
}

pub fn search_endpoint(query: &str) -> String {
    format!("/api/search?q={}", urlencoding::encode(query))
}

pub fn user_profile_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/profile")
}

pub fn courses_endpoint(filters: &[(&str, &str)]) -> String {
    format!("/api/courses{}", query_string(filters))
}

pub fn course_endpoint(course_id: &str) -> String {
    format!("/api/courses/{course_id}")
}

pub fn course_action_endpoint(course_id: &str, action: &str) -> String {
    format!("/api/courses/{course_id}/{action}")
}

pub fn certificate_endpoint(course_id: &str, user_id: &str) -> String {
    format!("/api/courses/{course_id}/certificate/{user_id}")
}

pub fn topics_endpoint(filters: &[(&str, &str)]) -> String {
    format!("/api/forum/topics{}", query_string(filters))
}

pub fn topic_endpoint(topic_id: &str) -> String {
    format!("/api/forum/topics/{topic_id}")
}

pub fn topic_comments_endpoint(topic_id: &str) -> String {
    format!("/api/forum/topics/{topic_id}/comments")
}

pub fn topic_report_endpoint(topic_id: &str) -> String {
    format!("/api/forum/topics/{topic_id}/report")
}

pub fn comment_report_endpoint(comment_id: &str) -> String {
    format!("/api/forum/comments/{comment_id}/report")
}

pub fn resources_endpoint(filters: &[(&str, &str)]) -> String {
    format!("/api/resources{}", query_string(filters))
}

pub fn resource_preview_endpoint(resource_id: &str) -> String {
    format!("/api/resources/{resource_id}/preview")
}

pub fn resource_download_endpoint(resource_id: &str) -> String {
    format!("/api/resources/{resource_id}/download")
}

/// `?k=v&...` from the non-empty pairs, or an empty string.
pub fn query_string(pairs: &[(&str, &str)]) -> String {
    let encoded: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();
    if encoded.is_empty() { String::new() } else { format!("?{}", encoded.join("&")) }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("status {status}")
}

// =============================================================
// Transport
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

#[cfg(feature = "hydrate")]
async fn send<B: Serialize>(
    method: Method,
    url: &str,
    body: Option<&B>,
    what: &'static str,
) -> Result<gloo_net::http::Response, ClientError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
    };
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ClientError::fetch(what, e.to_string()))?;
    let resp = request.send().await.map_err(|e| ClientError::fetch(what, e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let detail = match resp.json::<super::types::ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status_failed_message(resp.status()),
    };
    Err(ClientError::fetch(what, detail))
}

async fn call<B: Serialize, T: DeserializeOwned>(
    config: &ClientConfig,
    method: Method,
    path: &str,
    body: Option<&B>,
    what: &'static str,
) -> Result<T, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(method, &config.url(path), body, what).await?;
        resp.json::<T>().await.map_err(|e| ClientError::fetch(what, e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, method, path, body, what);
        Err(ClientError::Unavailable)
    }
}

async fn call_unit<B: Serialize>(
    config: &ClientConfig,
    method: Method,
    path: &str,
    body: Option<&B>,
    what: &'static str,
) -> Result<(), ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send(method, &config.url(path), body, what).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, method, path, body, what);
        Err(ClientError::Unavailable)
    }
}

async fn get<T: DeserializeOwned>(config: &ClientConfig, path: &str, what: &'static str) -> Result<T, ClientError> {
    call::<(), T>(config, Method::Get, path, None, what).await
}

fn user_body(user_id: &str) -> serde_json::Value {
    serde_json::json!({ "userId": user_id })
}

// =============================================================
// Auth
// =============================================================

/// Exchange credentials for a token and user via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the credentials.
pub async fn login(config: &ClientConfig, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
    call(config, Method::Post, LOGIN_ENDPOINT, Some(credentials), "log in").await
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the registration.
pub async fn register(config: &ClientConfig, request: &RegisterRequest) -> Result<serde_json::Value, ClientError> {
    call(config, Method::Post, REGISTER_ENDPOINT, Some(request), "register").await
}

/// HTTP-backed [`AuthTransport`] used by the running app.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthTransport {
    config: ClientConfig,
}

impl HttpAuthTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl AuthTransport for HttpAuthTransport {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        login(&self.config, credentials).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ClientError> {
        register(&self.config, request).await
    }
}

// =============================================================
// Search
// =============================================================

/// Federated search across resources, forum, and courses.
///
/// # Errors
///
/// Returns [`ClientError::FetchFailure`] on any transport or status failure.
pub async fn search(config: &ClientConfig, query: &str) -> Result<SearchResults, ClientError> {
    get(config, &search_endpoint(query), "search").await
}

// =============================================================
// Applications & profile
// =============================================================

/// Submit a housing application.
///
/// # Errors
///
/// Returns the server's error message when the submission is rejected.
pub async fn submit_application(config: &ClientConfig, form: &ApplicationForm) -> Result<(), ClientError> {
    call_unit(config, Method::Post, APPLICATIONS_ENDPOINT, Some(form), "submit application").await
}

/// # Errors
///
/// Returns an error if the profile cannot be loaded.
pub async fn fetch_profile(config: &ClientConfig, user_id: &str) -> Result<UserProfile, ClientError> {
    get(config, &user_profile_endpoint(user_id), "load profile").await
}

/// # Errors
///
/// Returns an error if the update is rejected.
pub async fn update_profile(config: &ClientConfig, user_id: &str, profile: &UserProfile) -> Result<(), ClientError> {
    call_unit(config, Method::Put, &user_profile_endpoint(user_id), Some(profile), "update profile").await
}

// =============================================================
// Courses
// =============================================================

/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn fetch_courses(config: &ClientConfig, filters: &[(&str, &str)]) -> Result<Vec<Course>, ClientError> {
    get(config, &courses_endpoint(filters), "load courses").await
}

/// # Errors
///
/// Returns an error if the course cannot be loaded.
pub async fn fetch_course(config: &ClientConfig, course_id: &str) -> Result<Course, ClientError> {
    get(config, &course_endpoint(course_id), "load course").await
}

/// # Errors
///
/// Returns an error if enrollment is rejected.
pub async fn enroll(config: &ClientConfig, course_id: &str, user_id: &str) -> Result<(), ClientError> {
    let body = user_body(user_id);
    call_unit(config, Method::Post, &course_action_endpoint(course_id, "enroll"), Some(&body), "enroll in course").await
}

/// Mark one module complete.
///
/// # Errors
///
/// Returns an error if progress cannot be recorded.
pub async fn record_progress(
    config: &ClientConfig,
    course_id: &str,
    user_id: &str,
    module_id: &str,
) -> Result<(), ClientError> {
    let body = serde_json::json!({ "userId": user_id, "moduleId": module_id, "completed": true });
    call_unit(config, Method::Post, &course_action_endpoint(course_id, "progress"), Some(&body), "update progress").await
}

/// Request a certificate after the last module.
///
/// # Errors
///
/// Returns an error if the certificate is not issued.
pub async fn issue_certificate(config: &ClientConfig, course_id: &str, user_id: &str) -> Result<(), ClientError> {
    let body = user_body(user_id);
    call_unit(
        config,
        Method::Post,
        &course_action_endpoint(course_id, "certificate"),
        Some(&body),
        "issue certificate",
    )
    .await
}

/// # Errors
///
/// Returns an error if the certificate cannot be loaded.
pub async fn fetch_certificate(config: &ClientConfig, course_id: &str, user_id: &str) -> Result<Certificate, ClientError> {
    get(config, &certificate_endpoint(course_id, user_id), "load certificate").await
}

// =============================================================
// Forum
// =============================================================

/// # Errors
///
/// Returns an error if topics cannot be loaded.
pub async fn fetch_topics(config: &ClientConfig, filters: &[(&str, &str)]) -> Result<Vec<Topic>, ClientError> {
    get(config, &topics_endpoint(filters), "load topics").await
}

/// # Errors
///
/// Returns an error if the topic cannot be loaded.
pub async fn fetch_topic(config: &ClientConfig, topic_id: &str) -> Result<Topic, ClientError> {
    get(config, &topic_endpoint(topic_id), "load topic").await
}

/// # Errors
///
/// Returns an error if the topic is rejected.
pub async fn create_topic(config: &ClientConfig, request: &NewTopicRequest) -> Result<Topic, ClientError> {
    call(config, Method::Post, &topics_endpoint(&[]), Some(request), "create topic").await
}

/// # Errors
///
/// Returns an error if comments cannot be loaded.
pub async fn fetch_comments(config: &ClientConfig, topic_id: &str) -> Result<Vec<Comment>, ClientError> {
    get(config, &topic_comments_endpoint(topic_id), "load comments").await
}

/// # Errors
///
/// Returns an error if the comment is rejected.
pub async fn post_comment(
    config: &ClientConfig,
    topic_id: &str,
    request: &NewCommentRequest,
) -> Result<Comment, ClientError> {
    call(config, Method::Post, &topic_comments_endpoint(topic_id), Some(request), "post comment").await
}

/// # Errors
///
/// Returns an error if the report is rejected.
pub async fn report_topic(config: &ClientConfig, topic_id: &str, report: &ReportRequest) -> Result<(), ClientError> {
    call_unit(config, Method::Post, &topic_report_endpoint(topic_id), Some(report), "report topic").await
}

/// # Errors
///
/// Returns an error if the report is rejected.
pub async fn report_comment(config: &ClientConfig, comment_id: &str, report: &ReportRequest) -> Result<(), ClientError> {
    call_unit(config, Method::Post, &comment_report_endpoint(comment_id), Some(report), "report comment").await
}

// =============================================================
// Resources
// =============================================================

/// # Errors
///
/// Returns an error if resources cannot be loaded.
pub async fn fetch_resources(config: &ClientConfig, filters: &[(&str, &str)]) -> Result<Vec<Resource>, ClientError> {
    get(config, &resources_endpoint(filters), "load resources").await
}

/// # Errors
///
/// Returns an error if the preview cannot be loaded.
pub async fn fetch_resource_preview(config: &ClientConfig, resource_id: &str) -> Result<ResourcePreview, ClientError> {
    get(config, &resource_preview_endpoint(resource_id), "load preview").await
}
