//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every network helper returns `ClientError`; pages turn it into an inline
//! banner via [`ClientError::banner`]. Nothing here is allowed to reach a
//! global handler or panic the view tree.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::forms::FieldError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Login returned a non-success status or the request never completed.
    #[error("login failed")]
    AuthenticationFailure,
    /// Registration returned a non-success status or the request never completed.
    #[error("registration failed")]
    RegistrationFailure,
    /// Stored credentials were missing or unreadable at startup.
    #[error("no stored session: {0}")]
    RehydrationSkip(String),
    /// A data-loading or mutating call for a feature failed.
    #[error("failed to {what}: {detail}")]
    FetchFailure { what: &'static str, detail: String },
    /// The call needs a browser and this build has none.
    #[error("not available outside the browser")]
    Unavailable,
    /// Client-side validation rejected a form before it was sent.
    #[error("{} field(s) need attention", .0.len())]
    Validation(Vec<FieldError>),
}

impl ClientError {
    pub fn fetch(what: &'static str, detail: impl Into<String>) -> Self {
        Self::FetchFailure { what, detail: detail.into() }
    }

    /// User-facing message for inline error banners.
    pub fn banner(&self) -> String {
        match self {
            Self::AuthenticationFailure => "Login failed. Check your email and password.".to_owned(),
            Self::RegistrationFailure => "Registration failed. Please try again.".to_owned(),
            Self::FetchFailure { what, .. } => format!("Failed to {what}"),
            Self::Validation(errors) => errors
                .first()
                .map_or_else(|| "Please check the form.".to_owned(), |e| e.message.clone()),
            Self::RehydrationSkip(_) | Self::Unavailable => "An error occurred. Please try again.".to_owned(),
        }
    }
}
