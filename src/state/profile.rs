//! Profile editing state.
//!
//! The form edits a draft copy; cancelling restores the last profile the
//! server confirmed.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::error::ClientError;
use crate::net::types::UserProfile;
use crate::util::forms::Form;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileEditor {
    pub draft: UserProfile,
    saved: UserProfile,
    pub editing: bool,
    pub status: Option<StatusMessage>,
}

impl ProfileEditor {
    pub fn loaded(&mut self, result: Result<UserProfile, ClientError>) {
        match result {
            Ok(profile) => {
                self.saved = profile.clone();
                self.draft = profile;
            }
            Err(e) => self.error(&e),
        }
    }

    /// Enter edit mode, or leave it discarding the draft.
    pub fn toggle_editing(&mut self) {
        if self.editing {
            self.draft = self.saved.clone();
        }
        self.editing = !self.editing;
    }

    /// Validate the draft before sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] and records the first message.
    pub fn prepare_save(&mut self) -> Result<UserProfile, ClientError> {
        match self.draft.validate() {
            Ok(()) => Ok(self.draft.clone()),
            Err(errors) => {
                let err = ClientError::Validation(errors);
                self.error(&err);
                Err(err)
            }
        }
    }

    pub fn saved(&mut self, result: Result<(), ClientError>) {
        match result {
            Ok(()) => {
                self.saved = self.draft.clone();
                self.editing = false;
                self.status =
                    Some(StatusMessage { kind: StatusKind::Success, message: "Profile updated successfully".to_owned() });
            }
            Err(e) => self.error(&e),
        }
    }

    fn error(&mut self, error: &ClientError) {
        leptos::logging::warn!("{error}");
        self.status = Some(StatusMessage { kind: StatusKind::Error, message: error.banner() });
    }
}
