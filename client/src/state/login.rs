//! Login form state and its transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginForm` keeps one `LoginFormState` in an `RwSignal`; `LoginController`
//! drives the submit/settle transitions through the `FormCell` handle so the
//! same flow runs against a plain `RefCell` in tests.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::types::Credentials;

/// Shown when the token endpoint cannot be reached or answers garbage.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Error: Unable to connect to the WP Shopify account system. Please try again later.";

/// Shown when the session could not be written to browser storage.
pub const STORAGE_ERROR_MESSAGE: &str =
    "Error: Unable to save your login session. Please allow site storage in your browser and try again.";

/// Interactive state of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    /// True while a token request is in flight; disables inputs and submit.
    pub disabled: bool,
    /// Last error surfaced to the user.
    pub message: Option<String>,
}

/// Coarse phase of the form, derived from `disabled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginPhase {
    Idle,
    Submitting,
}

impl LoginFormState {
    pub fn phase(&self) -> LoginPhase {
        if self.disabled { LoginPhase::Submitting } else { LoginPhase::Idle }
    }

    /// Snapshot the current field values, untouched.
    pub fn credentials(&self) -> Credentials {
        Credentials { username: self.username.clone(), password: self.password.clone() }
    }

    /// Enter `Submitting`: lock the form and clear the previous error.
    pub fn begin_submit(&mut self) {
        self.disabled = true;
        self.message = None;
    }

    /// UI trigger: enter `Submitting` and hand back the field values, or
    /// `None` while a request is already in flight.
    pub fn try_begin_submit(&mut self) -> Option<Credentials> {
        if self.disabled {
            return None;
        }
        self.begin_submit();
        Some(self.credentials())
    }

    /// Leave `Submitting`, whatever the outcome.
    pub fn settle(&mut self) {
        self.disabled = false;
    }

    /// Surface `message`; an absent or empty one keeps the paragraph hidden.
    pub fn show_message(&mut self, message: Option<String>) {
        self.message = message.filter(|m| !m.is_empty());
    }

    pub fn message_visible(&self) -> bool {
        self.message.is_some()
    }
}

/// Handle through which the login flow mutates form state.
pub trait FormCell {
    /// Apply `f` to the live state. Returns `false` once the form is gone.
    fn update_form(&self, f: impl FnOnce(&mut LoginFormState)) -> bool;
}

impl FormCell for RwSignal<LoginFormState> {
    fn update_form(&self, f: impl FnOnce(&mut LoginFormState)) -> bool {
        self.try_update(f).is_some()
    }
}

impl FormCell for RefCell<LoginFormState> {
    fn update_form(&self, f: impl FnOnce(&mut LoginFormState)) -> bool {
        f(&mut self.borrow_mut());
        true
    }
}
