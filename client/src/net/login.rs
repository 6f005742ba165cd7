//! Customer login flow over the token endpoint.
//!
//! DESIGN
//! ======
//! `LoginController` owns the three capabilities the flow touches (token
//! client, session store, navigator) and applies each outcome to the form
//! through `FormCell`. The busy flag is cleared as soon as the request
//! settles, before the outcome is applied, for every outcome.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use super::api::{AuthClient, AuthOutcome};
use super::types::Credentials;
use crate::state::login::{CONNECTION_ERROR_MESSAGE, FormCell, LoginFormState, STORAGE_ERROR_MESSAGE};
use crate::util::navigation::Navigator;
use crate::util::storage::{SessionStore, save_session};

/// Where a logged-in customer lands.
pub const HOME_PATH: &str = "/";

/// What a login attempt ended in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginResult {
    /// Session stored and the page is navigating home.
    Redirected,
    /// Credentials refused; the server's message is on the form.
    Rejected,
    /// Transport or storage failure; a generic message is on the form.
    Failed,
}

#[derive(Clone)]
pub struct LoginController {
    client: Arc<dyn AuthClient>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl LoginController {
    pub fn new(client: Arc<dyn AuthClient>, store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { client, store, navigator }
    }

    /// Submit `creds` and apply the outcome to `form`.
    ///
    /// Updates to a form that has been torn down are dropped; the session
    /// write and redirect still happen.
    pub async fn login<F: FormCell + ?Sized>(&self, form: &F, creds: Credentials) -> LoginResult {
        form.update_form(LoginFormState::begin_submit);

        let outcome = self.client.request_token(&creds).await;

        if !form.update_form(LoginFormState::settle) {
            log::debug!("login form unmounted before the token request settled");
        }

        match outcome {
            AuthOutcome::Authenticated(session) => match save_session(self.store.as_ref(), &session) {
                Ok(()) => {
                    log::info!("login succeeded, redirecting to {HOME_PATH}");
                    self.navigator.hard_redirect(HOME_PATH);
                    LoginResult::Redirected
                }
                Err(e) => {
                    log::warn!("session not saved: {e}");
                    form.update_form(|s| s.show_message(Some(STORAGE_ERROR_MESSAGE.to_owned())));
                    LoginResult::Failed
                }
            },
            AuthOutcome::Rejected(message) => {
                log::info!("login rejected by token endpoint");
                form.update_form(|s| s.show_message(message));
                LoginResult::Rejected
            }
            AuthOutcome::Transport(e) => {
                log::warn!("login request failed: {e}");
                form.update_form(|s| s.show_message(Some(CONNECTION_ERROR_MESSAGE.to_owned())));
                LoginResult::Failed
            }
        }
    }
}
