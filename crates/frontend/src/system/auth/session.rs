//! Signed-in admin session.
//!
//! `Session` is `Copy` and handed to every API function explicitly. The token
//! is read from storage at call time, so a logout in another tab or an
//! expired JWT is noticed on the very next request.

use contracts::shared::api_error::ApiError;
use contracts::system::auth::{auth_headers, is_token_expired, AuthHeaderMode};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Copy)]
pub struct Session {
    auth: RwSignal<AuthState>,
    header_mode: AuthHeaderMode,
}

fn now_unix() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

impl Session {
    /// Restores whatever the last sign-in left in storage.
    pub fn restore(header_mode: AuthHeaderMode) -> Self {
        let token = storage::get_token().filter(|t| !is_token_expired(t, now_unix()));
        if token.is_none() {
            storage::clear();
        }
        let email = token.as_ref().and_then(|_| storage::get_email());
        Self {
            auth: RwSignal::new(AuthState { token, email }),
            header_mode,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.with(|state| state.token.is_some())
    }

    pub fn email(&self) -> Option<String> {
        self.auth.with(|state| state.email.clone())
    }

    pub fn sign_in(&self, token: String, email: String) {
        storage::save_session(&token, &email);
        log::info!("admin signed in: {}", email);
        self.auth.set(AuthState {
            token: Some(token),
            email: Some(email),
        });
    }

    /// Current token, or `MissingToken` when absent or past its `exp`.
    pub fn token(&self) -> Result<String, ApiError> {
        match storage::get_token() {
            Some(token) if !is_token_expired(&token, now_unix()) => Ok(token),
            _ => Err(ApiError::MissingToken),
        }
    }

    pub fn auth_headers(&self) -> Result<Vec<(&'static str, String)>, ApiError> {
        let token = self.token()?;
        Ok(auth_headers(&token, self.header_mode))
    }

    /// Drops the session; the shell falls back to the login page.
    pub fn expire(&self) {
        storage::clear();
        if self.auth.with_untracked(|state| state.token.is_some()) {
            log::info!("admin session ended");
        }
        self.auth.set(AuthState::default());
    }

    /// Logs out on auth failures. Returns `true` when it did.
    pub fn handle_error(&self, err: &ApiError) -> bool {
        if err.is_auth() {
            log::warn!("auth failure, signing out: {}", err);
            self.expire();
            true
        } else {
            false
        }
    }
}
