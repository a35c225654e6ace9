//! Session state for the SentiMent application
//!
//! The original shell hard-coded an "authenticated" flag; here the session is
//! an explicit entity. The client holds it in a context signal owned by the
//! app root, the server keeps the authoritative copy in a process-global
//! store, and all transitions go through the server functions below.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Identity attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub signed_in_at: DateTime<Utc>,
}

/// The two session states. Components read this through the context signal;
/// only the sign-in/sign-out flows replace it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserProfile),
}

impl Session {
    pub fn authenticated(username: &str) -> Self {
        Session::Authenticated(UserProfile {
            username: username.to_string(),
            signed_in_at: Utc::now(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated(profile) => Some(&profile.username),
            Session::Anonymous => None,
        }
    }

    /// Drops any identity. Safe to call on an already-anonymous session.
    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }
}

// Authoritative server-side session, a process-wide singleton.
#[cfg(feature = "server")]
mod store {
    use super::Session;
    use lazy_static::lazy_static;
    use std::sync::Arc;

    lazy_static! {
        pub static ref CURRENT: Arc<tokio::sync::Mutex<Session>> =
            Arc::new(tokio::sync::Mutex::new(Session::Anonymous));
    }
}

/// Current session as the server knows it.
#[server]
pub async fn fetch_session() -> Result<Session, ServerFnError> {
    let session = store::CURRENT.lock().await.clone();
    Ok(session)
}

/// Start an authenticated session for `username`.
#[server]
pub async fn sign_in(username: String) -> Result<Session, ServerFnError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ServerFnError::new("username must not be empty"));
    }

    let session = Session::authenticated(username);
    *store::CURRENT.lock().await = session.clone();
    log::info!("User {username} signed in");
    Ok(session)
}

/// End the current session. Idempotent.
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    let mut current = store::CURRENT.lock().await;
    if let Some(username) = current.username() {
        log::info!("User {username} signed out");
    }
    current.logout();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_anonymous() {
        assert_eq!(Session::default(), Session::Anonymous);
        assert!(!Session::default().is_authenticated());
        assert_eq!(Session::default().username(), None);
    }

    #[test]
    fn sign_in_carries_the_username() {
        let session = Session::authenticated("ferris");
        assert!(session.is_authenticated());
        assert_eq!(session.username(), Some("ferris"));
    }

    #[cfg(feature = "server")]
    #[tokio::test]
    async fn sign_in_rejects_blank_usernames() {
        assert!(sign_in("".to_string()).await.is_err());
        assert!(sign_in("   ".to_string()).await.is_err());
    }

    #[cfg(feature = "server")]
    #[tokio::test]
    async fn sign_in_trims_the_username() {
        let session = sign_in("  ferris ".to_string()).await.unwrap();
        assert_eq!(session.username(), Some("ferris"));
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = Session::authenticated("ferris");
        session.logout();
        assert_eq!(session, Session::Anonymous);
        session.logout();
        assert_eq!(session, Session::Anonymous);
    }
}
