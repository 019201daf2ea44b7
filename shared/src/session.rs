//! Login session for the dashboard.
//!
//! There is a single admin account whose credentials are handed in at
//! startup. A successful login is persisted through a [`SessionStore`] so a
//! page reload keeps the user signed in.

use std::cell::RefCell;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Storage key used by browser-backed stores
pub const SESSION_STORAGE_KEY: &str = "userData";

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Session storage failed: {0}")]
    Storage(String),
}

/// The account allowed to sign in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl AdminCredentials {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// A signed-in user, stored as `{"email", "role", "isLoggedIn"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub role: String,
    pub is_logged_in: bool,
}

impl Session {
    pub fn admin(email: &str) -> Self {
        Self {
            email: email.to_string(),
            role: ADMIN_ROLE.to_string(),
            is_logged_in: true,
        }
    }
}

/// Where a session survives between page loads
pub trait SessionStore {
    fn load(&self) -> Result<Option<Session>, SessionError>;
    fn save(&self, session: &Session) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-process store, for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: RefCell<Option<Session>>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.session.borrow().clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.session.borrow_mut().take();
        Ok(())
    }
}

/// Checks credentials and drives the login/logout lifecycle
#[derive(Debug)]
pub struct Authenticator<S> {
    credentials: AdminCredentials,
    store: S,
}

impl<S: SessionStore> Authenticator<S> {
    pub fn new(credentials: AdminCredentials, store: S) -> Self {
        Self { credentials, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        if !self.credentials.matches(email, password) {
            warn!("rejected login attempt for {}", email);
            return Err(SessionError::InvalidCredentials);
        }

        let session = Session::admin(email);
        self.store.save(&session)?;
        info!("{} signed in", email);
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        info!("signed out");
        Ok(())
    }

    /// Session saved by an earlier login; unreadable data counts as signed out
    pub fn restore(&self) -> Option<Session> {
        match self.store.load() {
            Ok(Some(session)) if session.is_logged_in => Some(session),
            Ok(_) => None,
            Err(e) => {
                warn!("ignoring stored session: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn load(&self) -> Result<Option<Session>, SessionError> {
            Err(SessionError::Storage("corrupted".to_string()))
        }

        fn save(&self, _session: &Session) -> Result<(), SessionError> {
            Err(SessionError::Storage("quota exceeded".to_string()))
        }

        fn clear(&self) -> Result<(), SessionError> {
            Ok(())
        }
    }

    fn authenticator() -> Authenticator<MemoryStore> {
        Authenticator::new(AdminCredentials::default(), MemoryStore::default())
    }

    #[test]
    fn test_login_with_admin_credentials() {
        let auth = authenticator();
        let session = auth.login("admin@example.com", "admin123").unwrap();
        assert_eq!(session.role, "admin");
        assert!(session.is_logged_in);
        assert_eq!(auth.restore(), Some(session));
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let auth = authenticator();
        assert_eq!(
            auth.login("admin@example.com", "nope"),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(auth.restore(), None);
    }

    #[test]
    fn test_logout_clears_store() {
        let auth = authenticator();
        auth.login("admin@example.com", "admin123").unwrap();
        auth.logout().unwrap();
        assert_eq!(auth.restore(), None);
    }

    #[test]
    fn test_injected_credentials() {
        let credentials = AdminCredentials {
            email: "ops@charity.org".to_string(),
            password: "s3cret".to_string(),
        };
        let auth = Authenticator::new(credentials, MemoryStore::default());
        assert!(auth.login("admin@example.com", "admin123").is_err());
        assert!(auth.login("ops@charity.org", "s3cret").is_ok());
    }

    #[test]
    fn test_storage_failures() {
        let auth = Authenticator::new(AdminCredentials::default(), BrokenStore);
        assert_eq!(auth.restore(), None);
        assert!(matches!(
            auth.login("admin@example.com", "admin123"),
            Err(SessionError::Storage(_))
        ));
    }

    #[test]
    fn test_session_wire_format() {
        let value = serde_json::to_value(Session::admin("admin@example.com")).unwrap();
        assert_eq!(
            value,
            json!({ "email": "admin@example.com", "role": "admin", "isLoggedIn": true })
        );
    }
}
