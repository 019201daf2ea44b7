use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use shared::{Session, SessionError, SessionStore, SESSION_STORAGE_KEY};

/// Keeps the signed-in session in `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        match LocalStorage::get::<Session>(SESSION_STORAGE_KEY) {
            Ok(session) => Ok(Some(session)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        LocalStorage::set(SESSION_STORAGE_KEY, session)
            .map_err(|e| SessionError::Storage(e.to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        LocalStorage::delete(SESSION_STORAGE_KEY);
        Ok(())
    }
}
