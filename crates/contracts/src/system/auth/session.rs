//! Session persistence across page reloads.
//!
//! The session lives in three separate keys. They are written and removed
//! together; a session is only restored when all three are present.

use serde::{Deserialize, Serialize};

use super::LoginResponse;
use crate::shared::error::AppError;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_EMAIL_KEY: &str = "user_email";
pub const USER_ID_KEY: &str = "user_id";

/// The logged-in user and the bearer token for API calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub token: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            id: response.user.id,
            email: response.user.email,
            token: response.session.access_token,
        }
    }
}

/// String key/value persistence, `localStorage` in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

impl Session {
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (ACCESS_TOKEN_KEY, self.token.as_str()),
            (USER_EMAIL_KEY, self.email.as_str()),
            (USER_ID_KEY, self.id.as_str()),
        ]
    }

    /// Restore a session; `None` unless every key holds a non-empty value.
    pub fn hydrate(store: &impl KeyValueStore) -> Option<Self> {
        let read = |key: &str| store.get(key).filter(|value| !value.is_empty());
        Some(Self {
            token: read(ACCESS_TOKEN_KEY)?,
            email: read(USER_EMAIL_KEY)?,
            id: read(USER_ID_KEY)?,
        })
    }

    /// Write all three keys. If one write fails the keys already written are
    /// removed again, so a half-written session is never left behind.
    pub fn persist(&self, store: &impl KeyValueStore) -> Result<(), AppError> {
        let entries = self.entries();
        for (written, (key, value)) in entries.iter().enumerate() {
            if let Err(err) = store.set(key, value) {
                for (done, _) in &entries[..written] {
                    store.remove(done);
                }
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn clear(store: &impl KeyValueStore) {
        for key in [ACCESS_TOKEN_KEY, USER_EMAIL_KEY, USER_ID_KEY] {
            store.remove(key);
        }
    }
}
