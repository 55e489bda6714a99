use contracts::shared::error::AppError;
use contracts::system::auth::{KeyValueStore, Session};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// [`KeyValueStore`] over the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = get_local_storage()
            .ok_or_else(|| AppError::Storage("localStorage is not available".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Session currently persisted in `localStorage`, if complete.
pub fn stored_session() -> Option<Session> {
    Session::hydrate(&LocalStore)
}
