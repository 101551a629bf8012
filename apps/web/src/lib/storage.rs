//! `localStorage`-backed session store. A missing or blocked storage area reads
//! as "no flag" so the guard falls back to the login page instead of failing.

use portfolio_core::Error;
use portfolio_core::guard::SessionStore;
use tracing::warn;
use web_sys::Storage;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let storage = Self::storage().ok_or(Error::StorageUnavailable)?;
        storage.set_item(key, value).map_err(|err| {
            warn!(key, "localStorage write failed");
            Error::StorageWrite(format!("{err:?}"))
        })
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let storage = Self::storage().ok_or(Error::StorageUnavailable)?;
        storage.remove_item(key).map_err(|err| {
            warn!(key, "localStorage remove failed");
            Error::StorageWrite(format!("{err:?}"))
        })
    }
}
