//! sessionStorage-backed confirmation store.

use gloo::storage::{SessionStorage, Storage};
use strajk_core::{Confirmation, ConfirmationStore, StoreError};

/// Session key the confirmation is stored under.
pub const CONFIRMATION_KEY: &str = "confirmation";

/// Browser implementation of [`ConfirmationStore`]: one JSON document in
/// `sessionStorage`, gone when the tab's session ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl ConfirmationStore for BrowserSession {
    fn save(&self, confirmation: &Confirmation) -> Result<(), StoreError> {
        SessionStorage::set(CONFIRMATION_KEY, confirmation)
            .map_err(|err| StoreError(err.to_string()))
    }

    fn load(&self) -> Result<Option<Confirmation>, StoreError> {
        Ok(SessionStorage::get(CONFIRMATION_KEY).ok())
    }

    fn clear(&self) {
        SessionStorage::delete(CONFIRMATION_KEY);
    }
}
