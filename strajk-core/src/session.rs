//! Session-scoped confirmation storage.
//!
//! The confirmation outlives the draft but not the browser session. Rather
//! than reaching for ambient storage, both the submission and the retrieval
//! paths receive an explicit [`SessionContext`] built once at session start;
//! the backing store is a trait so native code and tests run against an
//! in-memory implementation.

use crate::confirmation::Confirmation;
use std::cell::RefCell;
use thiserror::Error;

/// The backing store failed; carries the backend's own message.
#[derive(Debug, Error)]
#[error("session store unavailable: {0}")]
pub struct StoreError(pub String);

/// Last-writer-wins storage for the single session confirmation.
pub trait ConfirmationStore {
    /// # Errors
    /// Returns an error when the backing store rejects the write.
    fn save(&self, confirmation: &Confirmation) -> Result<(), StoreError>;

    /// The stored confirmation, or `None` when nothing has been stored yet.
    ///
    /// # Errors
    /// Returns an error when the backing store cannot be read.
    fn load(&self) -> Result<Option<Confirmation>, StoreError>;

    fn clear(&self);
}

/// In-process store for native code and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<Confirmation>>,
}

impl ConfirmationStore for MemoryStore {
    fn save(&self, confirmation: &Confirmation) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(confirmation.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Confirmation>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Handle to the confirmation store for one browser session.
///
/// Created at session start and passed into the operations that need it;
/// `end` clears the store when the logical session is over.
pub struct SessionContext<S: ConfirmationStore> {
    store: S,
}

impl<S: ConfirmationStore> SessionContext<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// # Errors
    /// Propagates the store's write error.
    pub fn save(&self, confirmation: &Confirmation) -> Result<(), StoreError> {
        self.store.save(confirmation)
    }

    /// # Errors
    /// Propagates the store's read error.
    pub fn load(&self) -> Result<Option<Confirmation>, StoreError> {
        self.store.load()
    }

    pub fn end(&self) {
        self.store.clear();
    }
}
