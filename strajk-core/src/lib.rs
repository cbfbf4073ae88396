//! Strajk booking domain
//!
//! Platform-agnostic booking logic for the Strajk bowling web client.
//! This crate provides the draft model, validation rules, pricing and the
//! session-scoped confirmation store without UI or browser dependencies.

pub mod booking;
pub mod confirmation;
pub mod price;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use booking::BookingDraft;
pub use confirmation::Confirmation;
pub use price::{LANE_RATE_SEK, PLAYER_RATE_SEK, quote};
pub use rules::{MAX_PLAYERS_PER_LANE, Rule, RULES, ValidBooking, Violation, validate};
pub use session::{ConfirmationStore, MemoryStore, SessionContext, StoreError};
