//! Submit-time validation for a booking draft.
//!
//! Rules live in an ordered table; evaluation walks the table and the first
//! failing rule wins. The order is part of the venue's contract with the
//! form, not an accident of code layout.

use crate::booking::BookingDraft;
use crate::price::quote;
use thiserror::Error;

/// Lane capacity. A lane seats at most this many players.
pub const MAX_PLAYERS_PER_LANE: u32 = 4;

/// Why a draft was rejected at submit time.
///
/// `message_key` identifies the localized user-facing text; the `Display`
/// impl is for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("all fields must be filled in")]
    FieldsMissing,
    #[error("shoe count does not match the player count")]
    ShoeCountMismatch,
    #[error("every shoe size must be filled in")]
    ShoesMissing,
    #[error("more than {MAX_PLAYERS_PER_LANE} players per lane")]
    TooManyPerLane,
}

impl Violation {
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::FieldsMissing => "booking.error.fields",
            Self::ShoeCountMismatch => "booking.error.shoe_count",
            Self::ShoesMissing => "booking.error.shoe_sizes",
            Self::TooManyPerLane => "booking.error.lane_capacity",
        }
    }
}

/// One entry of the validation table: a predicate that must hold, and the
/// violation reported when it does not.
pub struct Rule {
    pub violation: Violation,
    pub check: fn(&BookingDraft) -> bool,
}

/// The validation table, in evaluation order.
pub const RULES: [Rule; 4] = [
    Rule {
        violation: Violation::FieldsMissing,
        check: fields_present,
    },
    Rule {
        violation: Violation::ShoeCountMismatch,
        check: shoe_count_matches,
    },
    Rule {
        violation: Violation::ShoesMissing,
        check: shoes_filled,
    },
    Rule {
        violation: Violation::TooManyPerLane,
        check: within_lane_capacity,
    },
];

fn fields_present(draft: &BookingDraft) -> bool {
    !draft.when.trim().is_empty()
        && !draft.time.trim().is_empty()
        && draft.parsed_people().is_some()
        && draft.parsed_lanes().is_some()
}

fn shoe_count_matches(draft: &BookingDraft) -> bool {
    draft
        .parsed_people()
        .is_some_and(|people| draft.shoes.len() as u32 == people)
}

fn shoes_filled(draft: &BookingDraft) -> bool {
    draft.shoes.iter().all(|size| !size.trim().is_empty())
}

fn within_lane_capacity(draft: &BookingDraft) -> bool {
    match (draft.parsed_people(), draft.parsed_lanes()) {
        (Some(people), Some(lanes)) => people <= lanes * MAX_PLAYERS_PER_LANE,
        _ => false,
    }
}

/// A draft that passed every rule, with the counts parsed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidBooking {
    pub people: u32,
    pub lanes: u32,
}

impl ValidBooking {
    /// Price the venue will charge for this booking, in SEK.
    #[must_use]
    pub const fn price(self) -> u32 {
        quote(self.people, self.lanes)
    }
}

/// Check `draft` against the rule table; the first failing rule wins.
///
/// # Errors
/// Returns the violation of the first rule the draft breaks.
pub fn validate(draft: &BookingDraft) -> Result<ValidBooking, Violation> {
    for rule in &RULES {
        if !(rule.check)(draft) {
            return Err(rule.violation);
        }
    }
    // The first rule guarantees both counts parse.
    match (draft.parsed_people(), draft.parsed_lanes()) {
        (Some(people), Some(lanes)) => Ok(ValidBooking { people, lanes }),
        _ => Err(Violation::FieldsMissing),
    }
}
