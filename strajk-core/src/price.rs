//! Pricing for a lane booking.
//!
//! The remote endpoint computes the same formula server-side; the client
//! quotes it up front so the form can show the total before submitting.

/// Per-player rate in SEK, shoe rental included.
pub const PLAYER_RATE_SEK: u32 = 120;

/// Per-lane rate in SEK.
pub const LANE_RATE_SEK: u32 = 100;

/// Total price in SEK for `people` players on `lanes` lanes.
#[must_use]
pub const fn quote(people: u32, lanes: u32) -> u32 {
    people * PLAYER_RATE_SEK + lanes * LANE_RATE_SEK
}
