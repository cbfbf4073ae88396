use serde::{Deserialize, Serialize};

/// Server-issued record of a successfully submitted booking.
///
/// The endpoint echoes the submitted fields back (counts as the strings the
/// form sent them as) and adds the booking number, the computed price and
/// the active flag. Stored JSON-serialized for the lifetime of the browser
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub id: String,
    pub when: String,
    pub time: String,
    pub lanes: String,
    pub people: String,
    pub shoes: Vec<String>,
    pub price: u32,
    pub active: bool,
}
