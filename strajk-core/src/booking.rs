use serde::{Deserialize, Serialize};

/// In-progress, unvalidated booking input as entered in the form.
///
/// Scalar fields keep the raw input strings so the draft mirrors the form
/// exactly; numeric interpretation happens at validation time. The serialized
/// shape is the request body the booking endpoint expects, which keys the
/// date field `when`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub when: String,
    pub time: String,
    pub lanes: String,
    pub people: String,
    pub shoes: Vec<String>,
}

impl BookingDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty shoe-size slot for one more player.
    pub fn add_shoe(&mut self) {
        self.shoes.push(String::new());
    }

    /// Remove the shoe-size slot at `index`. Out-of-range indexes are ignored.
    pub fn remove_shoe(&mut self, index: usize) {
        if index < self.shoes.len() {
            self.shoes.remove(index);
        }
    }

    /// Replace the shoe size at `index`. Out-of-range indexes are ignored.
    pub fn set_shoe(&mut self, index: usize, size: impl Into<String>) {
        if let Some(slot) = self.shoes.get_mut(index) {
            *slot = size.into();
        }
    }

    #[must_use]
    pub fn shoe_count(&self) -> usize {
        self.shoes.len()
    }

    /// Player count as entered, if it reads as a positive integer.
    #[must_use]
    pub fn parsed_people(&self) -> Option<u32> {
        parse_count(&self.people)
    }

    /// Lane count as entered, if it reads as a positive integer.
    #[must_use]
    pub fn parsed_lanes(&self) -> Option<u32> {
        parse_count(&self.lanes)
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
