use crate::app::phase::Phase;
use crate::app::state::AppState;
use yew::prelude::*;

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current = state.current_language.clone();
    Callback::from(move |lang: String| {
        crate::i18n::set_lang(&lang);
        current.set(lang);
    })
}

/// Reset the form for another booking and return to the Booking phase.
/// The stored confirmation stays; the session key holds the last booking
/// until the next one overwrites it.
pub fn build_new_booking(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        state.when.set(AttrValue::default());
        state.time.set(AttrValue::default());
        state.people.set(AttrValue::default());
        state.lanes.set(AttrValue::default());
        state.shoes.set(Vec::new());
        state.error.set(None);
        state.phase.set(Phase::Booking);
    })
}
