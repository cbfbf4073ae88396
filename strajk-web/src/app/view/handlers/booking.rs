use crate::api;
use crate::app::phase::Phase;
use crate::app::state::{AppState, FormError};
use strajk_core::validate;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn build_text_change(handle: &UseStateHandle<AttrValue>) -> Callback<String> {
    let handle = handle.clone();
    Callback::from(move |value: String| handle.set(AttrValue::from(value)))
}

pub fn build_shoe_change(state: &AppState) -> Callback<(usize, String)> {
    let shoes = state.shoes.clone();
    Callback::from(move |(index, size): (usize, String)| {
        let mut next = (*shoes).clone();
        if let Some(slot) = next.get_mut(index) {
            *slot = size;
            shoes.set(next);
        }
    })
}

pub fn build_add_shoe(state: &AppState) -> Callback<()> {
    let shoes = state.shoes.clone();
    Callback::from(move |()| {
        let mut next = (*shoes).clone();
        next.push(String::new());
        shoes.set(next);
    })
}

pub fn build_remove_shoe(state: &AppState) -> Callback<usize> {
    let shoes = state.shoes.clone();
    Callback::from(move |index: usize| {
        if index < shoes.len() {
            let mut next = (*shoes).clone();
            next.remove(index);
            shoes.set(next);
        }
    })
}

/// Validate, post and persist. Re-entrant submits are swallowed while a
/// request is pending; a validation failure never reaches the network.
pub fn build_submit(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        if *state.in_flight {
            return;
        }
        let draft = state.draft();
        if let Err(violation) = validate(&draft) {
            state.error.set(Some(FormError::Invalid(violation)));
            return;
        }
        state.error.set(None);
        state.in_flight.set(true);
        let state = state.clone();
        spawn_local(async move {
            match api::submit_booking(&draft).await {
                Ok(confirmation) => {
                    if let Err(err) = state.session.save(&confirmation) {
                        log::error!("failed to persist the confirmation: {err}");
                    }
                    state.confirmation.set(Some(confirmation));
                    state.phase.set(Phase::Confirmation);
                }
                Err(err) => {
                    log::error!("booking submission failed: {err}");
                    state.error.set(Some(FormError::Network));
                }
            }
            state.in_flight.set(false);
        });
    })
}
