mod booking;
mod prefs;

use crate::app::state::AppState;
use yew::prelude::*;

pub use booking::{
    build_add_shoe, build_remove_shoe, build_shoe_change, build_submit, build_text_change,
};
pub use prefs::{build_lang_change, build_new_booking};

#[derive(Clone)]
pub struct AppHandlers {
    pub when_change: Callback<String>,
    pub time_change: Callback<String>,
    pub people_change: Callback<String>,
    pub lanes_change: Callback<String>,
    pub shoe_change: Callback<(usize, String)>,
    pub add_shoe: Callback<()>,
    pub remove_shoe: Callback<usize>,
    pub submit: Callback<()>,
    pub new_booking: Callback<()>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            when_change: build_text_change(&state.when),
            time_change: build_text_change(&state.time),
            people_change: build_text_change(&state.people),
            lanes_change: build_text_change(&state.lanes),
            shoe_change: build_shoe_change(state),
            add_shoe: build_add_shoe(state),
            remove_shoe: build_remove_shoe(state),
            submit: build_submit(state),
            new_booking: build_new_booking(state),
            lang_change: build_lang_change(state),
        }
    }
}
