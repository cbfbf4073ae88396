//! Session restore on app start.
//!
//! A reload inside the Confirmation view must still show the booking, so the
//! stored confirmation is rehydrated from the session store before the first
//! paint; when the store is empty the endpoint is asked once for the last
//! confirmation it issued.

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(state: &AppState) {
    let state = state.clone();
    use_effect_with((), move |()| {
        if state.confirmation.is_some() {
            return;
        }
        match state.session.load() {
            Ok(Some(stored)) => state.confirmation.set(Some(stored)),
            Ok(None) => {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match crate::api::fetch_confirmation().await {
                        Ok(Some(remote)) => {
                            if let Err(err) = state.session.save(&remote) {
                                log::error!("failed to persist fetched confirmation: {err}");
                            }
                            state.confirmation.set(Some(remote));
                        }
                        Ok(None) => {}
                        Err(err) => {
                            log::error!("could not fetch the stored confirmation: {err}");
                        }
                    }
                });
            }
            Err(err) => log::error!("session store read failed: {err}"),
        }
    });
}
