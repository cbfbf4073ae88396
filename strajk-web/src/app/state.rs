use crate::app::phase::Phase;
use crate::session::BrowserSession;
use std::rc::Rc;
use strajk_core::{BookingDraft, Confirmation, SessionContext, Violation, quote};
use yew::prelude::*;

/// What the error banner is currently showing, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    Invalid(Violation),
    Network,
}

impl FormError {
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Invalid(violation) => violation.message_key(),
            Self::Network => "booking.error.network",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub when: UseStateHandle<AttrValue>,
    pub time: UseStateHandle<AttrValue>,
    pub people: UseStateHandle<AttrValue>,
    pub lanes: UseStateHandle<AttrValue>,
    pub shoes: UseStateHandle<Vec<String>>,
    pub error: UseStateHandle<Option<FormError>>,
    pub confirmation: UseStateHandle<Option<Confirmation>>,
    pub in_flight: UseStateHandle<bool>,
    pub session: Rc<SessionContext<BrowserSession>>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let session = use_memo((), |()| SessionContext::new(BrowserSession::default()));
    AppState {
        phase: use_state(|| Phase::Booking),
        when: use_state(AttrValue::default),
        time: use_state(AttrValue::default),
        people: use_state(AttrValue::default),
        lanes: use_state(AttrValue::default),
        shoes: use_state(Vec::new),
        error: use_state(|| None::<FormError>),
        confirmation: use_state(|| None::<Confirmation>),
        in_flight: use_state(|| false),
        session,
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    /// Snapshot of the form as a booking draft.
    #[must_use]
    pub fn draft(&self) -> BookingDraft {
        BookingDraft {
            when: self.when.to_string(),
            time: self.time.to_string(),
            lanes: self.lanes.to_string(),
            people: self.people.to_string(),
            shoes: (*self.shoes).clone(),
        }
    }

    /// Live price preview, once both counts read as numbers.
    #[must_use]
    pub fn quoted_price(&self) -> Option<u32> {
        let draft = self.draft();
        Some(quote(draft.parsed_people()?, draft.parsed_lanes()?))
    }
}
