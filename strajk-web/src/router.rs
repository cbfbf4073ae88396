use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Booking,
    #[at("/confirmation")]
    Confirmation,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_phase(phase: &crate::app::Phase) -> Self {
        match phase {
            crate::app::Phase::Booking => Self::Booking,
            crate::app::Phase::Confirmation => Self::Confirmation,
        }
    }

    #[must_use]
    pub const fn to_phase(&self) -> Option<crate::app::Phase> {
        match self {
            Self::Booking => Some(crate::app::Phase::Booking),
            Self::Confirmation => Some(crate::app::Phase::Confirmation),
            Self::NotFound => None, // Preserve current phase on 404 routes.
        }
    }
}
