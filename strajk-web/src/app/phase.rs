/// UI phase of the booking flow.
///
/// `Booking` covers both the pristine form and the error-displayed state
/// (the violation lives in app state, not the phase); `Confirmation` is
/// terminal for a submitted draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Booking,
    Confirmation,
}
