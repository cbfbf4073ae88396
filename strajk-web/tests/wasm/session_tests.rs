use strajk_core::{Confirmation, SessionContext};
use strajk_web::session::BrowserSession;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn confirmation() -> Confirmation {
    Confirmation {
        id: "012345".into(),
        when: "2024-12-12".into(),
        time: "12:00".into(),
        lanes: "1".into(),
        people: "2".into(),
        shoes: vec!["42".into(), "41".into()],
        price: 340,
        active: true,
    }
}

#[wasm_bindgen_test]
fn browser_session_round_trips_the_confirmation() {
    let session = SessionContext::new(BrowserSession);
    session.end();
    assert!(session.load().unwrap().is_none());

    session.save(&confirmation()).unwrap();
    assert_eq!(session.load().unwrap(), Some(confirmation()));

    session.end();
    assert!(session.load().unwrap().is_none());
}

#[wasm_bindgen_test]
fn later_bookings_overwrite_earlier_ones() {
    let session = SessionContext::new(BrowserSession);
    session.save(&confirmation()).unwrap();
    let mut second = confirmation();
    second.id = "678901".into();
    second.price = 580;
    session.save(&second).unwrap();
    assert_eq!(session.load().unwrap().unwrap().id, "678901");
    session.end();
}
