use futures::executor::block_on;
use strajk_core::{Confirmation, Violation};
use strajk_web::app::state::FormError;
use strajk_web::pages::{
    booking::{BookingPage, BookingPageProps},
    confirmation::{ConfirmationPage, ConfirmationPageProps},
    not_found::{NotFoundPage, Props as NotFoundProps},
};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn booking_props() -> BookingPageProps {
    BookingPageProps {
        when: AttrValue::from("2024-12-12"),
        time: AttrValue::from("12:00"),
        people: AttrValue::from("2"),
        lanes: AttrValue::from("1"),
        shoes: vec!["42".into(), "41".into()],
        error: None,
        in_flight: false,
        quote: Some(340),
        on_when_change: Callback::noop(),
        on_time_change: Callback::noop(),
        on_people_change: Callback::noop(),
        on_lanes_change: Callback::noop(),
        on_shoe_change: Callback::noop(),
        on_add_shoe: Callback::noop(),
        on_remove_shoe: Callback::noop(),
        on_submit: Callback::noop(),
    }
}

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

#[test]
fn booking_page_renders_every_form_field() {
    strajk_web::i18n::set_lang("sv");
    let html = block_on(LocalServerRenderer::<BookingPage>::with_props(booking_props()).render());
    assert!(html.contains("Boka bana"));
    assert!(html.contains("Datum"));
    assert!(html.contains("Tid"));
    assert!(html.contains("Antal spelare"));
    assert!(html.contains("Antal banor"));
    assert!(html.contains("Skostorlekar"));
    assert!(html.contains("shoe-0"));
    assert!(html.contains("shoe-1"));
    assert!(html.contains("Slå till!"));
}

#[test]
fn booking_page_shows_the_live_quote() {
    strajk_web::i18n::set_lang("sv");
    let html = block_on(LocalServerRenderer::<BookingPage>::with_props(booking_props()).render());
    assert!(html.contains("Totalt: 340 kr"));
}

#[test]
fn booking_page_shows_the_exact_violation_text() {
    strajk_web::i18n::set_lang("sv");
    let cases = [
        (Violation::FieldsMissing, "Alla fälten måste vara ifyllda"),
        (
            Violation::ShoeCountMismatch,
            "Antalet skor måste stämma överens med antal spelare",
        ),
        (Violation::ShoesMissing, "Alla skor måste vara ifyllda"),
        (
            Violation::TooManyPerLane,
            "Det får max vara 4 spelare per bana",
        ),
    ];
    for (violation, message) in cases {
        let props = BookingPageProps {
            error: Some(FormError::Invalid(violation)),
            ..booking_props()
        };
        let html = block_on(LocalServerRenderer::<BookingPage>::with_props(props).render());
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains(message), "missing message for {violation:?}");
    }
}

#[test]
fn booking_page_shows_a_network_error() {
    strajk_web::i18n::set_lang("sv");
    let props = BookingPageProps {
        error: Some(FormError::Network),
        ..booking_props()
    };
    let html = block_on(LocalServerRenderer::<BookingPage>::with_props(props).render());
    assert!(html.contains("Bokningen kunde inte skickas. Försök igen."));
}

#[test]
fn booking_page_disables_submit_while_in_flight() {
    strajk_web::i18n::set_lang("sv");
    let props = BookingPageProps {
        in_flight: true,
        ..booking_props()
    };
    let html = block_on(LocalServerRenderer::<BookingPage>::with_props(props).render());
    assert!(html.contains("disabled"));
    assert!(html.contains("Skickar bokningen..."));
}

#[test]
fn confirmation_page_renders_the_stored_booking() {
    strajk_web::i18n::set_lang("sv");
    let props = ConfirmationPageProps {
        confirmation: Some(confirmation()),
        on_new_booking: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmationPage>::with_props(props).render());
    assert!(html.contains("Bekräftelse"));
    assert!(html.contains("012345"));
    assert!(html.contains("2024-12-12"));
    assert!(html.contains("42, 41"));
    assert!(html.contains("Totalt: 340 kr"));
    assert!(html.contains("Aktiv"));
}

#[test]
fn confirmation_page_has_an_empty_state() {
    strajk_web::i18n::set_lang("sv");
    let props = ConfirmationPageProps {
        confirmation: None,
        on_new_booking: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmationPage>::with_props(props).render());
    assert!(html.contains("Ingen bokning hittades"));
    assert!(html.contains("Ny bokning"));
}

#[test]
fn not_found_page_offers_a_way_back() {
    strajk_web::i18n::set_lang("sv");
    let props = NotFoundProps {
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFoundPage>::with_props(props).render());
    assert!(html.contains("Sidan finns inte"));
    assert!(html.contains("Till bokningen"));
}

#[test]
fn english_locale_translates_the_form() {
    strajk_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<BookingPage>::with_props(booking_props()).render());
    assert!(html.contains("Book a lane"));
    assert!(html.contains("Number of players"));
}
