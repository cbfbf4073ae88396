use crate::app::state::FormError;
use crate::components::button::Button;
use crate::components::error_banner::ErrorBanner;
use crate::components::shoe_list::ShoeList;
use crate::components::text_field::TextField;
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BookingPageProps {
    pub when: AttrValue,
    pub time: AttrValue,
    pub people: AttrValue,
    pub lanes: AttrValue,
    pub shoes: Vec<String>,
    pub error: Option<FormError>,
    pub in_flight: bool,
    pub quote: Option<u32>,
    pub on_when_change: Callback<String>,
    pub on_time_change: Callback<String>,
    pub on_people_change: Callback<String>,
    pub on_lanes_change: Callback<String>,
    pub on_shoe_change: Callback<(usize, String)>,
    pub on_add_shoe: Callback<()>,
    pub on_remove_shoe: Callback<usize>,
    pub on_submit: Callback<()>,
}

#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    let submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let submit_label = if props.in_flight {
        t("booking.submitting")
    } else {
        t("booking.submit")
    };

    html! {
        <section class="booking panel">
            <h1>{ t("booking.heading") }</h1>
            <TextField
                id="when"
                label={t("booking.when")}
                input_type="date"
                value={props.when.clone()}
                oninput={props.on_when_change.clone()}
            />
            <TextField
                id="time"
                label={t("booking.time")}
                input_type="time"
                value={props.time.clone()}
                oninput={props.on_time_change.clone()}
            />
            <TextField
                id="people"
                label={t("booking.people")}
                input_type="number"
                value={props.people.clone()}
                oninput={props.on_people_change.clone()}
            />
            <TextField
                id="lanes"
                label={t("booking.lanes")}
                input_type="number"
                value={props.lanes.clone()}
                oninput={props.on_lanes_change.clone()}
            />
            <ShoeList
                shoes={props.shoes.clone()}
                on_change={props.on_shoe_change.clone()}
                on_add={props.on_add_shoe.clone()}
                on_remove={props.on_remove_shoe.clone()}
            />
            if let Some(total) = props.quote {
                <p class="booking-total">{ total_line(total) }</p>
            }
            if let Some(error) = props.error {
                <ErrorBanner message={t(error.message_key())} />
            }
            <Button
                label={submit_label}
                onclick={submit}
                disabled={props.in_flight}
            />
        </section>
    }
}

fn total_line(total: u32) -> String {
    let amount = total.to_string();
    let mut args = BTreeMap::new();
    args.insert("amount", amount.as_str());
    tr("booking.total", Some(&args))
}
