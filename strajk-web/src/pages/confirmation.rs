use crate::components::button::Button;
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use strajk_core::Confirmation;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationPageProps {
    pub confirmation: Option<Confirmation>,
    pub on_new_booking: Callback<()>,
}

#[function_component(ConfirmationPage)]
pub fn confirmation_page(props: &ConfirmationPageProps) -> Html {
    let new_booking = {
        let cb = props.on_new_booking.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let body = props.confirmation.as_ref().map_or_else(
        || html! { <p class="confirmation-empty">{ t("confirmation.empty") }</p> },
        render_details,
    );

    html! {
        <section class="confirmation panel">
            <h1>{ t("confirmation.heading") }</h1>
            { body }
            <Button label={t("confirmation.new")} onclick={new_booking} />
        </section>
    }
}

fn render_details(confirmation: &Confirmation) -> Html {
    let total = {
        let amount = confirmation.price.to_string();
        let mut args = BTreeMap::new();
        args.insert("amount", amount.as_str());
        tr("confirmation.total", Some(&args))
    };

    html! {
        <>
            <dl class="confirmation-details">
                <dt>{ t("confirmation.booking_number") }</dt>
                <dd>{ confirmation.id.clone() }</dd>
                <dt>{ t("confirmation.when") }</dt>
                <dd>{ confirmation.when.clone() }</dd>
                <dt>{ t("confirmation.time") }</dt>
                <dd>{ confirmation.time.clone() }</dd>
                <dt>{ t("confirmation.people") }</dt>
                <dd>{ confirmation.people.clone() }</dd>
                <dt>{ t("confirmation.lanes") }</dt>
                <dd>{ confirmation.lanes.clone() }</dd>
                <dt>{ t("confirmation.shoes") }</dt>
                <dd>{ confirmation.shoes.join(", ") }</dd>
            </dl>
            <p class="confirmation-total">{ total }</p>
            if confirmation.active {
                <span class="confirmation-active">{ t("confirmation.active") }</span>
            }
        </>
    }
}
