use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub shoes: Vec<String>,
    #[prop_or_default]
    pub on_change: Callback<(usize, String)>,
    #[prop_or_default]
    pub on_add: Callback<()>,
    #[prop_or_default]
    pub on_remove: Callback<usize>,
}

/// One size input per player slot, with per-slot remove and an add button.
#[function_component(ShoeList)]
pub fn shoe_list(p: &Props) -> Html {
    let rows = p
        .shoes
        .iter()
        .enumerate()
        .map(|(index, size)| render_row(p, index, size))
        .collect::<Html>();

    let on_add = {
        let cb = p.on_add.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <fieldset class="shoe-list">
            <legend>{ t("booking.shoes.heading") }</legend>
            <ul>{ rows }</ul>
            <button type="button" onclick={on_add}>{ t("booking.shoes.add") }</button>
        </fieldset>
    }
}

fn render_row(p: &Props, index: usize, size: &str) -> Html {
    let field_id = format!("shoe-{index}");
    let number = (index + 1).to_string();
    let label = {
        let mut args = BTreeMap::new();
        args.insert("number", number.as_str());
        tr("booking.shoes.label", Some(&args))
    };
    let oninput = {
        let cb = p.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit((index, input.value()));
            }
        })
    };
    let on_remove = {
        let cb = p.on_remove.clone();
        Callback::from(move |_| cb.emit(index))
    };

    html! {
        <li key={field_id.clone()}>
            <label for={field_id.clone()}>{ label }</label>
            <input id={field_id} value={size.to_string()} oninput={oninput} />
            <button type="button" onclick={on_remove}>{ t("booking.shoes.remove") }</button>
        </li>
    }
}
