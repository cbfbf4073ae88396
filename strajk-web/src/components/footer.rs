use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer role="contentinfo">
            <small>{ t("app.tagline") }</small>
        </footer>
    }
}
