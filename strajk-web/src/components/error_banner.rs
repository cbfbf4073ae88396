use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
}

/// Single validation/network message, announced to assistive tech.
#[function_component(ErrorBanner)]
pub fn error_banner(p: &Props) -> Html {
    html! {
        <p class="error-banner" role="alert">{ p.message.clone() }</p>
    }
}
