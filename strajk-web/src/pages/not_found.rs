use crate::components::button::Button;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_back: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(p: &Props) -> Html {
    let back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="not-found panel">
            <h1>{ t("notfound.heading") }</h1>
            <Button label={t("notfound.back")} onclick={back} />
        </section>
    }
}
