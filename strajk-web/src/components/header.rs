use crate::i18n::{locales, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_book: Callback<()>,
    pub on_confirmation: Callback<()>,
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let go_book = {
        let cb = p.on_book.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let go_confirmation = {
        let cb = p.on_confirmation.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let options = locales()
        .iter()
        .map(|meta| html! { <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option> })
        .collect::<Html>();

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("app.title") }</a>
            <div class="header-content">
                <span class="brand">{ t("app.title") }</span>
                <nav aria-label={t("nav.booking")} class="header-nav">
                    <button type="button" onclick={go_book}>{ t("nav.booking") }</button>
                    <button type="button" onclick={go_confirmation}>{ t("nav.confirmation") }</button>
                </nav>
                <nav aria-label={t("nav.language")} class="header-lang">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change}>
                        { options }
                    </select>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn header_lists_every_locale() {
        crate::i18n::set_lang("sv");
        let props = Props {
            on_book: Callback::noop(),
            on_confirmation: Callback::noop(),
            on_lang_change: Callback::noop(),
            current_lang: String::from("sv"),
        };
        let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
        assert!(html.contains("Svenska"));
        assert!(html.contains("English"));
        assert!(html.contains("Boka"));
        assert!(html.contains("Bekräftelse"));
    }
}
