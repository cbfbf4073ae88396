use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Labeled form input; emits the raw input value on every keystroke.
#[function_component(TextField)]
pub fn text_field(p: &Props) -> Html {
    let oninput = {
        let cb = p.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let input_type = p.input_type.clone().unwrap_or_else(|| "text".into());
    html! {
        <div class="text-field">
            <label for={p.id.clone()}>{ p.label.clone() }</label>
            <input
                id={p.id.clone()}
                type={input_type}
                value={p.value.clone()}
                oninput={oninput}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn field_links_label_to_input() {
        let props = Props {
            id: AttrValue::from("when"),
            label: AttrValue::from("Datum"),
            value: AttrValue::from("2024-12-12"),
            input_type: Some(AttrValue::from("date")),
            oninput: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TextField>::with_props(props).render());
        assert!(html.contains("for=\"when\""));
        assert!(html.contains("id=\"when\""));
        assert!(html.contains("Datum"));
        assert!(html.contains("type=\"date\""));
    }
}
