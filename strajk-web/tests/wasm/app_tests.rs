use wasm_bindgen_test::*;
use yew::Renderer;

use strajk_web::app::App;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    strajk_web::i18n::set_lang("sv");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn booking_form_mounts_with_every_field() {
    render_app();
    let doc = web_sys::window().unwrap().document().unwrap();
    for id in ["when", "time", "people", "lanes"] {
        assert!(
            doc.get_element_by_id(id).is_some(),
            "form input {id} must be mounted"
        );
    }
}

#[wasm_bindgen_test]
fn main_landmark_is_present() {
    render_app();
    let doc = web_sys::window().unwrap().document().unwrap();
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
}
