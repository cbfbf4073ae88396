use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

// Swedish is the venue's canonical locale; its strings are the contract.
const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "sv",
        name: "Svenska",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("sv", include_str!("../i18n/sv.json")),
    ("en", include_str!("../i18n/en.json")),
];

const DEFAULT_LANG: &str = "sv";

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations(DEFAULT_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item("strajk.locale").ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(|| build_bundle(DEFAULT_LANG).unwrap_or_else(fallback_bundle))
    });
}

/// Set the active language bundle.
///
/// Updates the DOM lang attribute and persists the choice to localStorage
/// so the next visit starts in the same language.
pub fn set_lang(lang: &str) {
    if let Some(bundle) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(bundle));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|win| win.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute("lang", lang);
            }
            if let Some(storage) =
                web_sys::window().and_then(|win| win.local_storage().ok().flatten())
            {
                let _ = storage.set_item("strajk.locale", lang);
            }
        }
    }
}

/// The currently active language code.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let placeholder = format!("{{{k}}}");
            text = text.replace(&placeholder, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|value| render_value(value, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key).and_then(|value| render_value(value, args))
            })
    })
}

/// Translate a key to the current language; falls back to Swedish, then to
/// the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{var}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swedish_is_the_default_language() {
        assert_eq!(current_lang(), "sv");
    }

    #[test]
    fn validation_messages_carry_the_exact_swedish_text() {
        set_lang("sv");
        assert_eq!(t("booking.error.fields"), "Alla fälten måste vara ifyllda");
        assert_eq!(
            t("booking.error.shoe_count"),
            "Antalet skor måste stämma överens med antal spelare"
        );
        assert_eq!(t("booking.error.shoe_sizes"), "Alla skor måste vara ifyllda");
        assert_eq!(
            t("booking.error.lane_capacity"),
            "Det får max vara 4 spelare per bana"
        );
    }

    #[test]
    fn unknown_keys_fall_back_to_swedish_then_the_key() {
        set_lang("en");
        assert_eq!(t("no.such.key"), "no.such.key");
    }

    #[test]
    fn interpolation_substitutes_named_args() {
        set_lang("sv");
        let mut args = BTreeMap::new();
        args.insert("amount", "340");
        assert_eq!(tr("booking.total", Some(&args)), "Totalt: 340 kr");
    }
}
