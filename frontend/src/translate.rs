//! One-time bootstrap for the third-party page-translation widget.
//!
//! The external script is injected once per application lifetime; it calls
//! back into a global named in its query string, which constructs the widget
//! inside the navbar's mount node. Re-mounting components never re-registers
//! the script: the global callback doubles as the initialization marker.

use js_sys::{Array, Function, Object, Reflect};
use leptos::logging;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const INIT_MARKER: &str = "googleTranslateElementInit";
const SCRIPT_SRC: &str =
    "//translate.google.com/translate_a/element.js?cb=googleTranslateElementInit";

/// Element id the widget is scoped to; the navbar renders this node.
pub const WIDGET_ELEMENT_ID: &str = "google_translate_element";

const PAGE_LANGUAGE: &str = "en";
const INCLUDED_LANGUAGES: &str =
    "en,hi,kn,ml,mr,pa,ta,te,bn,gu,or,as,ur,ks,sd,sa,ne,si,bo,doi,brx,mni,ksf,kok";

/// Idempotent: the first call registers the init callback and injects the
/// loader script; every later call observes the marker and returns.
pub fn ensure_translate_widget() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let marker = JsValue::from_str(INIT_MARKER);
    if Reflect::has(&window, &marker).unwrap_or(false) {
        return;
    }

    // The callback must exist before the script loads, since the script
    // resolves it by name from its query string.
    let callback = Closure::<dyn Fn()>::new(construct_widget);
    if Reflect::set(&window, &marker, callback.as_ref()).is_err() {
        logging::error!("Translate widget: could not register init callback");
        return;
    }
    // Held for the rest of the page's life.
    callback.forget();

    if let Err(err) = inject_loader_script() {
        logging::error!("Translate widget: script injection failed: {:?}", err);
    }
}

fn inject_loader_script() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("not a script element"))?;
    script.set_src(SCRIPT_SRC);
    script.set_async(true);

    body.append_child(&script)?;
    Ok(())
}

/// Runs once, when the external script has loaded. Equivalent to
/// `new google.translate.TranslateElement(options, WIDGET_ELEMENT_ID)`.
fn construct_widget() {
    if let Err(err) = try_construct_widget() {
        logging::error!("Translate widget: initialization failed: {:?}", err);
    }
}

fn try_construct_widget() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let translate_element =
        Reflect::get(&Reflect::get(&window, &"google".into())?, &"translate".into())
            .and_then(|t| Reflect::get(&t, &"TranslateElement".into()))?;
    let constructor: Function = translate_element.clone().dyn_into()?;

    let options = Object::new();
    Reflect::set(&options, &"pageLanguage".into(), &PAGE_LANGUAGE.into())?;
    Reflect::set(
        &options,
        &"includedLanguages".into(),
        &INCLUDED_LANGUAGES.into(),
    )?;
    if let Ok(layout) = Reflect::get(&translate_element, &"InlineLayout".into())
        .and_then(|l| Reflect::get(&l, &"HORIZONTAL".into()))
    {
        Reflect::set(&options, &"layout".into(), &layout)?;
    }

    let args = Array::of2(&options, &JsValue::from_str(WIDGET_ELEMENT_ID));
    Reflect::construct(&constructor, &args)?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn loader_script_count() -> u32 {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .query_selector_all(r#"script[src*="translate_a/element.js"]"#)
            .unwrap()
            .length()
    }

    #[wasm_bindgen_test]
    fn test_bootstrap_registers_script_exactly_once() {
        ensure_translate_widget();
        ensure_translate_widget();
        assert_eq!(loader_script_count(), 1);

        let window = web_sys::window().unwrap();
        assert!(Reflect::has(&window, &JsValue::from_str(INIT_MARKER)).unwrap());
    }
}
