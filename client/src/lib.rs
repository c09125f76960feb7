use leptos::*;
use step_counter::{thresholds_from_json, App, StyleThresholds, CONFIG_ELEMENT_ID};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let thresholds = embedded_thresholds();
    log::debug!("Hydrating counter with {:?}", thresholds);

    mount_to_body(move |cx| {
        view! { cx, <App thresholds=thresholds /> }
    });
}

/// Reads the thresholds the worker rendered with, so hydration classifies the same way.
fn embedded_thresholds() -> StyleThresholds {
    let json = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match json.as_deref().map(thresholds_from_json) {
        Some(Ok(thresholds)) => thresholds,
        Some(Err(err)) => {
            log::warn!("{err}, falling back to default thresholds");
            StyleThresholds::default()
        }
        None => {
            log::warn!("No #{CONFIG_ELEMENT_ID} element, falling back to default thresholds");
            StyleThresholds::default()
        }
    }
}
