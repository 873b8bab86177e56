use wasm_bindgen::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod scroll;
pub mod session;
pub mod transcript;
pub mod types;
pub mod widget;

use components::ChatWidget;

const WIDGET_ROOT_ID: &str = "assistiq-root";
const FOOTER_YEAR_ID: &str = "year";

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("window not available")?;
    let document = window.document().ok_or("document not available")?;

    stamp_footer_year(&document);
    scroll::install_nav_autohide(&window)?;

    let root = document
        .get_element_by_id(WIDGET_ROOT_ID)
        .ok_or("widget root element not found")?;
    yew::Renderer::<ChatWidget>::with_root(root).render();
    Ok(())
}

// Year in footer.
fn stamp_footer_year(document: &web_sys::Document) {
    if let Some(year_el) = document.get_element_by_id(FOOTER_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        year_el.set_text_content(Some(&year.to_string()));
    }
}
