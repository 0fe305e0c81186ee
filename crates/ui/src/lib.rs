mod config;
mod dom;
mod theme;
mod viewer;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Theme first so the shell never flashes the wrong scheme
    theme::init(&window, &document)?;
    viewer::mount(&window, &document)?;
    dom::set_footer_year(&document);

    Ok(())
}
