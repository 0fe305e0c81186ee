//! Mounts the embedded build into the page, or reveals the fallback when
//! there is nothing safe to show.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use glframe_embed::{frame_url, EmbedResolver, FRAME_ALLOW};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::config;
use crate::dom;

/// Resolve the configured embed URL against the current page and mount the
/// frame, or the fallback message when resolution rejects.
///
/// The cache-busting seed is captured here, once per page load. Theme toggles
/// and later DOM work never touch the frame again, so the build is fetched
/// fresh exactly once.
pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let resolver = EmbedResolver::new(config::read_embed_config(window));
    let page_url = window.location().href()?;

    match resolver.check(&page_url) {
        Ok(resolved) => {
            let seed = js_sys::Date::now() as u64;
            mount_frame(document, &frame_url(resolved.as_str(), seed))
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("not embedding: {err}").into());
            let fallback = dom::require(document, "viewer-missing")?;
            dom::reveal(&fallback);
            Ok(())
        }
    }
}

/// Build the frame with exactly the capabilities the page grants: the
/// [`FRAME_ALLOW`] permissions policy plus legacy fullscreen, nothing else.
fn mount_frame(document: &Document, src: &str) -> Result<(), JsValue> {
    let slot = dom::require(document, "viewer-slot")?;

    let frame = document.create_element("iframe")?;
    frame.set_attribute("src", src)?;
    frame.set_attribute("title", "WebGL build")?;
    frame.set_attribute("class", "viewer-frame")?;
    frame.set_attribute("allow", FRAME_ALLOW)?;
    frame.set_attribute("allowfullscreen", "")?;

    slot.append_child(&frame)?;
    dom::reveal(&slot);
    Ok(())
}
