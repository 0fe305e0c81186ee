//! Runtime configuration injected by the host via `/config.js`.

use glframe_embed::{EmbedConfig, CONFIG_GLOBAL, CONFIG_URL_KEY};
use web_sys::Window;

/// Read the config global the host wrote into the page.
///
/// A missing global, a `null` field, or a non-string value all degrade to an
/// unconfigured [`EmbedConfig`]; the viewer then shows its fallback instead
/// of failing the page.
pub fn read_embed_config(window: &Window) -> EmbedConfig {
    match read_url(window) {
        Some(url) => EmbedConfig::with_url(url),
        None => {
            web_sys::console::warn_1(
                &format!("{CONFIG_GLOBAL}.{CONFIG_URL_KEY} not set, nothing to embed").into(),
            );
            EmbedConfig::default()
        }
    }
}

fn read_url(window: &Window) -> Option<String> {
    let config = js_sys::Reflect::get(window, &CONFIG_GLOBAL.into()).ok()?;
    if config.is_undefined() {
        return None;
    }
    js_sys::Reflect::get(&config, &CONFIG_URL_KEY.into())
        .ok()?
        .as_string()
}
