//! Light/dark appearance for the page shell.
//!
//! The initial theme follows the user agent's `prefers-color-scheme`; the
//! toggle button flips it for the rest of the page load. Nothing persists
//! across loads, and toggling never touches the mounted frame.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The user agent's preferred scheme; light when the query is unsupported.
    pub fn preferred(window: &Window) -> Self {
        let dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the `data-theme` attribute the stylesheet keys off.
    const fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Toggle button glyph: the mode a click switches to.
    const fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "\u{1f319}",
            Self::Dark => "\u{2600}\u{fe0f}",
        }
    }

    const fn toggle_hint(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

fn apply(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.attr());
    }
    if let Some(button) = document.get_element_by_id("theme-toggle") {
        button.set_text_content(Some(theme.toggle_glyph()));
        let _ = button.set_attribute("aria-label", theme.toggle_hint());
        let _ = button.set_attribute("title", theme.toggle_hint());
    }
}

/// Seed the theme from the media query and wire up the toggle button.
pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let mut current = Theme::preferred(window);
    apply(document, current);

    let button = dom::require(document, "theme-toggle")?;
    let doc = document.clone();
    let onclick = Closure::wrap(Box::new(move || {
        current = current.flipped();
        apply(&doc, current);
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();

    Ok(())
}
