//! Shared embed-resolution logic for glframe
//!
//! Decides whether a configured external URL is safe to load into the page's
//! viewer frame, and derives the final frame address. Pure code with no
//! browser or server dependencies, so the host and the WASM UI agree on the
//! rules.

pub mod config;
pub mod resolver;

pub use config::EmbedConfig;
pub use resolver::{frame_url, is_self_embed, EmbedError, EmbedResolver};

// Re-export the parsed URL type
pub use url::Url;

/// Name of the global the host injects through `/config.js`.
pub const CONFIG_GLOBAL: &str = "GLFRAME_CONFIG";

/// Key of the configured embed URL inside [`CONFIG_GLOBAL`].
pub const CONFIG_URL_KEY: &str = "embedUrl";

/// Permissions policy granted to the embedded frame. Nothing else is allowed
/// across the embedding boundary.
pub const FRAME_ALLOW: &str = "fullscreen; autoplay; xr-spatial-tracking";
