//! Embed configuration shared between host and UI.

use serde::Deserialize;

/// The externally supplied embed target.
///
/// The host reads this from the `[embed]` section of its config file (or the
/// `GLFRAME_EMBED_URL` environment variable) and injects it into the page;
/// the UI reconstructs it from the injected global. `None` means nothing to
/// embed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedConfig {
    /// Address of the WebGL build, absolute or relative to the page.
    pub url: Option<String>,
}

impl EmbedConfig {
    /// Config with a known URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}
