//! Embedded shell assets for single-binary distribution
//!
//! Uses rust-embed to compile the www/ shell (HTML plus the wasm-bindgen
//! bundle) into the binary. In debug mode, files are loaded from disk so the
//! shell can be edited without rebuilding; in release mode they are embedded.

use rust_embed::RustEmbed;

/// Embedded shell assets from the www/ directory
#[derive(RustEmbed)]
#[folder = "../../www/"]
#[include = "index.html"]
#[include = "pkg/*.js"]
#[include = "pkg/*.wasm"]
#[include = "pkg/*.d.ts"]
pub struct ShellAssets;

/// A servable asset with its MIME type.
pub struct Asset {
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

/// Look up an embedded asset; the root path maps to the shell page.
pub fn lookup(path: &str) -> Option<Asset> {
    let path = if path.is_empty() || path == "/" {
        "index.html"
    } else {
        path.trim_start_matches('/')
    };

    ShellAssets::get(path).map(|file| Asset {
        body: file.data.into_owned(),
        content_type: content_type_for(path),
    })
}

/// The shell page itself; `None` only in a broken build.
pub fn index() -> Option<Asset> {
    lookup("index.html")
}

/// MIME type by extension. `.js` is forced to `application/javascript` since
/// module scripts and `WebAssembly.instantiateStreaming` reject anything else.
fn content_type_for(path: &str) -> &'static str {
    if std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("js"))
    {
        return "application/javascript";
    }
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}
