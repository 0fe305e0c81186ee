//! Validated embed URL and cache-busting frame URL derivation.

use thiserror::Error;
use url::Url;

use crate::config::EmbedConfig;

/// Why a configured URL was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbedError {
    #[error("no embed URL configured")]
    Missing,
    #[error("page URL is not a valid base: {0}")]
    BadPageUrl(url::ParseError),
    #[error("embed URL did not parse: {0}")]
    BadEmbedUrl(url::ParseError),
    #[error("embed URL resolves to the hosting page")]
    SelfEmbed,
}

/// Decides whether the configured URL is safe to load into the frame.
///
/// Pure and stateless: identical inputs always produce identical output.
pub struct EmbedResolver {
    config: EmbedConfig,
}

impl EmbedResolver {
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// Resolve the configured URL against the current page URL.
    ///
    /// Returns the absolute URL string, or `""` when there is nothing safe
    /// to embed: no URL configured, unparseable input, or a self-embed.
    pub fn resolve(&self, page_url: &str) -> String {
        self.check(page_url)
            .map_or_else(|_| String::new(), |url| url.to_string())
    }

    /// Like [`Self::resolve`], but reports why a URL was rejected.
    pub fn check(&self, page_url: &str) -> Result<Url, EmbedError> {
        let configured = self
            .config
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(EmbedError::Missing)?;
        let page = Url::parse(page_url).map_err(EmbedError::BadPageUrl)?;
        let candidate = page.join(configured).map_err(EmbedError::BadEmbedUrl)?;
        if is_self_embed(&candidate, &page) {
            return Err(EmbedError::SelfEmbed);
        }
        Ok(candidate)
    }
}

/// True when the candidate points back at the hosting page: same origin and
/// either the root path or exactly the page's own path. Loading such a URL
/// into the frame would recurse.
pub fn is_self_embed(candidate: &Url, page: &Url) -> bool {
    candidate.origin() == page.origin()
        && (candidate.path() == "/" || candidate.path() == page.path())
}

/// Append the cache-busting `t=<seed>` parameter to a resolved embed URL.
///
/// The seed is captured once per page load, so intermediate caches are
/// bypassed exactly once rather than on every re-render.
pub fn frame_url(resolved: &str, seed: u64) -> String {
    let sep = if resolved.contains('?') { '&' } else { '?' };
    format!("{resolved}{sep}t={seed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://mysite.com/";

    fn resolver(url: Option<&str>) -> EmbedResolver {
        EmbedResolver::new(EmbedConfig {
            url: url.map(ToString::to_string),
        })
    }

    #[test]
    fn test_no_configured_url_resolves_empty() {
        assert_eq!(resolver(None).resolve(PAGE), "");
        assert_eq!(resolver(None).check(PAGE), Err(EmbedError::Missing));
    }

    #[test]
    fn test_empty_configured_url_counts_as_missing() {
        assert_eq!(resolver(Some("")).check(PAGE), Err(EmbedError::Missing));
    }

    #[test]
    fn test_external_url_passes_through() {
        assert_eq!(
            resolver(Some("https://example.com/game")).resolve(PAGE),
            "https://example.com/game"
        );
    }

    #[test]
    fn test_relative_url_joins_against_page() {
        let r = resolver(Some("builds/demo/index.html"));
        assert_eq!(
            r.resolve("https://mysite.com/"),
            "https://mysite.com/builds/demo/index.html"
        );
    }

    #[test]
    fn test_root_path_self_embed_rejected() {
        assert_eq!(resolver(Some("/")).resolve(PAGE), "");
        assert_eq!(resolver(Some("/")).check(PAGE), Err(EmbedError::SelfEmbed));
    }

    #[test]
    fn test_exact_page_path_self_embed_rejected() {
        let r = resolver(Some("https://mysite.com/page"));
        assert_eq!(r.resolve("https://mysite.com/page"), "");
    }

    #[test]
    fn test_fragment_does_not_defeat_self_check() {
        let r = resolver(Some("https://mysite.com/page#start"));
        assert_eq!(r.resolve("https://mysite.com/page"), "");
    }

    #[test]
    fn test_same_origin_other_path_allowed() {
        let r = resolver(Some("https://mysite.com/builds/demo"));
        assert_eq!(
            r.resolve("https://mysite.com/page"),
            "https://mysite.com/builds/demo"
        );
    }

    #[test]
    fn test_malformed_embed_url_resolves_empty() {
        let r = resolver(Some("http://[not-a-url"));
        assert_eq!(r.resolve(PAGE), "");
        assert!(matches!(r.check(PAGE), Err(EmbedError::BadEmbedUrl(_))));
    }

    #[test]
    fn test_malformed_page_url_resolves_empty() {
        let r = resolver(Some("builds/demo"));
        assert_eq!(r.resolve("not a base"), "");
        assert!(matches!(r.check("not a base"), Err(EmbedError::BadPageUrl(_))));
    }

    #[test]
    fn test_origin_includes_scheme_and_port() {
        // http vs https on the same host is a different origin
        let r = resolver(Some("http://mysite.com/"));
        assert_eq!(r.resolve("https://mysite.com/"), "http://mysite.com/");

        // so is an explicit non-default port
        let r = resolver(Some("https://mysite.com:8443/"));
        assert_eq!(r.resolve("https://mysite.com/"), "https://mysite.com:8443/");
    }

    #[test]
    fn test_is_self_embed_predicate() {
        let page = Url::parse("https://mysite.com/viewer").unwrap();
        let root = Url::parse("https://mysite.com/").unwrap();
        let same = Url::parse("https://mysite.com/viewer").unwrap();
        let other_path = Url::parse("https://mysite.com/builds/x").unwrap();
        let other_origin = Url::parse("https://example.com/").unwrap();

        assert!(is_self_embed(&root, &page));
        assert!(is_self_embed(&same, &page));
        assert!(!is_self_embed(&other_path, &page));
        assert!(!is_self_embed(&other_origin, &page));
    }

    #[test]
    fn test_frame_url_appends_seed() {
        assert_eq!(
            frame_url("https://example.com/game", 1234),
            "https://example.com/game?t=1234"
        );
        assert_eq!(
            frame_url("https://example.com/game?x=1", 1234),
            "https://example.com/game?x=1&t=1234"
        );
    }

    #[test]
    fn test_resolve_is_pure() {
        let r = resolver(Some("https://example.com/game"));
        assert_eq!(r.resolve(PAGE), r.resolve(PAGE));
    }
}
