//! URL joining helpers.
//!
//! Every URL that leaves the crate (canonical, Open Graph, sitemap, JSON-LD)
//! is made absolute against `[base].url` through these functions.

use regex::Regex;
use std::sync::LazyLock;

/// `scheme:` prefix per RFC 3986, e.g. `https:`, `mailto:`, `data:`.
static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());

/// Returns true if `url` already carries a scheme or is protocol-relative.
pub fn has_scheme(url: &str) -> bool {
    url.starts_with("//") || SCHEME.is_match(url)
}

/// Resolve `path` against `base`.
///
/// | base | path | result |
/// |------|------|--------|
/// | `https://a.com/` | `/img/x.png` | `https://a.com/img/x.png` |
/// | `https://a.com` | `img/x.png` | `https://a.com/img/x.png` |
/// | `https://a.com` | `https://cdn.b.com/x.png` | unchanged |
pub fn absolute_url(base: &str, path: &str) -> String {
    if has_scheme(path) {
        return path.to_owned();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{path}")
    }
}

/// Percent-encode a single path segment (slug or product id).
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
