//! Link target resolution
//!
//! Classifies a menu/anchor href:
//! 1. `#fragment` → switch sections in place
//! 2. Absolute URL → hand to the system opener
//! 3. Anything else → let the webview navigate normally
//!
//! Only the first case is ever intercepted; the other two must reach the
//! host untouched so multi-page deployments keep working.

use url::Url;

/// What a clicked link should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkResolution {
    /// Activate the section with this id, suppressing real navigation
    Section(String),
    /// Off-site absolute URL, opened outside the shell
    External(String),
    /// Same-site path, navigated by the webview as usual
    PassThrough(String),
}

/// Resolve an href the way the section router sees it
pub fn resolve_href(href: &str) -> LinkResolution {
    let href = href.trim();

    if let Some(fragment) = href.strip_prefix('#') {
        return LinkResolution::Section(fragment.to_string());
    }

    if Url::parse(href).is_ok() {
        return LinkResolution::External(href.to_string());
    }

    LinkResolution::PassThrough(href.to_string())
}
