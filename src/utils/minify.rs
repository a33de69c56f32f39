//! Minification for generated head fragments and sitemaps.
//!
//! Output is only minified when `[build].minify` is set.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Content type for minification.
pub enum MinifyType<'a> {
    /// `<head>` fragment (title and meta tags)
    Head(&'a [u8]),
    /// XML document
    Xml(&'a [u8]),
}

/// Minify content based on type and config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    match content {
        MinifyType::Head(head) | MinifyType::Xml(head) if !config.build.minify => {
            Cow::Borrowed(head)
        }
        MinifyType::Head(head) => Cow::Owned(minify_head(head)),
        MinifyType::Xml(xml) => Cow::Owned(minify_xml(xml)),
    }
}

fn minify_head(head: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_comments = false;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(head, &cfg)
}

/// Strip indentation and blank lines.
fn minify_xml(xml: &[u8]) -> Vec<u8> {
    String::from_utf8_lossy(xml)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>()
        .into_bytes()
}
