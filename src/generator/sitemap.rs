//! Sitemap generation.
//!
//! Lists every known route for search engine indexing: the routes that
//! declare metadata plus every navigation target.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://fynixjs.dev/doc/api</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    meta::MetaRegistry,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::{collections::BTreeSet, fs};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled in config.
///
/// Skipped with a warning when `[base].url` is unset, since sitemap
/// locations must be absolute.
pub fn build_sitemap(config: &SiteConfig, registry: &MetaRegistry, lastmod: &str) -> Result<()> {
    if !config.build.sitemap.enable {
        return Ok(());
    }
    let Some(base_url) = config.base.url.as_deref() else {
        log!("warn"; "sitemap skipped: [base.url] is not set");
        return Ok(());
    };

    let sitemap = Sitemap::new(base_url, &site_routes(config, registry), Some(lastmod));
    sitemap.write(config)
}

/// Every route of the site, ordered and deduplicated.
pub fn site_routes<'a>(config: &'a SiteConfig, registry: &'a MetaRegistry) -> Vec<&'a str> {
    let nav_paths = config
        .nav
        .header
        .iter()
        .chain(config.nav.sections.iter().flat_map(|section| &section.entries))
        .map(|entry| entry.path.as_str());

    registry
        .routes()
        .chain(nav_paths)
        .filter(|route| route.starts_with('/'))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sitemap data structure
struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (YYYY-MM-DD)
    lastmod: Option<String>,
}

impl Sitemap {
    fn new(base_url: &str, routes: &[&str], lastmod: Option<&str>) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let urls = routes
            .iter()
            .map(|route| UrlEntry {
                loc: format!("{base_url}{}", encode_route(route)),
                lastmod: lastmod.map(str::to_owned),
            })
            .collect();

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 96);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = &config.build.sitemap.path;
        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{count} routes -> {}", sitemap_path.display());
        Ok(())
    }
}

/// Percent-encode each path segment, keeping the separators.
fn encode_route(route: &str) -> String {
    route
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
