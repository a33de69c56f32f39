//! Site build orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── MetaRegistry::from_config()
//!     │
//!     └── rayon::join
//!             ├── build_sitemap()   ──► sitemap.xml
//!             └── build_manifest()  ──► meta.json
//! ```

use crate::{
    config::SiteConfig,
    generator::{manifest::build_manifest, sitemap::build_sitemap},
    log,
    meta::MetaRegistry,
};
use anyhow::{Context, Result};
use std::fs;

/// Generate every build output for the site.
pub fn build_site(config: &SiteConfig) -> Result<MetaRegistry> {
    for warning in config.warnings() {
        log!("warn"; "{warning}");
    }

    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let registry = MetaRegistry::from_config(config);
    log!("meta"; "{} pages declare metadata", registry.len());

    let lastmod = chrono::Local::now().format("%Y-%m-%d").to_string();
    let (sitemap_result, manifest_result) = rayon::join(
        || build_sitemap(config, &registry, &lastmod),
        || build_manifest(config, &registry),
    );
    sitemap_result?;
    manifest_result?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_site_writes_outputs() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.base.url = Some("https://fynixjs.dev".into());
        config.build.output = dir.path().join("public");
        config.build.sitemap.path = config.build.output.join("sitemap.xml");
        config.build.manifest.path = config.build.output.join("meta.json");

        let registry = build_site(&config).unwrap();

        assert_eq!(registry.len(), 3);
        assert!(config.build.sitemap.path.exists());
        assert!(config.build.manifest.path.exists());
    }
}
