//! Head metadata manifest.
//!
//! A JSON file mapping every route to the metadata the head manager applies
//! on mount, together with the pre-rendered head fragment. Routes that declare
//! nothing carry the site default with `declared: false`.

use crate::{
    config::SiteConfig,
    generator::sitemap::site_routes,
    head::render_head,
    log,
    meta::{MetaRegistry, PageMeta},
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::{collections::BTreeMap, fs};

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    /// `[base].language`, also emitted in every head fragment
    pub language: &'a str,
    /// Site default applied to undeclared routes
    pub fallback: &'a PageMeta,
    pub routes: BTreeMap<&'a str, ManifestEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry<'a> {
    #[serde(flatten)]
    pub meta: &'a PageMeta,
    /// Whether the route declares its own metadata
    pub declared: bool,
    /// Rendered `<head>` fragment
    pub head: String,
}

impl<'a> Manifest<'a> {
    /// Resolve and render every route in parallel.
    pub fn collect(config: &'a SiteConfig, registry: &'a MetaRegistry) -> Result<Self> {
        let routes = site_routes(config, registry)
            .into_par_iter()
            .map(|route| -> Result<(&'a str, ManifestEntry<'a>)> {
                let meta = registry.resolve(route);
                let head = render_head(meta, &config.base.language)
                    .with_context(|| format!("Failed to render head for `{route}`"))?;
                let head = minify(MinifyType::Head(head.as_bytes()), config);
                let head = String::from_utf8_lossy(&head).into_owned();
                Ok((
                    route,
                    ManifestEntry {
                        meta,
                        declared: registry.get(route).is_some(),
                        head,
                    },
                ))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            language: &config.base.language,
            fallback: registry.fallback(),
            routes,
        })
    }
}

/// Write the manifest if enabled in config.
pub fn build_manifest(config: &SiteConfig, registry: &MetaRegistry) -> Result<()> {
    if !config.build.manifest.enable {
        return Ok(());
    }

    let manifest = Manifest::collect(config, registry)?;
    let json = serde_json::to_string_pretty(&manifest)?;
    let path = &config.build.manifest.path;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

    log!("manifest"; "{} routes -> {}", manifest.routes.len(), path.display());
    Ok(())
}
