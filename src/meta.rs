//! Page metadata registry.
//!
//! Every routable page may declare a static [`PageMeta`] record. The registry
//! maps route identifiers to those records and is read synchronously when a
//! page is selected for mount, so the document head is correct before first
//! paint.
//!
//! # Architecture
//!
//! ```text
//! [pages."/doc/api"]  ──► PageMeta::new() ──► MetaRegistry { route → PageMeta }
//!   (site.toml)              (validated)               │
//!                                    ┌─────────────────┼──────────────────┐
//!                                    ▼                 ▼                  ▼
//!                              HeadManager       build_sitemap()   build_manifest()
//!                              (per navigation)  (routes)          (routes + head)
//! ```
//!
//! A route without a record is a valid state: the head manager falls back to
//! the site-wide default built from `[base]`.

use crate::{config::SiteConfig, log};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Reasons a metadata record is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("route `{0}` must start with `/`")]
    InvalidRoute(String),
}

// ============================================================================
// Page Metadata
// ============================================================================

/// SEO metadata for a single page.
///
/// All three fields are non-empty once constructed through [`PageMeta::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageMetaConfig")]
pub struct PageMeta {
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Comma-separated keyword list.
    pub keywords: String,
}

impl PageMeta {
    /// Build a record, rejecting empty (or whitespace-only) fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Result<Self, MetaError> {
        let meta = Self {
            title: title.into(),
            description: description.into(),
            keywords: keywords.into(),
        };
        meta.validate()?;
        Ok(meta)
    }

    fn validate(&self) -> Result<(), MetaError> {
        for (name, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("keywords", &self.keywords),
        ] {
            if value.trim().is_empty() {
                return Err(MetaError::EmptyField(name));
            }
        }
        Ok(())
    }

    /// Keywords split on commas, trimmed, empties dropped.
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .collect()
    }
}

/// Raw `[pages."<route>"]` table; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageMetaConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}

impl PageMetaConfig {
    pub fn new(title: &str, description: &str, keywords: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            description: Some(description.to_owned()),
            keywords: Some(keywords.to_owned()),
        }
    }
}

impl TryFrom<&PageMetaConfig> for PageMeta {
    type Error = MetaError;

    fn try_from(raw: &PageMetaConfig) -> Result<Self, Self::Error> {
        PageMeta::new(
            raw.title.clone().unwrap_or_default(),
            raw.description.clone().unwrap_or_default(),
            raw.keywords.clone().unwrap_or_default(),
        )
    }
}

impl TryFrom<PageMetaConfig> for PageMeta {
    type Error = MetaError;

    fn try_from(raw: PageMetaConfig) -> Result<Self, Self::Error> {
        PageMeta::try_from(&raw)
    }
}

/// Check that `route` is usable as a registry key.
pub fn check_route(route: &str) -> Result<(), MetaError> {
    if route.starts_with('/') {
        Ok(())
    } else {
        Err(MetaError::InvalidRoute(route.to_owned()))
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Route → metadata mapping, ordered by route.
#[derive(Debug, Clone, Serialize)]
pub struct MetaRegistry {
    /// Site-wide default used for routes without a record.
    fallback: PageMeta,
    /// Per-route records.
    pages: BTreeMap<String, PageMeta>,
}

impl MetaRegistry {
    /// Create an empty registry with the given site default.
    pub fn new(fallback: PageMeta) -> Self {
        Self {
            fallback,
            pages: BTreeMap::new(),
        }
    }

    /// Build the registry from `site.toml`.
    ///
    /// Incomplete `[pages]` records are logged and skipped, so their routes
    /// fall back to the site default instead of failing the build.
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut registry = Self::new(config.base.default_meta());

        for (route, raw) in &config.pages {
            let inserted = PageMeta::try_from(raw)
                .and_then(|meta| registry.insert(route.clone(), meta));
            if let Err(err) = inserted {
                log!("meta"; "skipping `{route}`: {err}");
            }
        }
        registry
    }

    /// Register metadata for a route, replacing any previous record.
    pub fn insert(&mut self, route: impl Into<String>, meta: PageMeta) -> Result<(), MetaError> {
        let route = route.into();
        check_route(&route)?;
        meta.validate()?;
        self.pages.insert(route, meta);
        Ok(())
    }

    /// Metadata declared by `route`, or `None` when the page declares none.
    pub fn get(&self, route: &str) -> Option<&PageMeta> {
        self.pages.get(route)
    }

    /// Metadata for `route`, falling back to the site default.
    pub fn resolve(&self, route: &str) -> &PageMeta {
        self.get(route).unwrap_or(&self.fallback)
    }

    /// The site-wide default record.
    pub fn fallback(&self) -> &PageMeta {
        &self.fallback
    }

    /// Registered routes in order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
