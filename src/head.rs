//! Document head synchronization.
//!
//! The head manager reads a route's metadata when the page is selected for
//! mount and reports which head fields must be rewritten. It remembers the
//! last applied record so unchanged fields are left alone across navigations.
//!
//! ```text
//! location ──► HeadManager::apply(route)
//!                 │
//!                 ├── MetaRegistry::get(route)  ── None ──► site default
//!                 │
//!                 └── diff against last applied ──► HeadUpdate { changed }
//! ```

use crate::{
    meta::{MetaRegistry, PageMeta},
    utils::xml::{create_writer, into_string, write_empty_elem, write_text_element},
};
use anyhow::Result;
use std::io::Write;

/// A field of the document head owned by page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadField {
    Title,
    Description,
    Keywords,
}

impl HeadField {
    pub const ALL: [HeadField; 3] = [
        HeadField::Title,
        HeadField::Description,
        HeadField::Keywords,
    ];

    /// Value of this field in `meta`.
    pub fn value(self, meta: &PageMeta) -> &str {
        match self {
            HeadField::Title => &meta.title,
            HeadField::Description => &meta.description,
            HeadField::Keywords => &meta.keywords,
        }
    }
}

/// Result of mounting a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadUpdate<'a> {
    /// Metadata now reflected in the head.
    pub meta: &'a PageMeta,
    /// The route declared no metadata and the site default was used.
    pub fallback: bool,
    /// Fields whose value differs from the previously applied record.
    pub changed: Vec<HeadField>,
}

/// Tracks the metadata applied to the document head across navigations.
pub struct HeadManager<'a> {
    registry: &'a MetaRegistry,
    applied: Option<&'a PageMeta>,
}

impl<'a> HeadManager<'a> {
    pub fn new(registry: &'a MetaRegistry) -> Self {
        Self {
            registry,
            applied: None,
        }
    }

    /// Resolve metadata for `route` and record it as applied.
    ///
    /// The first call reports every field as changed.
    pub fn apply(&mut self, route: &str) -> HeadUpdate<'a> {
        let declared = self.registry.get(route);
        let meta = declared.unwrap_or_else(|| self.registry.fallback());

        let changed = HeadField::ALL
            .into_iter()
            .filter(|field| {
                self.applied
                    .is_none_or(|previous| field.value(previous) != field.value(meta))
            })
            .collect();

        self.applied = Some(meta);
        HeadUpdate {
            meta,
            fallback: declared.is_none(),
            changed,
        }
    }

    /// Metadata currently reflected in the head, if any route was applied.
    pub fn current(&self) -> Option<&'a PageMeta> {
        self.applied
    }
}

/// Render the head fragment for `meta`:
/// `<title>`, `<meta name="description">` and `<meta name="keywords">`,
/// preceded by a `content-language` meta when `language` is set.
pub fn render_head(meta: &PageMeta, language: &str) -> Result<String> {
    let mut writer = create_writer(0);

    if !language.is_empty() {
        write_empty_elem(
            &mut writer,
            "meta",
            &[("http-equiv", "content-language"), ("content", language)],
        )?;
        writer.get_mut().write_all(b"\n")?;
    }

    write_text_element(&mut writer, "title", &meta.title)?;
    writer.get_mut().write_all(b"\n")?;
    write_empty_elem(
        &mut writer,
        "meta",
        &[("name", "description"), ("content", &meta.description)],
    )?;
    writer.get_mut().write_all(b"\n")?;
    write_empty_elem(
        &mut writer,
        "meta",
        &[("name", "keywords"), ("content", &meta.keywords)],
    )?;
    writer.get_mut().write_all(b"\n")?;

    into_string(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MetaRegistry {
        let fallback = PageMeta::new("FynixJS", "Site default", "Fynix").unwrap();
        let mut registry = MetaRegistry::new(fallback);
        registry
            .insert(
                "/doc/gettingstarted",
                PageMeta::new(
                    "Quick Start - FynixJS",
                    "Learn Fynix",
                    "Fynix, Quick Start",
                )
                .unwrap(),
            )
            .unwrap();
        registry
            .insert(
                "/doc/api",
                PageMeta::new("API Reference - FynixJS", "Learn Fynix", "Fynix, API")
                    .unwrap(),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_first_apply_changes_everything() {
        let registry = registry();
        let mut head = HeadManager::new(&registry);
        assert!(head.current().is_none());

        let update = head.apply("/doc/gettingstarted");
        assert_eq!(update.meta.title, "Quick Start - FynixJS");
        assert!(!update.fallback);
        assert_eq!(update.changed, HeadField::ALL);
    }

    #[test]
    fn test_navigation_reports_only_changed_fields() {
        let registry = registry();
        let mut head = HeadManager::new(&registry);
        head.apply("/doc/gettingstarted");

        let update = head.apply("/doc/api");
        assert_eq!(update.changed, [HeadField::Title, HeadField::Keywords]);
        assert_eq!(head.current().unwrap().title, "API Reference - FynixJS");
    }

    #[test]
    fn test_same_route_twice_changes_nothing() {
        let registry = registry();
        let mut head = HeadManager::new(&registry);
        head.apply("/doc/api");

        assert!(head.apply("/doc/api").changed.is_empty());
    }

    #[test]
    fn test_undeclared_route_uses_default() {
        let registry = registry();
        let mut head = HeadManager::new(&registry);
        head.apply("/doc/api");

        let update = head.apply("/doc/guides");
        assert!(update.fallback);
        assert_eq!(update.meta.title, "FynixJS");
        assert_eq!(update.changed, HeadField::ALL);
    }

    #[test]
    fn test_render_head() {
        let meta = PageMeta::new("Quick Start - FynixJS", "Learn Fynix", "Fynix, JSX").unwrap();
        let html = render_head(&meta, "").unwrap();

        assert_eq!(
            html,
            "<title>Quick Start - FynixJS</title>\n\
             <meta name=\"description\" content=\"Learn Fynix\"/>\n\
             <meta name=\"keywords\" content=\"Fynix, JSX\"/>\n"
        );
    }

    #[test]
    fn test_render_head_with_language() {
        let meta = PageMeta::new("Commencer - FynixJS", "Apprendre Fynix", "Fynix").unwrap();
        let html = render_head(&meta, "fr").unwrap();

        assert!(html.starts_with("<meta http-equiv=\"content-language\" content=\"fr\"/>\n"));
        assert!(html.contains("<title>Commencer - FynixJS</title>"));
    }

    #[test]
    fn test_render_head_escapes() {
        let meta = PageMeta::new("A & B", "x < y", "a, b").unwrap();
        let html = render_head(&meta, "").unwrap();

        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("content=\"x &lt; y\""));
    }
}
