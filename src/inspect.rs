//! Text reports for the `nav`, `meta` and `check` commands.

use crate::{
    config::SiteConfig,
    head::{HeadManager, render_head},
    meta::MetaRegistry,
    nav::{AliasRule, NavEntry, highlight},
};
use anyhow::{Result, bail};
use std::fmt::Write;

/// Render header and sidebar lists with the active entry marked `*`.
///
/// `location` is `None` outside a browser context; nothing is active then.
pub fn nav_report(
    config: &SiteConfig,
    location: Option<&str>,
    section: Option<&str>,
) -> Result<String> {
    let location = location.unwrap_or_default();
    let mut out = String::new();

    match section {
        Some(name) => {
            let Some(section) = config.nav.section(name) else {
                bail!("unknown nav section `{name}`");
            };
            write_list(
                &mut out,
                &section.name,
                &section.title,
                &section.entries,
                location,
                section.alias_rule().as_ref(),
            );
        }
        None => {
            write_list(&mut out, "header", "", &config.nav.header, location, None);
            for section in &config.nav.sections {
                write_list(
                    &mut out,
                    &section.name,
                    &section.title,
                    &section.entries,
                    location,
                    section.alias_rule().as_ref(),
                );
            }
        }
    }
    Ok(out)
}

fn write_list(
    out: &mut String,
    name: &str,
    title: &str,
    entries: &[NavEntry],
    location: &str,
    alias: Option<&AliasRule>,
) {
    if title.is_empty() {
        writeln!(out, "{name}:").ok();
    } else {
        writeln!(out, "{name}: {title}").ok();
    }
    for item in highlight(entries, location, alias) {
        let marker = if item.active { '*' } else { ' ' };
        let (path, label) = (&item.entry.path, item.entry.label.trim());
        writeln!(out, "  {marker} {path:<24} {label}").ok();
    }
}

/// Metadata applied when `route` mounts, as a head fragment or JSON.
pub fn meta_report(
    registry: &MetaRegistry,
    route: &str,
    language: &str,
    json: bool,
) -> Result<String> {
    let update = HeadManager::new(registry).apply(route);

    if json {
        let value = serde_json::json!({
            "route": route,
            "declared": !update.fallback,
            "language": language,
            "title": update.meta.title,
            "description": update.meta.description,
            "keywords": update.meta.keywords,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = String::new();
    if update.fallback {
        writeln!(out, "<!-- {route} declares no metadata; site default -->").ok();
    }
    out.push_str(&render_head(update.meta, language)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_report_doc_root() {
        let config = SiteConfig::default();
        let report = nav_report(&config, Some("/doc/"), Some("docs")).unwrap();

        let active: Vec<_> = report
            .lines()
            .filter(|line| line.trim_start().starts_with('*'))
            .collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].contains("/doc/gettingstarted"));
        assert!(active[0].ends_with("Quick start"));
    }

    #[test]
    fn test_nav_report_header_exact_only() {
        let config = SiteConfig::default();
        let report = nav_report(&config, Some("/doc"), None).unwrap();

        // header has no alias: only the docs sidebar highlights
        assert_eq!(report.matches("  * ").count(), 1);
        assert!(report.starts_with("header:\n"));
        assert!(report.contains("docs: Get started\n"));
    }

    #[test]
    fn test_nav_report_section_title() {
        let config = SiteConfig::from_str(
            r#"
            [[nav.sections]]
            name = "docs"
            title = "Commencer"
            entries = [{ to = "/doc/api", value = "API" }]

            [[nav.sections]]
            name = "blog"
            entries = [{ to = "/blog", value = "Blog" }]
        "#,
        )
        .unwrap();

        let report = nav_report(&config, Some("/doc/api"), Some("docs")).unwrap();
        assert!(report.starts_with("docs: Commencer\n"));

        let report = nav_report(&config, None, Some("blog")).unwrap();
        assert!(report.starts_with("blog:\n"));
    }

    #[test]
    fn test_nav_report_without_location() {
        let config = SiteConfig::default();
        let report = nav_report(&config, None, None).unwrap();
        assert!(!report.contains("  * "));
    }

    #[test]
    fn test_nav_report_unknown_section() {
        let config = SiteConfig::default();
        assert!(nav_report(&config, Some("/doc"), Some("blog")).is_err());
    }

    #[test]
    fn test_meta_report_declared() {
        let config = SiteConfig::default();
        let registry = MetaRegistry::from_config(&config);
        let report = meta_report(&registry, "/doc/gettingstarted", "", false).unwrap();

        assert!(report.starts_with("<title>Quick Start - FynixJS</title>"));
        assert!(report.contains("Fynix, Quick Start, Tutorial, Components, JSX, State Management"));
    }

    #[test]
    fn test_meta_report_with_language() {
        let config = SiteConfig::default();
        let registry = MetaRegistry::from_config(&config);
        let report = meta_report(&registry, "/doc/api", &config.base.language, false).unwrap();

        assert!(report.starts_with("<meta http-equiv=\"content-language\" content=\"en\"/>\n"));
    }

    #[test]
    fn test_meta_report_fallback_json() {
        let config = SiteConfig::default();
        let registry = MetaRegistry::from_config(&config);
        let report = meta_report(&registry, "/doc/guides", "en", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["declared"], false);
        assert_eq!(value["language"], "en");
        assert_eq!(value["title"], config.base.title.as_str());
    }
}
