//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site-wide head defaults and base URL             |
//! | `[build]`   | Output directory, minify, sitemap and manifest   |
//! | `[nav]`     | Header links and sidebar sections                |
//! | `[pages]`   | Per-route title, description and keywords        |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "FynixJS"
//! url = "https://fynixjs.dev"
//!
//! [build]
//! output = "public"
//!
//! [pages."/doc/api"]
//! title = "Getting Started - FynixJS"
//! description = "Learn how to get started with FynixJS"
//! keywords = "Fynix, Getting Started, Installation"
//! ```
//!
//! Every section is optional; the defaults describe the FynixJS site.

mod base;
mod build;
pub mod defaults;
mod error;
mod nav;

pub use base::BaseConfig;
pub use build::{BuildConfig, ManifestConfig, SitemapConfig};
pub use error::ConfigError;
pub use nav::{NavConfig, NavSectionConfig};

use crate::{
    cli::{Cli, Commands},
    meta::{PageMeta, PageMetaConfig, check_route},
    nav::duplicate_paths,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site-wide defaults
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Navigation lists
    #[serde(default)]
    pub nav: NavConfig,

    /// Per-route metadata
    #[serde(default = "defaults::pages::pages")]
    #[educe(Default = defaults::pages::pages())]
    pub pages: BTreeMap<String, PageMetaConfig>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load config for the given CLI invocation.
    ///
    /// A missing config file is not an error: the built-in site is used.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.config_path = config_path;
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.output, build_args.output.as_ref());
            Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, build_args.sitemap.as_ref());
            if let Some(url) = &build_args.base_url {
                self.base.url = Some(url.clone());
            }
        }

        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve output paths against the root directory
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.build.root = Some(root.clone());
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.sitemap.path = self.build.output.join(&self.build.sitemap.path);
        self.build.manifest.path = self.build.output.join(&self.build.manifest.path);
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Reject configurations that cannot produce correct output.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        let mut names: Vec<&str> = Vec::new();
        for section in &self.nav.sections {
            if names.contains(&section.name.as_str()) {
                bail!(ConfigError::Validation(format!(
                    "[nav.sections] name `{}` is used twice",
                    section.name
                )));
            }
            names.push(&section.name);
        }
        Ok(())
    }

    /// Recoverable anomalies, reported without failing.
    ///
    /// Duplicate navigation paths resolve by first match and incomplete page
    /// metadata falls back to `[base]`, so neither stops the site from
    /// rendering.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for path in duplicate_paths(&self.nav.header) {
            warnings.push(format!("[nav.header] duplicate path `{path}`"));
        }
        for section in &self.nav.sections {
            for path in duplicate_paths(&section.entries) {
                warnings.push(format!(
                    "[nav.sections.{}] duplicate path `{path}`",
                    section.name
                ));
            }
            if let Some(alias) = &section.alias
                && !section.entries.iter().any(|entry| &entry.path == alias)
            {
                warnings.push(format!(
                    "[nav.sections.{}] alias `{alias}` matches no entry",
                    section.name
                ));
            }
        }
        for (route, raw) in &self.pages {
            if let Err(err) = check_route(route).and_then(|()| PageMeta::try_from(raw)) {
                warnings.push(format!("[pages.\"{route}\"] {err}, using site default"));
            }
        }
        if let Err(err) = PageMeta::try_from(&PageMetaConfig::new(
            &self.base.title,
            &self.base.description,
            &self.base.keywords,
        )) {
            warnings.push(format!("[base] {err}"));
        }
        warnings
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::MetaRegistry;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_the_fynix_site() {
        let config = SiteConfig::default();

        assert_eq!(config.pages.len(), 3);
        assert!(config.pages.contains_key("/"));
        assert!(config.pages.contains_key("/doc/gettingstarted"));
        assert!(config.pages.contains_key("/doc/api"));
        assert!(config.validate().is_ok());
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.pages.len(), 3);
        assert_eq!(config.nav.sections.len(), 1);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(SiteConfig::from_str("[base").is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(SiteConfig::from_str("[serve]\nport = 1").is_err());
    }

    #[test]
    fn test_validate_base_url() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            url = "fynixjs.dev"
        "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[base.url]"));
    }

    #[test]
    fn test_validate_duplicate_section_names() {
        let config = SiteConfig::from_str(
            r#"
            [[nav.sections]]
            name = "docs"
            entries = []

            [[nav.sections]]
            name = "docs"
            entries = []
        "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_warnings_do_not_fail_validation() {
        let config = SiteConfig::from_str(
            r#"
            [[nav.sections]]
            name = "docs"
            alias = "/doc/missing"
            entries = [
                { to = "/doc/api", value = "API" },
                { to = "/doc/api", value = "API again" },
            ]

            [pages."/doc/guides"]
            title = "Guides"
        "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("duplicate path `/doc/api`")));
        assert!(warnings.iter().any(|w| w.contains("alias `/doc/missing`")));
        assert!(warnings.iter().any(|w| w.contains("/doc/guides")));
    }

    #[test]
    fn test_warnings_report_relative_page_route() {
        let config = SiteConfig::from_str(
            r#"
            [pages."doc/guides"]
            title = "Guides - FynixJS"
            description = "Guides"
            keywords = "Fynix, Guides"
        "#,
        )
        .unwrap();

        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("doc/guides"));
        assert!(warnings[0].contains("must start with `/`"));
        assert!(MetaRegistry::from_config(&config).get("doc/guides").is_none());
    }

    #[test]
    fn test_load_from_root() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("site.toml"),
            r#"
            [build]
            output = "dist"
        "#,
        )
        .unwrap();

        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "fynix-site",
            "--root",
            root,
            "build",
            "--base-url",
            "https://fynixjs.dev",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        assert!(config.build.output.ends_with("dist"));
        assert!(config.build.output.is_absolute());
        assert_eq!(
            config.build.sitemap.path,
            config.build.output.join("sitemap.xml")
        );
        assert_eq!(config.base.url.as_deref(), Some("https://fynixjs.dev"));
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["fynix-site", "--root", root, "check"]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.pages.len(), 3);
        assert!(config.build.output.ends_with("public"));
    }

    #[test]
    fn test_cli_overrides_build_flags() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "fynix-site",
            "--root",
            root,
            "build",
            "--minify",
            "false",
            "--sitemap",
            "false",
            "--output",
            "out",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        assert!(!config.build.minify);
        assert!(!config.build.sitemap.enable);
        assert!(config.build.output.ends_with("out"));
    }
}
