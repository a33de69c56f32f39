//! `[nav]` section configuration.
//!
//! Static navigation lists: the header links and one or more sidebar
//! sections. Each section may alias its landing entry to the section root.

use super::defaults;
use crate::nav::{AliasRule, NavEntry};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[nav]` section in site.toml.
///
/// # Example
/// ```toml
/// [[nav.header]]
/// to = "/"
/// value = "Home"
///
/// [[nav.sections]]
/// name = "docs"
/// alias = "/doc/gettingstarted"
/// entries = [
///     { to = "/doc/gettingstarted", value = "Quick start" },
///     { to = "/doc/api", value = "API Reference" },
/// ]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavConfig {
    /// Header links; highlighted by exact match only.
    #[serde(default = "defaults::nav::header")]
    #[educe(Default = defaults::nav::header())]
    pub header: Vec<NavEntry>,

    /// Sidebar sections.
    #[serde(default = "defaults::nav::sections")]
    #[educe(Default = defaults::nav::sections())]
    pub sections: Vec<NavSectionConfig>,
}

/// A sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavSectionConfig {
    /// Identifier used on the command line.
    pub name: String,

    /// Heading shown above the entries.
    #[serde(default)]
    pub title: String,

    /// Entry that is also active at the section root.
    #[serde(default)]
    pub alias: Option<String>,

    /// Section root, without trailing slash.
    #[serde(default = "defaults::nav::root")]
    pub root: String,

    pub entries: Vec<NavEntry>,
}

impl NavSectionConfig {
    /// Alias rule derived from `alias` and `root`.
    pub fn alias_rule(&self) -> Option<AliasRule> {
        self.alias.as_ref().map(|target| AliasRule {
            target: target.clone(),
            root: self.root.trim_end_matches('/').to_owned(),
        })
    }
}

impl NavConfig {
    /// Look up a sidebar section by name.
    pub fn section(&self, name: &str) -> Option<&NavSectionConfig> {
        self.sections.iter().find(|section| section.name == name)
    }
}
