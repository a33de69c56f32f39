//! `[base]` section configuration.
//!
//! Site-wide head defaults used for pages that declare no metadata.

use super::defaults;
use crate::meta::PageMeta;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in site.toml.
///
/// # Example
/// ```toml
/// [base]
/// title = "FynixJS"
/// description = "A modern JavaScript framework"
/// keywords = "Fynix, JavaScript"
/// url = "https://fynixjs.dev"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Default document title.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Default meta description.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Default comma-separated keywords.
    #[serde(default = "defaults::base::keywords")]
    #[educe(Default = defaults::base::keywords())]
    pub keywords: String,

    /// Base URL for absolute links in the sitemap.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}

impl BaseConfig {
    /// Site default metadata.
    ///
    /// Not validated: an empty `[base]` field is written as-is rather than
    /// failing, since this record is the last fallback.
    pub fn default_meta(&self) -> PageMeta {
        PageMeta {
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
        }
    }
}
