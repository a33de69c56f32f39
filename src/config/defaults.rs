//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization. Without a
//! `site.toml` they describe the FynixJS site as shipped.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Fynix - A Modern JavaScript Framework for Reactive Web Apps".into()
    }

    pub fn description() -> String {
        "Fynix is a modern, lightweight JavaScript framework for building reactive web \
         applications. It combines the simplicity of a virtual DOM with advanced features \
         like fiber architecture, priority-based scheduling, and built-in security mechanisms."
            .into()
    }

    pub fn keywords() -> String {
        "Fynix, JavaScript, Framework, Reactive, Web Apps, Fiber Architecture, \
         State Management, File-Based Routing"
            .into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod manifest {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "meta.json".into()
        }
    }
}

// ============================================================================
// [nav] Section Defaults
// ============================================================================

pub mod nav {
    use crate::config::NavSectionConfig;
    use crate::nav::{DOC_LANDING, DOC_ROOT, NavEntry};

    pub fn header() -> Vec<NavEntry> {
        vec![NavEntry::new("/", "Home"), NavEntry::new(DOC_LANDING, "Docs")]
    }

    pub fn sections() -> Vec<NavSectionConfig> {
        vec![NavSectionConfig {
            name: "docs".into(),
            title: "Get started".into(),
            alias: Some(DOC_LANDING.into()),
            root: DOC_ROOT.into(),
            entries: vec![
                NavEntry::new(DOC_LANDING, "Quick start"),
                NavEntry::new("/doc/api", "API Reference"),
                NavEntry::new("/doc/guides", "Guides"),
                NavEntry::new("/doc/best-practices", "Best Practices"),
            ],
        }]
    }

    pub fn root() -> String {
        DOC_ROOT.into()
    }
}

// ============================================================================
// [pages] Section Defaults
// ============================================================================

pub mod pages {
    use crate::meta::PageMetaConfig;
    use std::collections::BTreeMap;

    pub fn pages() -> BTreeMap<String, PageMetaConfig> {
        BTreeMap::from([
            (
                "/".into(),
                PageMetaConfig::new(
                    &super::base::title(),
                    &super::base::description(),
                    &super::base::keywords(),
                ),
            ),
            (
                "/doc/gettingstarted".into(),
                PageMetaConfig::new(
                    "Quick Start - FynixJS",
                    "Learn the fundamentals of FynixJS in this comprehensive quick start guide",
                    "Fynix, Quick Start, Tutorial, Components, JSX, State Management",
                ),
            ),
            (
                "/doc/api".into(),
                PageMetaConfig::new(
                    "Getting Started - FynixJS",
                    "Learn how to get started with FynixJS",
                    "Fynix, Getting Started, Installation",
                ),
            ),
        ])
    }
}
