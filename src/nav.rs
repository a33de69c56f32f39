//! Navigation highlighting.
//!
//! Decides which entry of a navigation list is "active" for the current
//! location. The result only drives presentation (the sidebar and header
//! style the active link differently); it never affects navigation itself.
//!
//! # Matching Rules
//!
//! | Entry                  | Active when location equals               |
//! |------------------------|-------------------------------------------|
//! | alias target           | target, section root, section root + `/`  |
//! | every other entry      | its own path, byte for byte               |
//!
//! ```text
//! entries = [/doc/gettingstarted, /doc/api, /doc/guides, /doc/best-practices]
//! alias   = /doc/gettingstarted (root: /doc)
//!
//! "/doc"          → /doc/gettingstarted
//! "/doc/"         → /doc/gettingstarted
//! "/doc/api"      → /doc/api
//! "/doc/api/"     → none
//! "/doc/unknown"  → none
//! ""              → none
//! ```
//!
//! The location is consumed verbatim. Callers outside a browser context pass
//! an empty string, which never activates anything.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Root path of the documentation section.
pub const DOC_ROOT: &str = "/doc";

/// Landing page of the documentation section.
pub const DOC_LANDING: &str = "/doc/gettingstarted";

// ============================================================================
// Types
// ============================================================================

/// A single navigation link.
///
/// Serialized as `{ to, value }`, the shape the site's link lists are
/// authored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    /// Canonical route path.
    #[serde(rename = "to")]
    pub path: String,
    /// Display text.
    #[serde(rename = "value")]
    pub label: String,
}

impl NavEntry {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Alias rule for a section's landing entry.
///
/// The landing page of a section is reachable through three location strings:
/// its own path, the bare section root, and the section root with a trailing
/// slash. All three highlight the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasRule {
    /// Path of the entry that receives the alias.
    pub target: String,
    /// Section root, without trailing slash.
    pub root: String,
}

impl AliasRule {
    /// Alias `target` to the documentation root (`/doc`).
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            root: DOC_ROOT.to_owned(),
        }
    }

    /// Alias rule for the documentation sidebar.
    pub fn docs() -> Self {
        Self::new(DOC_LANDING)
    }

    /// Check whether `location` highlights the alias target.
    pub fn matches(&self, location: &str) -> bool {
        location == self.target
            || location == self.root
            || location
                .strip_suffix('/')
                .is_some_and(|stripped| stripped == self.root)
    }
}

/// An entry paired with its highlight state, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem<'a> {
    pub entry: &'a NavEntry,
    pub active: bool,
}

// ============================================================================
// Public API
// ============================================================================

/// Compute the path of the active entry, if any.
///
/// Pure and idempotent: the result depends only on the arguments. At most one
/// path is returned; when several entries qualify (duplicate paths, a
/// misconfigured alias) the first in list order wins.
pub fn compute_active<'a>(
    entries: &'a [NavEntry],
    location: &str,
    alias: Option<&AliasRule>,
) -> Option<&'a str> {
    if location.is_empty() {
        return None;
    }

    entries
        .iter()
        .find(|entry| is_active(entry, location, alias))
        .map(|entry| entry.path.as_str())
}

/// Pair every entry with its highlight state.
///
/// Exactly the entry returned by [`compute_active`] is flagged; later
/// duplicates of the same path stay inactive.
pub fn highlight<'a>(
    entries: &'a [NavEntry],
    location: &str,
    alias: Option<&AliasRule>,
) -> Vec<NavItem<'a>> {
    let active = compute_active(entries, location, alias)
        .and_then(|path| entries.iter().position(|entry| entry.path == path));

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| NavItem {
            entry,
            active: Some(index) == active,
        })
        .collect()
}

/// Paths that appear more than once in `entries`, in first-seen order.
pub fn duplicate_paths(entries: &[NavEntry]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(entries.len());
    let mut duplicates = Vec::new();

    for entry in entries {
        let path = entry.path.as_str();
        if seen.contains(&path) {
            if !duplicates.contains(&path) {
                duplicates.push(path);
            }
        } else {
            seen.push(path);
        }
    }
    duplicates
}

// ============================================================================
// Helper Functions
// ============================================================================

#[inline]
fn is_active(entry: &NavEntry, location: &str, alias: Option<&AliasRule>) -> bool {
    match alias {
        Some(rule) if entry.path == rule.target => rule.matches(location),
        _ => entry.path == location,
    }
}

// ============================================================================
// Tests
// ============================================================================
