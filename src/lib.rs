//! Navigation highlighting and page metadata for the FynixJS documentation site.
//!
//! - [`nav`]: which navigation entry is active for a location
//! - [`meta`]: route → SEO metadata registry
//! - [`head`]: applies route metadata to the document head across navigations

pub mod build;
pub mod cli;
pub mod config;
pub mod generator;
pub mod head;
pub mod inspect;
pub mod meta;
pub mod nav;
pub mod utils;
