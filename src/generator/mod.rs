//! Build-time outputs derived from the route table.

pub mod manifest;
pub mod sitemap;
