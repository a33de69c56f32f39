//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FynixJS documentation site tooling
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the Build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minify generated files
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// enable sitemap generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override base URL for the site.
    ///
    /// Useful when the production URL differs from the one in site.toml.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write sitemap.xml and the head metadata manifest
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Show which navigation entries are active for a location
    Nav {
        /// Current location path; omitted means no location is available
        #[arg(short, long)]
        location: Option<String>,

        /// Only show this sidebar section
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Show the head metadata applied when a route is mounted
    Meta {
        /// Route path, e.g. /doc/api
        route: String,

        /// Print JSON instead of a head fragment
        #[arg(long)]
        json: bool,
    },

    /// Validate site.toml and report recoverable anomalies
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_without_location() {
        let cli = Cli::parse_from(["fynix-site", "nav"]);
        assert!(matches!(
            cli.command,
            Commands::Nav { location: None, section: None }
        ));
    }

    #[test]
    fn test_flag_without_value_means_true() {
        let cli = Cli::parse_from(["fynix-site", "build", "--minify"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.minify, Some(true));
        assert_eq!(build_args.sitemap, None);
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::parse_from(["fynix-site", "check"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
