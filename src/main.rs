//! fynix-site - FynixJS documentation site tooling.

use anyhow::{Result, bail};
use clap::Parser;
use fynix_site::{
    build::build_site,
    cli::{Cli, Commands},
    config::SiteConfig,
    inspect::{meta_report, nav_report},
    log,
    meta::MetaRegistry,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Nav { location, section } => {
            print!("{}", nav_report(&config, location.as_deref(), section.as_deref())?);
            Ok(())
        }
        Commands::Meta { route, json } => {
            let registry = MetaRegistry::from_config(&config);
            let report = meta_report(&registry, route, &config.base.language, *json)?;
            println!("{report}");
            Ok(())
        }
        Commands::Check => check(&config),
    }
}

/// Report recoverable anomalies; `validate` already rejected fatal ones.
fn check(config: &SiteConfig) -> Result<()> {
    let warnings = config.warnings();
    for warning in &warnings {
        log!("warn"; "{warning}");
    }
    if !config.config_path.exists() {
        log!("check"; "{} not found, using built-in site", config.config_path.display());
    }
    match warnings.len() {
        0 => {
            log!("check"; "ok");
            Ok(())
        }
        n => bail!("{n} warning(s)"),
    }
}
