//! `respath config` – show the effective configuration.

use anyhow::Result;
use respath_core::config::{self, ResolverConfig};
use respath_core::ResourcePathResolver;
use std::path::Path;

pub fn run_config(cfg: &ResolverConfig, explicit: Option<&Path>, path_only: bool) -> Result<()> {
    if path_only {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => config::config_path()?,
        };
        println!("{}", path.display());
        return Ok(());
    }

    print!("{}", cfg.to_toml_string()?);
    // Point out a config that would refuse to resolve, without failing the command.
    if let Err(err) = ResourcePathResolver::new(cfg.clone()) {
        eprintln!("warning: {err}");
    }
    Ok(())
}
