use std::path::Path;

use anyhow::Result;
use coursecal_core::config::TermConfig;
use owo_colors::OwoColorize;

use super::TermOverrides;

/// Write a config file. Without any term flags a commented template is written.
pub fn run(config_path: Option<&Path>, overrides: TermOverrides, force: bool) -> Result<()> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => TermConfig::config_path()?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}\n\
             Use --force to overwrite it.",
            path.display()
        );
    }

    write_config(&path, overrides)?;

    println!("{}", format!("  Wrote config to {}", path.display()).green());
    Ok(())
}

fn write_config(path: &Path, overrides: TermOverrides) -> Result<()> {
    if overrides.is_empty() {
        TermConfig::create_default_config(path)?;
        return Ok(());
    }

    let mut config = TermConfig::default();
    overrides.apply(&mut config)?;
    // both dates or neither
    if config.term_start.is_some() || config.term_end.is_some() {
        config.term()?;
    }
    config.save(path)?;
    Ok(())
}
