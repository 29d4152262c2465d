use std::path::{Path, PathBuf};

use anyhow::Result;
use eventbrief_core::config::EventbriefConfig;
use owo_colors::OwoColorize;

fn resolve(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(EventbriefConfig::config_path()?),
    }
}

pub fn init(explicit: Option<&Path>) -> Result<()> {
    let path = resolve(explicit)?;

    if path.exists() {
        println!("{}", format!("Config already exists at {}", path.display()).dimmed());
        return Ok(());
    }

    EventbriefConfig::create_default_config(&path)?;
    println!("{}", format!("Created {}", path.display()).green());
    Ok(())
}

pub fn path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", resolve(explicit)?.display());
    Ok(())
}

pub fn show(config: &EventbriefConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
