use std::path::Path;

use anyhow::{Context, Result};
use coursecal_core::ics::read_events;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

pub fn run(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read calendar at {}", path.display()))?;

    let events = read_events(&content)
        .with_context(|| format!("Failed to parse calendar at {}", path.display()))?;

    println!(
        "{} {}",
        path.display(),
        format!("({} {})", events.len(), pluralize("event", events.len())).dimmed()
    );
    for event in &events {
        println!("   {}", event.render());
    }

    Ok(())
}
