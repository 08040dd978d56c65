use std::path::PathBuf;

use anyhow::{Context, Result};
use drunksched_core::Event;
use drunksched_core::ics::generate_ics;

pub fn run(event: &Event, output: Option<PathBuf>) -> Result<()> {
    let ics = generate_ics(event)?;

    match output {
        Some(path) => {
            std::fs::write(&path, ics)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", ics),
    }
    Ok(())
}
