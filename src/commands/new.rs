use anyhow::Result;
use drunksched_core::event::EventDraft;
use drunksched_core::store::EventStore;
use owo_colors::OwoColorize;

use super::parse_dates;
use crate::render::pluralize;

pub fn run(
    store: &dyn EventStore,
    name: String,
    dates: &[String],
    description: Option<String>,
    welcome: bool,
) -> Result<()> {
    let draft = EventDraft {
        event_name: name,
        dates: parse_dates(dates)?,
        last_minute_welcome: welcome,
        description,
    };

    let event = store.create(draft)?;

    println!(
        "Created {} with {} candidate {}",
        event.event_name.bold(),
        event.dates.len(),
        pluralize("date", event.dates.len())
    );
    println!("  id: {}", event.id);
    Ok(())
}
