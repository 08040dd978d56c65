use anyhow::Result;
use drunksched_core::categorize::{Bucket, categorize, today};
use drunksched_core::store::{EventStore, ListFilter};
use owo_colors::OwoColorize;

use crate::render::{Render, event_line};

pub fn run(store: &dyn EventStore, filter: ListFilter) -> Result<()> {
    let today = today();
    let events = store.list_on(filter, today)?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let categorized = categorize(events, today);
    let mut first = true;

    for bucket in [Bucket::Imminent, Bucket::Upcoming, Bucket::Negotiating] {
        let events = categorized.bucket(bucket);
        if events.is_empty() {
            continue;
        }

        if !first {
            println!();
        }
        first = false;

        println!("{}", bucket.render());
        for event in events {
            println!("  {}", event_line(event, today));
        }
    }

    Ok(())
}
