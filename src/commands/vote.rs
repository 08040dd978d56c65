use anyhow::{Context, Result};
use drunksched_core::event::parse_date;
use drunksched_core::store::EventStore;
use drunksched_core::{Attendance, Event, Mark};
use owo_colors::OwoColorize;

pub fn run(store: &dyn EventStore, event: &Event, name: &str, marks: &[String]) -> Result<()> {
    let attendance = parse_marks(marks)?;

    for date in attendance.keys() {
        if !event.dates.contains(date) {
            eprintln!(
                "{} {} is not a candidate date and won't count",
                "warning:".yellow(),
                date
            );
        }
    }

    let updated = store.submit_response(&event.id, name, attendance)?;
    let best: Vec<String> = updated
        .scoreboard()
        .best
        .iter()
        .map(|d| d.to_string())
        .collect();

    println!("Recorded {} for {}", name.trim().bold(), updated.event_name);
    println!("  best so far: {}", best.join(", "));
    Ok(())
}

pub fn remove(store: &dyn EventStore, event: &Event, name: &str) -> Result<()> {
    store.delete_response(&event.id, name)?;
    println!("Removed {} from {}", name.trim().bold(), event.event_name);
    Ok(())
}

/// Parse `DATE=MARK` arguments. Later pairs for the same date win.
fn parse_marks(pairs: &[String]) -> Result<Attendance> {
    let mut attendance = Attendance::new();

    for pair in pairs {
        let (date, mark) = pair
            .split_once('=')
            .with_context(|| format!("Expected DATE=MARK, got '{}'", pair))?;

        let date = parse_date(date)?;
        let mark: Mark = mark.parse()?;
        attendance.insert(date, mark);
    }

    Ok(attendance)
}
