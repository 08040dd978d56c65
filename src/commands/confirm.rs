use anyhow::Result;
use drunksched_core::Event;
use drunksched_core::event::parse_date;
use drunksched_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &dyn EventStore, event: &Event, date: &str) -> Result<()> {
    let date = parse_date(date)?;

    if !event.dates.contains(&date) {
        eprintln!(
            "{} {} was not one of the candidate dates",
            "note:".dimmed(),
            date
        );
    }

    let updated = store.confirm_date(&event.id, date)?;
    println!(
        "{} {} is on {}",
        "Confirmed:".green().bold(),
        updated.event_name,
        date.format("%a %b %-d, %Y")
    );
    Ok(())
}

pub fn undo(store: &dyn EventStore, event: &Event) -> Result<()> {
    let updated = store.unconfirm_date(&event.id)?;
    println!("{} is back to negotiating", updated.event_name.bold());
    Ok(())
}
