//! Terminal rendering for drunksched types.
//!
//! Extension traits that add colored output to drunksched-core types using
//! owo_colors.

use chrono::NaiveDate;
use drunksched_core::categorize::Bucket;
use drunksched_core::{Event, Mark};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Mark {
    fn render(&self) -> String {
        let symbol = self.symbol();
        match self {
            Mark::Yes => symbol.green().to_string(),
            Mark::Maybe => symbol.yellow().to_string(),
            Mark::No => symbol.red().to_string(),
            Mark::Unrecognized => symbol.dimmed().to_string(),
        }
    }
}

impl Render for Bucket {
    fn render(&self) -> String {
        match self {
            Bucket::Imminent => "🍺 Today & tomorrow".bold().to_string(),
            Bucket::Upcoming => "📅 Confirmed".bold().to_string(),
            Bucket::Negotiating => "🗳  Still negotiating".bold().to_string(),
        }
    }
}

/// One list line: short id, name, status and welcome flag.
pub fn event_line(event: &Event, today: NaiveDate) -> String {
    let status = match event.final_date {
        Some(date) => format!("confirmed {}", date_label(date, today))
            .green()
            .to_string(),
        None => "negotiating".yellow().to_string(),
    };

    let mut line = format!(
        "{} {} {}",
        short_id(&event.id).dimmed(),
        event.event_name,
        status
    );
    if event.last_minute_welcome {
        line.push_str(&format!(" {}", "(late arrivals welcome)".dimmed()));
    }
    line
}

/// "Today", "Tomorrow" or e.g. "Wed May 1"
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
