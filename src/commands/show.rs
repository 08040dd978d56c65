use anyhow::Result;
use drunksched_core::Event;
use drunksched_core::categorize::today;
use owo_colors::OwoColorize;

use crate::render::{Render, date_label, pluralize};

pub fn run(event: &Event, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(event)?);
        return Ok(());
    }

    for line in render_event(event) {
        println!("{}", line);
    }
    Ok(())
}

/// Header, vote table and best dates, one string per line.
fn render_event(event: &Event) -> Vec<String> {
    let today = today();
    let board = event.scoreboard();
    let mut lines = Vec::new();

    lines.push(format!("{} {}", event.event_name.bold(), event.id.dimmed()));
    if let Some(ref description) = event.description {
        lines.push(description.clone());
    }
    if event.last_minute_welcome {
        lines.push("Late arrivals welcome".dimmed().to_string());
    }
    lines.push(String::new());

    let name_width = event
        .responses
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("score".len());

    // One column per candidate date
    let mut header = format!("{:width$}", "", width = name_width);
    for date in &event.dates {
        let label = date.format("%m-%d").to_string();
        header.push_str(&cell(&label, label.clone()));
    }
    lines.push(header.bold().to_string());

    for response in &event.responses {
        let mut row = format!("{:width$}", response.name, width = name_width);
        for date in &event.dates {
            row.push_str(&match response.mark_for(date) {
                Some(mark) => cell(mark.symbol(), mark.render()),
                None => cell("-", "-".dimmed().to_string()),
            });
        }
        lines.push(row);
    }

    let mut totals = format!("{:width$}", "score", width = name_width);
    for entry in &board.scores {
        let score = entry.score.to_string();
        if board.is_best(&entry.date) {
            totals.push_str(&cell(&score, score.green().bold().to_string()));
        } else {
            totals.push_str(&cell(&score, score.clone()));
        }
    }
    lines.push(totals.dimmed().to_string());
    lines.push(String::new());

    match event.final_date {
        Some(date) => lines.push(format!(
            "{} {}",
            "Confirmed:".green().bold(),
            date_label(date, today)
        )),
        None if event.responses.is_empty() => {
            lines.push("No votes yet".dimmed().to_string());
        }
        None => {
            let best: Vec<String> = board.best.iter().map(|d| date_label(*d, today)).collect();
            lines.push(format!(
                "{} {} ({} {})",
                format!("Most likely {}:", pluralize("date", best.len())).bold(),
                best.join(", "),
                event.responses.len(),
                pluralize("vote", event.responses.len())
            ));
        }
    }

    lines
}

const CELL_WIDTH: usize = 5;

/// Right-align `rendered` in a table column, measuring width on the
/// uncolored `plain` text.
fn cell(plain: &str, rendered: String) -> String {
    let padding = CELL_WIDTH.saturating_sub(plain.chars().count());
    format!("  {}{}", " ".repeat(padding), rendered)
}
