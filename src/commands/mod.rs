pub mod confirm;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod new;
pub mod show;
pub mod vote;

use anyhow::Result;
use chrono::NaiveDate;
use drunksched_core::event::parse_date;

/// Parse every date argument, failing on the first bad one.
pub fn parse_dates(dates: &[String]) -> Result<Vec<NaiveDate>> {
    Ok(dates
        .iter()
        .map(|d| parse_date(d))
        .collect::<Result<Vec<_>, _>>()?)
}
