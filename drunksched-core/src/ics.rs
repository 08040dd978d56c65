//! ICS export.
//!
//! A confirmed event becomes one all-day VEVENT on its final date. An event
//! that is still negotiating becomes one tentative VEVENT per best date, so
//! a calendar app can hold the likely days.

use chrono::{Duration, NaiveDate};
use icalendar::{Calendar, Component, Property, ValueType};

use crate::error::{SchedError, SchedResult};
use crate::event::Event;

pub fn generate_ics(event: &Event) -> SchedResult<String> {
    let mut cal = Calendar::new();

    match event.final_date {
        Some(date) => {
            cal.push(vevent(event, date, format!("{}@drunksched", event.id), false));
        }
        None => {
            let best = event.scoreboard().best;
            if best.is_empty() {
                return Err(SchedError::IcsGenerate(format!(
                    "event {} has no dates to export",
                    event.id
                )));
            }
            for date in best {
                let uid = format!("{}-{}@drunksched", event.id, date.format("%Y%m%d"));
                cal.push(vevent(event, date, uid, true));
            }
        }
    }

    let cal = cal.done();
    Ok(strip_ics_bloat(&cal.to_string()))
}

fn vevent(event: &Event, date: NaiveDate, uid: String, tentative: bool) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&uid);
    ics_event.summary(&event.event_name);

    // Creation time keeps the output stable across exports
    let dtstamp = event.created_at.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    add_date_property(&mut ics_event, "DTSTART", date);
    add_date_property(&mut ics_event, "DTEND", date + Duration::days(1));

    if let Some(ref desc) = event.description {
        ics_event.description(desc);
    }

    if tentative {
        ics_event.add_property("STATUS", "TENTATIVE");
    }

    ics_event.done()
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Replace the icalendar crate's PRODID and drop the default CALSCALE.
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:DRUNKSCHED\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
