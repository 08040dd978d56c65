//! Display buckets for event lists.

use std::cmp::Ordering;

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Display buckets, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Confirmed for today or tomorrow
    Imminent,
    /// Confirmed for any other day
    Upcoming,
    /// No final date yet
    Negotiating,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categorized {
    pub imminent: Vec<Event>,
    pub upcoming: Vec<Event>,
    pub negotiating: Vec<Event>,
}

impl Categorized {
    pub fn bucket(&self, bucket: Bucket) -> &[Event] {
        match bucket {
            Bucket::Imminent => &self.imminent,
            Bucket::Upcoming => &self.upcoming,
            Bucket::Negotiating => &self.negotiating,
        }
    }

    pub fn len(&self) -> usize {
        self.imminent.len() + self.upcoming.len() + self.negotiating.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All events, bucket by bucket.
    pub fn into_ordered(self) -> Vec<Event> {
        let mut events = self.imminent;
        events.extend(self.upcoming);
        events.extend(self.negotiating);
        events
    }
}

/// The local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn bucket_for(event: &Event, today: NaiveDate) -> Bucket {
    match event.final_date {
        Some(date) if date == today || date == today + Duration::days(1) => Bucket::Imminent,
        Some(_) => Bucket::Upcoming,
        None => Bucket::Negotiating,
    }
}

/// Whether the event still has something to look forward to: a final date
/// that hasn't passed or, while negotiating, a candidate that hasn't passed.
pub fn is_future_relevant(event: &Event, today: NaiveDate) -> bool {
    match event.final_date {
        Some(date) => date >= today,
        None => event.dates.iter().any(|d| *d >= today),
    }
}

/// Date an event sorts by inside its bucket.
fn sort_date(event: &Event) -> Option<NaiveDate> {
    event.final_date.or_else(|| event.earliest_date())
}

/// Bucket first, then date ascending. Events without any date go last in
/// their bucket. Creation time and id keep the order total.
pub fn compare_for_display(a: &Event, b: &Event, today: NaiveDate) -> Ordering {
    let by_date = match (sort_date(a), sort_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    bucket_for(a, today)
        .cmp(&bucket_for(b, today))
        .then(by_date)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn categorize(events: Vec<Event>, today: NaiveDate) -> Categorized {
    let mut events = events;
    events.sort_by(|a, b| compare_for_display(a, b, today));

    let mut categorized = Categorized::default();
    for event in events {
        match bucket_for(&event, today) {
            Bucket::Imminent => categorized.imminent.push(event),
            Bucket::Upcoming => categorized.upcoming.push(event),
            Bucket::Negotiating => categorized.negotiating.push(event),
        }
    }
    categorized
}

/// Events in the order an event list shows them.
pub fn display_order(events: Vec<Event>, today: NaiveDate) -> Vec<Event> {
    categorize(events, today).into_ordered()
}
