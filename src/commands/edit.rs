use anyhow::Result;
use drunksched_core::Event;
use drunksched_core::event::EventDraft;
use drunksched_core::store::EventStore;
use owo_colors::OwoColorize;

use super::parse_dates;

/// Fields given on the command line. Anything left out keeps its value,
/// and an empty description clears it.
pub struct Edit {
    pub name: Option<String>,
    pub dates: Vec<String>,
    pub description: Option<String>,
    pub welcome: Option<bool>,
}

impl Edit {
    fn apply_to(self, event: &Event) -> Result<EventDraft> {
        let dates = if self.dates.is_empty() {
            event.dates.clone()
        } else {
            parse_dates(&self.dates)?
        };

        Ok(EventDraft {
            event_name: self.name.unwrap_or_else(|| event.event_name.clone()),
            dates,
            last_minute_welcome: self.welcome.unwrap_or(event.last_minute_welcome),
            description: match self.description {
                Some(text) if text.trim().is_empty() => None,
                Some(text) => Some(text),
                None => event.description.clone(),
            },
        })
    }
}

pub fn run(store: &dyn EventStore, event: Event, edit: Edit) -> Result<()> {
    let draft = edit.apply_to(&event)?;
    let had_responses = !event.responses.is_empty();

    let updated = store.update(&event.id, draft)?;

    println!("Updated {}", updated.event_name.bold());
    if had_responses && updated.responses.is_empty() {
        println!("{}", "Candidate dates changed, votes were reset".yellow());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drunksched_core::event::parse_date;

    fn event() -> Event {
        let mut draft = EventDraft::new("Drinks", vec![parse_date("2024-05-01").unwrap()]);
        draft.description = Some("Usual place".into());
        Event::new(draft).unwrap()
    }

    #[test]
    fn unspecified_fields_keep_their_values() {
        let edit = Edit {
            name: Some("Beers".into()),
            dates: vec![],
            description: None,
            welcome: None,
        };

        let draft = edit.apply_to(&event()).unwrap();

        assert_eq!(draft.event_name, "Beers");
        assert_eq!(draft.dates, vec![parse_date("2024-05-01").unwrap()]);
        assert_eq!(draft.description.as_deref(), Some("Usual place"));
        assert!(!draft.last_minute_welcome);
    }

    #[test]
    fn empty_description_clears_it() {
        let edit = Edit {
            name: None,
            dates: vec![],
            description: Some(String::new()),
            welcome: None,
        };

        let draft = edit.apply_to(&event()).unwrap();

        assert_eq!(draft.description, None);
        assert_eq!(draft.event_name, "Drinks");
    }

    #[test]
    fn dates_are_replaced_when_given() {
        let edit = Edit {
            name: None,
            dates: vec!["2024-06-01".into(), "2024-06-02".into()],
            description: None,
            welcome: Some(true),
        };

        let draft = edit.apply_to(&event()).unwrap();

        assert_eq!(draft.dates.len(), 2);
        assert!(draft.last_minute_welcome);
    }
}
