//! The event record and its confirmation lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attendance::{Attendance, Response};
use crate::error::{SchedError, SchedResult};
use crate::scoring::{Scoreboard, score_dates};

/// A gathering with candidate dates and the responses collected for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub dates: Vec<NaiveDate>,
    /// None while the date is still being negotiated
    #[serde(default)]
    pub final_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_minute_welcome: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

/// User-editable fields of an event, as submitted on create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub event_name: String,
    pub dates: Vec<NaiveDate>,
    pub last_minute_welcome: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStatus {
    Negotiating,
    Confirmed,
}

impl EventDraft {
    pub fn new(event_name: impl Into<String>, dates: Vec<NaiveDate>) -> Self {
        EventDraft {
            event_name: event_name.into(),
            dates,
            ..Default::default()
        }
    }

    /// Trim text fields, drop duplicate dates and reject drafts that can't
    /// become an event.
    fn validated(self) -> SchedResult<EventDraft> {
        let event_name = self.event_name.trim().to_string();
        if event_name.is_empty() {
            return Err(SchedError::validation("event name is required"));
        }

        let mut dates: Vec<NaiveDate> = Vec::with_capacity(self.dates.len());
        for date in self.dates {
            if !dates.contains(&date) {
                dates.push(date);
            }
        }
        if dates.is_empty() {
            return Err(SchedError::validation(
                "at least one candidate date is required",
            ));
        }

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(EventDraft {
            event_name,
            dates,
            last_minute_welcome: self.last_minute_welcome,
            description,
        })
    }
}

impl Event {
    pub fn new(draft: EventDraft) -> SchedResult<Self> {
        let draft = draft.validated()?;

        Ok(Event {
            id: Uuid::new_v4().to_string(),
            event_name: draft.event_name,
            description: draft.description,
            dates: draft.dates,
            final_date: None,
            last_minute_welcome: draft.last_minute_welcome,
            created_at: Utc::now(),
            responses: Vec::new(),
        })
    }

    pub fn status(&self) -> ConfirmationStatus {
        match self.final_date {
            Some(_) => ConfirmationStatus::Confirmed,
            None => ConfirmationStatus::Negotiating,
        }
    }

    /// Fix the date of the gathering. The date does not have to be one of
    /// the candidates.
    pub fn confirm(&mut self, date: NaiveDate) {
        self.final_date = Some(date);
    }

    pub fn unconfirm(&mut self) {
        self.final_date = None;
    }

    /// Apply an edit. Changing the set of candidate dates resets all
    /// responses since their marks refer to the old dates.
    pub fn update_details(&mut self, draft: EventDraft) -> SchedResult<()> {
        let draft = draft.validated()?;

        if !same_date_set(&self.dates, &draft.dates) {
            self.responses.clear();
        }

        self.event_name = draft.event_name;
        self.dates = draft.dates;
        self.last_minute_welcome = draft.last_minute_welcome;
        self.description = draft.description;
        Ok(())
    }

    pub fn response(&self, name: &str) -> Option<&Response> {
        let name = name.trim();
        self.responses.iter().find(|r| r.name == name)
    }

    /// Insert a response, replacing any earlier one under the same name.
    pub fn upsert_response(&mut self, response: Response) {
        match self.responses.iter_mut().find(|r| r.name == response.name) {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
    }

    pub fn submit(&mut self, name: &str, attendance: Attendance) -> SchedResult<()> {
        let response = Response::new(name, attendance)?;
        self.upsert_response(response);
        Ok(())
    }

    pub fn remove_response(&mut self, name: &str) -> SchedResult<Response> {
        let name = name.trim();
        let index = self
            .responses
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| SchedError::ResponseNotFound {
                event_id: self.id.clone(),
                name: name.to_string(),
            })?;

        Ok(self.responses.remove(index))
    }

    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.dates.iter().min().copied()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        score_dates(&self.dates, &self.responses)
    }
}

fn same_date_set(a: &[NaiveDate], b: &[NaiveDate]) -> bool {
    a.len() == b.len() && a.iter().all(|d| b.contains(d))
}

/// Parse a date given either as `YYYY-MM-DD` or as an RFC 3339 timestamp.
/// Timestamps are reduced to their UTC calendar date.
pub fn parse_date(s: &str) -> SchedResult<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| {
            SchedError::validation(format!(
                "Invalid date '{s}'. Expected YYYY-MM-DD or an RFC 3339 timestamp"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::Mark;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn make_event() -> Event {
        Event::new(EventDraft::new(
            "Friday drinks",
            vec![date("2024-05-01"), date("2024-05-02")],
        ))
        .unwrap()
    }

    fn attendance(marks: &[(&str, Mark)]) -> Attendance {
        marks.iter().map(|(d, m)| (date(d), *m)).collect()
    }

    #[test]
    fn new_event_starts_negotiating_without_responses() {
        let event = make_event();
        assert_eq!(event.status(), ConfirmationStatus::Negotiating);
        assert!(event.final_date.is_none());
        assert!(event.responses.is_empty());
        assert!(!event.id.is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Event::new(EventDraft::new("  ", vec![date("2024-05-01")])).unwrap_err();
        assert!(matches!(err, SchedError::Validation(_)));
    }

    #[test]
    fn empty_dates_are_rejected() {
        let err = Event::new(EventDraft::new("Drinks", vec![])).unwrap_err();
        assert!(matches!(err, SchedError::Validation(_)));
    }

    #[test]
    fn duplicate_dates_are_dropped_keeping_order() {
        let event = Event::new(EventDraft::new(
            "Drinks",
            vec![date("2024-05-03"), date("2024-05-01"), date("2024-05-03")],
        ))
        .unwrap();
        assert_eq!(event.dates, vec![date("2024-05-03"), date("2024-05-01")]);
    }

    #[test]
    fn blank_description_becomes_none() {
        let mut draft = EventDraft::new("Drinks", vec![date("2024-05-01")]);
        draft.description = Some("   ".into());
        assert_eq!(Event::new(draft).unwrap().description, None);
    }

    #[test]
    fn confirm_and_unconfirm() {
        let mut event = make_event();

        // Off-candidate dates are allowed
        event.confirm(date("2024-06-10"));
        assert_eq!(event.status(), ConfirmationStatus::Confirmed);
        assert_eq!(event.final_date, Some(date("2024-06-10")));

        event.unconfirm();
        assert_eq!(event.status(), ConfirmationStatus::Negotiating);
        assert_eq!(event.final_date, None);
    }

    #[test]
    fn resubmitting_overwrites_instead_of_duplicating() {
        let mut event = make_event();
        event
            .submit("A", attendance(&[("2024-05-01", Mark::Yes)]))
            .unwrap();
        event.submit("B", attendance(&[])).unwrap();
        event
            .submit("A", attendance(&[("2024-05-02", Mark::Maybe)]))
            .unwrap();

        assert_eq!(event.responses.len(), 2);
        let a = event.response("A").unwrap();
        assert_eq!(a.attendance, attendance(&[("2024-05-02", Mark::Maybe)]));
        // Replaced in place
        assert_eq!(event.responses[0].name, "A");
    }

    #[test]
    fn removing_the_sole_response_resets_scores() {
        let mut event = make_event();
        event
            .submit("A", attendance(&[("2024-05-01", Mark::Yes)]))
            .unwrap();

        event.remove_response("A").unwrap();

        assert!(event.responses.is_empty());
        assert!(event.scoreboard().scores.iter().all(|s| s.score == 0));
    }

    #[test]
    fn removing_unknown_response_is_not_found() {
        let mut event = make_event();
        let err = event.remove_response("nobody").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn editing_dates_resets_responses() {
        let mut event = make_event();
        event
            .submit("A", attendance(&[("2024-05-01", Mark::Yes)]))
            .unwrap();

        let draft = EventDraft::new("Friday drinks", vec![date("2024-05-09")]);
        event.update_details(draft).unwrap();

        assert!(event.responses.is_empty());
        assert_eq!(event.dates, vec![date("2024-05-09")]);
    }

    #[test]
    fn editing_name_keeps_responses() {
        let mut event = make_event();
        event
            .submit("A", attendance(&[("2024-05-01", Mark::Yes)]))
            .unwrap();

        // Same set, different order
        let mut draft =
            EventDraft::new("Saturday drinks", vec![date("2024-05-02"), date("2024-05-01")]);
        draft.last_minute_welcome = true;
        event.update_details(draft).unwrap();

        assert_eq!(event.event_name, "Saturday drinks");
        assert!(event.last_minute_welcome);
        assert_eq!(event.responses.len(), 1);
    }

    #[test]
    fn parse_date_accepts_timestamps() {
        assert_eq!(parse_date("2024-05-01").unwrap(), date("2024-05-01"));
        assert_eq!(
            parse_date("2024-05-01T23:30:00-02:00").unwrap(),
            date("2024-05-02")
        );
        assert!(parse_date("May 1st").is_err());
    }

    #[test]
    fn json_uses_camel_case() {
        let mut event = make_event();
        event.confirm(date("2024-05-01"));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["eventName"], "Friday drinks");
        assert_eq!(json["finalDate"], "2024-05-01");
        assert_eq!(json["lastMinuteWelcome"], false);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn draft_with_missing_fields_deserializes_then_fails_validation() {
        let draft: EventDraft = serde_json::from_str(r#"{"dates": ["2024-05-01"]}"#).unwrap();
        assert!(matches!(
            Event::new(draft).unwrap_err(),
            SchedError::Validation(_)
        ));
    }
}
