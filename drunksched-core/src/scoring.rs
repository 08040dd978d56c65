//! Weighted date scoring.
//!
//! Each `○` adds 2 points to its date, each `△` adds 1, everything else
//! adds nothing. The best set holds every date that reaches the top score,
//! in candidate order, so a tie lists all tied dates and an event without
//! responses recommends all of its dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attendance::{Mark, Response};

/// Score and mark counts for one candidate date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateScore {
    pub date: NaiveDate,
    pub score: u32,
    pub yes: u32,
    pub maybe: u32,
    pub no: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    /// One entry per candidate date, in candidate order
    pub scores: Vec<DateScore>,
    /// Dates with the highest score, in candidate order
    pub best: Vec<NaiveDate>,
    /// None when there are no candidate dates
    pub max_score: Option<u32>,
}

impl Scoreboard {
    pub fn score_of(&self, date: &NaiveDate) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| &s.date == date)
            .map(|s| s.score)
    }

    pub fn is_best(&self, date: &NaiveDate) -> bool {
        self.best.contains(date)
    }
}

/// Score every candidate date against the responses and pick the best ones.
pub fn score_dates(dates: &[NaiveDate], responses: &[Response]) -> Scoreboard {
    let mut scores: Vec<DateScore> = Vec::with_capacity(dates.len());

    for date in dates {
        if scores.iter().any(|s| &s.date == date) {
            continue;
        }

        let mut entry = DateScore {
            date: *date,
            score: 0,
            yes: 0,
            maybe: 0,
            no: 0,
        };

        for response in responses {
            let Some(mark) = response.mark_for(date) else {
                continue;
            };
            match mark {
                Mark::Yes => entry.yes += 1,
                Mark::Maybe => entry.maybe += 1,
                Mark::No => entry.no += 1,
                Mark::Unrecognized => {}
            }
            entry.score += mark.weight();
        }

        scores.push(entry);
    }

    let mut best = Vec::new();
    let mut max_score: Option<u32> = None;

    for entry in &scores {
        match max_score {
            Some(max) if entry.score < max => {}
            Some(max) if entry.score == max => best.push(entry.date),
            _ => {
                max_score = Some(entry.score);
                best.clear();
                best.push(entry.date);
            }
        }
    }

    Scoreboard {
        scores,
        best,
        max_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::Attendance;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn response(name: &str, marks: &[(&str, Mark)]) -> Response {
        let attendance: Attendance = marks.iter().map(|(d, m)| (date(d), *m)).collect();
        Response::new(name, attendance).unwrap()
    }

    fn two_dates() -> Vec<NaiveDate> {
        vec![date("2024-05-01"), date("2024-05-02")]
    }

    #[test]
    fn weighted_scores_pick_single_best() {
        let responses = vec![
            response("A", &[("2024-05-01", Mark::Yes), ("2024-05-02", Mark::No)]),
            response("B", &[("2024-05-01", Mark::Maybe), ("2024-05-02", Mark::Yes)]),
        ];

        let board = score_dates(&two_dates(), &responses);

        assert_eq!(board.score_of(&date("2024-05-01")), Some(3));
        assert_eq!(board.score_of(&date("2024-05-02")), Some(2));
        assert_eq!(board.best, vec![date("2024-05-01")]);
        assert_eq!(board.max_score, Some(3));
    }

    #[test]
    fn ties_list_every_tied_date() {
        let responses = vec![
            response("A", &[("2024-05-01", Mark::Yes)]),
            response("B", &[("2024-05-02", Mark::Yes)]),
        ];

        let board = score_dates(&two_dates(), &responses);

        assert_eq!(board.score_of(&date("2024-05-01")), Some(2));
        assert_eq!(board.score_of(&date("2024-05-02")), Some(2));
        assert_eq!(board.best, two_dates());
    }

    #[test]
    fn no_responses_means_every_date_ties_at_zero() {
        let board = score_dates(&two_dates(), &[]);

        assert!(board.scores.iter().all(|s| s.score == 0));
        assert_eq!(board.best, two_dates());
        assert_eq!(board.max_score, Some(0));
    }

    #[test]
    fn no_dates_means_no_best() {
        let responses = vec![response("A", &[("2024-05-01", Mark::Yes)])];
        let board = score_dates(&[], &responses);

        assert!(board.scores.is_empty());
        assert!(board.best.is_empty());
        assert_eq!(board.max_score, None);
    }

    #[test]
    fn later_higher_score_replaces_earlier_ties() {
        let dates = vec![date("2024-05-01"), date("2024-05-02"), date("2024-05-03")];
        let responses = vec![
            response("A", &[("2024-05-01", Mark::Maybe), ("2024-05-02", Mark::Maybe)]),
            response("B", &[("2024-05-03", Mark::Yes)]),
        ];

        let board = score_dates(&dates, &responses);
        assert_eq!(board.best, vec![date("2024-05-03")]);
    }

    #[test]
    fn tallies_count_each_mark() {
        let responses = vec![
            response("A", &[("2024-05-01", Mark::Yes)]),
            response("B", &[("2024-05-01", Mark::Maybe)]),
            response("C", &[("2024-05-01", Mark::No)]),
            response("D", &[("2024-05-01", Mark::Unrecognized)]),
            response("E", &[]),
        ];

        let board = score_dates(&[date("2024-05-01")], &responses);
        let entry = &board.scores[0];

        assert_eq!((entry.yes, entry.maybe, entry.no), (1, 1, 1));
        assert_eq!(entry.score, 3);
    }

    #[test]
    fn marks_for_non_candidate_dates_are_ignored() {
        let responses = vec![response("A", &[("2030-01-01", Mark::Yes)])];
        let board = score_dates(&two_dates(), &responses);

        assert_eq!(board.max_score, Some(0));
    }

    #[test]
    fn scores_do_not_depend_on_order() {
        let responses = vec![
            response("A", &[("2024-05-01", Mark::Yes), ("2024-05-02", Mark::Maybe)]),
            response("B", &[("2024-05-02", Mark::Yes)]),
            response("C", &[("2024-05-01", Mark::Maybe)]),
        ];
        let mut reversed_responses = responses.clone();
        reversed_responses.reverse();
        let mut reversed_dates = two_dates();
        reversed_dates.reverse();

        let forward = score_dates(&two_dates(), &responses);
        let backward = score_dates(&reversed_dates, &reversed_responses);

        for date in two_dates() {
            assert_eq!(forward.score_of(&date), backward.score_of(&date));
        }
        assert_eq!(forward.max_score, backward.max_score);
    }

    #[test]
    fn recomputing_gives_the_same_result() {
        let responses = vec![response("A", &[("2024-05-02", Mark::Yes)])];
        assert_eq!(
            score_dates(&two_dates(), &responses),
            score_dates(&two_dates(), &responses)
        );
    }

    #[test]
    fn duplicate_candidate_dates_are_scored_once() {
        let dates = vec![date("2024-05-01"), date("2024-05-01")];
        let board = score_dates(&dates, &[response("A", &[("2024-05-01", Mark::Yes)])]);

        assert_eq!(board.scores.len(), 1);
        assert_eq!(board.best, vec![date("2024-05-01")]);
    }
}
