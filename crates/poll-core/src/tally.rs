//! Results tallying - percentages and leading choice over denormalized
//! vote counters
//!
//! All math happens on counters already loaded from the store; nothing
//! here does I/O.

use crate::entities::Choice;
use crate::value_objects::Snowflake;

/// Per-choice slice of a poll's results
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceTally {
    pub choice_id: Snowflake,
    pub text: String,
    pub votes: i32,
    /// Share of the total, rounded to one decimal place. Exactly 0.0
    /// when the poll has no votes.
    pub percentage: f64,
    /// `percentage` rounded to a whole number, for proportional-width
    /// rendering.
    pub percentage_int: i32,
}

/// Tallied results for one poll
#[derive(Debug, Clone, PartialEq)]
pub struct PollTally {
    pub total_votes: i64,
    pub choices: Vec<ChoiceTally>,
    /// Choice with the highest counter; ties go to the earliest choice.
    /// `None` only when the poll has no choices.
    pub leading_choice_id: Option<Snowflake>,
}

impl PollTally {
    /// Tally the given choices. Choice order is preserved.
    pub fn compute(choices: &[Choice]) -> Self {
        let total = total_votes(choices);

        let tallies = choices
            .iter()
            .map(|choice| {
                let percentage = percentage_of(choice.votes, total);
                ChoiceTally {
                    choice_id: choice.id,
                    text: choice.text.clone(),
                    votes: choice.votes,
                    percentage,
                    percentage_int: percentage.round() as i32,
                }
            })
            .collect();

        let mut leading: Option<&Choice> = None;
        for choice in choices {
            match leading {
                Some(current) if choice.votes <= current.votes => {}
                _ => leading = Some(choice),
            }
        }

        Self {
            total_votes: total,
            choices: tallies,
            leading_choice_id: leading.map(|choice| choice.id),
        }
    }
}

/// Sum of all choice counters for a poll
pub fn total_votes(choices: &[Choice]) -> i64 {
    choices.iter().map(|choice| i64::from(choice.votes)).sum()
}

fn percentage_of(votes: i32, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = (f64::from(votes) / total as f64) * 100.0;
    (raw * 10.0).round() / 10.0
}
