use std::time::Duration;

use tabled::Tabled;

use crate::language::term::Term;
use crate::rewriting::simplify::{SimplifyOutcome, StopReason};

use super::{Formattable, format_duration, format_duration_csv};

fn format_equivalent(equivalent: &bool) -> String {
    let text = if *equivalent { "yes" } else { "NO" };
    text.to_string()
}

/// One simplification, as shown in reports.
#[derive(Clone, Debug, Tabled)]
pub struct SimplificationRow {
    #[tabled(rename = "Original")]
    pub original: Term,
    #[tabled(rename = "Simplified")]
    pub simplified: Term,
    #[tabled(rename = "Start Cost")]
    pub start_cost: usize,
    #[tabled(rename = "Best Cost")]
    pub best_cost: usize,
    #[tabled(rename = "Explored")]
    pub explored: usize,
    #[tabled(rename = "Stop Reason")]
    pub reason: StopReason,
    #[tabled(rename = "Time", display_with = "format_duration")]
    pub time: Duration,
    #[tabled(rename = "Equivalent", display_with = "format_equivalent")]
    pub equivalent: bool,
}

impl From<&SimplifyOutcome> for SimplificationRow {
    fn from(outcome: &SimplifyOutcome) -> Self {
        Self {
            original: outcome.original.clone(),
            simplified: outcome.best.clone(),
            start_cost: outcome.start_cost,
            best_cost: outcome.best_cost,
            explored: outcome.explored,
            reason: outcome.reason,
            time: outcome.duration,
            equivalent: outcome.best.equivalent(&outcome.original),
        }
    }
}

impl Formattable for SimplificationRow {
    fn csv_headers() -> Vec<&'static str> {
        vec![
            "Original",
            "Simplified",
            "Start Cost",
            "Best Cost",
            "Explored",
            "Stop Reason",
            "Time (ns)",
            "Equivalent",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.original.to_string(),
            self.simplified.to_string(),
            self.start_cost.to_string(),
            self.best_cost.to_string(),
            self.explored.to_string(),
            self.reason.to_string(),
            format_duration_csv(&self.time),
            self.equivalent.to_string(),
        ]
    }
}
