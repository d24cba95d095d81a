use serde::Serialize;
use std::fmt;

use crate::error::ScoreError;
use crate::results::TestResults;
use crate::rubric::Rubric;

/// Default width of the report's horizontal rules.
pub const DEFAULT_RULE_WIDTH: usize = 79;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemScore {
    pub name: String,
    pub possible_points: u32,
    pub passed: bool,
}

impl ItemScore {
    pub fn earned_points(&self) -> u32 {
        if self.passed { self.possible_points } else { 0 }
    }
}

/// Per-item outcome, in rubric order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricScore {
    items: Vec<ItemScore>,
}

/// Scores every rubric item against its suite of the same name.
///
/// Items earn all their points when the suite has no failures and no errors,
/// otherwise none. Fails without a partial score if any suite is missing.
pub fn evaluate(rubric: &Rubric, results: &TestResults) -> Result<RubricScore, ScoreError> {
    let items = rubric
        .items()
        .iter()
        .map(|item| -> Result<ItemScore, ScoreError> {
            let suite = results
                .get(&item.name)
                .ok_or_else(|| ScoreError::MissingSuite(item.name.clone()))?;
            Ok(ItemScore {
                name: item.name.clone(),
                possible_points: item.points,
                passed: suite.passed(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RubricScore { items })
}

impl RubricScore {
    pub fn items(&self) -> &[ItemScore] {
        &self.items
    }

    /// Totals are widened so that no valid rubric can overflow them.
    pub fn earned_points(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.earned_points()))
            .sum()
    }

    pub fn possible_points(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.possible_points))
            .sum()
    }

    /// Renders the plain-text score table with rules `rule_width` wide.
    pub fn render(&self, rule_width: usize) -> String {
        let rule = "=".repeat(rule_width);
        let name_width = self
            .items
            .iter()
            .map(|item| item.name.len())
            .max()
            .unwrap_or(0)
            + 4;

        let mut out = String::new();
        out.push_str(&format!("{rule}\nRUBRIC SCORE\n{rule}\n"));
        for item in &self.items {
            out.push_str(&format!(
                "{:<name_width$}{:>4} / {:>4}\n",
                item.name,
                item.earned_points(),
                item.possible_points
            ));
        }
        out.push_str(&format!(
            "{rule}\nTOTAL = {:>4} / {:>4}\n{rule}\n\n",
            self.earned_points(),
            self.possible_points()
        ));
        out
    }
}

impl fmt::Display for RubricScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_RULE_WIDTH))
    }
}
