//! Projection output structures

use super::label::format_months;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a projection ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalStatus {
    /// Initial balance already covers the goal
    AlreadyMet,
    /// Goal reached during the simulation
    Reached,
    /// No contributions, no interest and not enough saved: the goal can never be reached
    Unreachable,
    /// Simulation hit its month cap before the goal
    Exceeded,
}

/// Chart data point taken at a sampling boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSample {
    pub month_index: u32,
    pub balance: f64,
    /// Contributions made since month 0, excluding the initial balance
    pub cumulative_contributions: f64,
    pub cumulative_interest: f64,
}

/// Progress checkpoint for the milestone table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub label: String,
    pub month_index: u32,
    pub balance: f64,
    /// Always within 0..=100
    pub percent_of_goal: u8,
}

impl Milestone {
    pub fn new(month_index: u32, balance: f64, goal: f64) -> Self {
        Self {
            label: format_months(month_index),
            month_index,
            balance,
            percent_of_goal: percent_of_goal(balance, goal),
        }
    }
}

/// Share of the goal covered by `balance`, rounded and clamped to 0..=100
pub fn percent_of_goal(balance: f64, goal: f64) -> u8 {
    if goal <= 0.0 {
        return 100;
    }
    let pct = (balance / goal * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Complete result of one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub status: GoalStatus,
    pub reached: bool,
    pub months_to_goal: Option<u32>,
    pub goal: f64,
    pub initial_balance: f64,
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    /// Month cap the simulation ran under
    pub max_months: u32,
    pub samples: Vec<ProjectionSample>,
    pub milestones: Vec<Milestone>,
}

impl ProjectionResult {
    /// Initial balance plus everything contributed
    pub fn total_deposited(&self) -> f64 {
        self.initial_balance + self.total_contributions
    }

    /// Wording for the "time to goal" figure
    pub fn time_to_goal_label(&self) -> String {
        match self.status {
            GoalStatus::AlreadyMet => "0 months (goal already met)".to_string(),
            GoalStatus::Reached => format_months(self.months_to_goal.unwrap_or_default()),
            GoalStatus::Unreachable => "Impossible without contributions or interest".to_string(),
            GoalStatus::Exceeded => format!("More than {}", format_months(self.max_months)),
        }
    }

    /// Calendar date the goal is reached when saving starts on `start`
    pub fn goal_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        let months = self.months_to_goal?;
        start.checked_add_months(Months::new(months))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: GoalStatus, months: Option<u32>) -> ProjectionResult {
        ProjectionResult {
            status,
            reached: months.is_some(),
            months_to_goal: months,
            goal: 1000.0,
            initial_balance: 100.0,
            final_balance: 1000.0,
            total_contributions: 850.0,
            total_interest: 50.0,
            max_months: 600,
            samples: Vec::new(),
            milestones: Vec::new(),
        }
    }

    #[test]
    fn test_percent_of_goal_clamped() {
        assert_eq!(percent_of_goal(0.0, 1000.0), 0);
        assert_eq!(percent_of_goal(494.0, 1000.0), 49);
        assert_eq!(percent_of_goal(496.0, 1000.0), 50);
        assert_eq!(percent_of_goal(1500.0, 1000.0), 100);
        assert_eq!(percent_of_goal(10.0, 0.0), 100);
    }

    #[test]
    fn test_time_to_goal_labels() {
        assert_eq!(result(GoalStatus::Reached, Some(10)).time_to_goal_label(), "10 months");
        assert_eq!(result(GoalStatus::Reached, Some(27)).time_to_goal_label(), "2 years 3 months");
        assert_eq!(result(GoalStatus::Exceeded, None).time_to_goal_label(), "More than 50 years");
        assert_eq!(
            result(GoalStatus::Unreachable, None).time_to_goal_label(),
            "Impossible without contributions or interest"
        );
    }

    #[test]
    fn test_goal_date() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let r = result(GoalStatus::Reached, Some(13));
        assert_eq!(r.goal_date(start), NaiveDate::from_ymd_opt(2027, 2, 28));
        assert_eq!(result(GoalStatus::Exceeded, None).goal_date(start), None);
    }

    #[test]
    fn test_total_deposited() {
        assert_eq!(result(GoalStatus::Reached, Some(10)).total_deposited(), 950.0);
    }
}
