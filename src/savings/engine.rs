//! Month-by-month savings simulation

use super::input::ProjectionInput;
use super::result::{GoalStatus, Milestone, ProjectionResult, ProjectionSample};
use super::{DEFAULT_MAX_MONTHS, DEFAULT_MILESTONE_INTERVAL, DEFAULT_SAMPLE_INTERVAL};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Simulation cadence and limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionConfig {
    /// Months simulated before giving up on the goal
    #[serde(default = "default_max_months")]
    pub max_months: u32,

    /// Emit a chart sample every N months (0 = only the terminal month)
    #[serde(default = "default_sample_interval")]
    pub sample_interval: u32,

    /// Emit a milestone every N months (0 = only on completion)
    #[serde(default = "default_milestone_interval")]
    pub milestone_interval: u32,

    /// Record a sample for every simulated month
    #[serde(default)]
    pub detailed_output: bool,
}

fn default_max_months() -> u32 { DEFAULT_MAX_MONTHS }
fn default_sample_interval() -> u32 { DEFAULT_SAMPLE_INTERVAL }
fn default_milestone_interval() -> u32 { DEFAULT_MILESTONE_INTERVAL }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            milestone_interval: DEFAULT_MILESTONE_INTERVAL,
            detailed_output: false,
        }
    }
}

fn on_boundary(month: u32, interval: u32) -> bool {
    interval != 0 && month % interval == 0
}

/// Savings projection engine
///
/// Holds only its configuration, so one engine can be shared across threads
/// and reused for any number of projections.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project how long it takes to reach the goal
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        let clamped = input.clamped();
        if clamped != *input {
            warn!("Projection input had negative or non-finite values; clamped to zero");
        }
        let input = clamped;

        debug!(
            "Projecting goal={:.2} initial={:.2} contribution={:.2} {} rate={}%",
            input.goal,
            input.initial_balance,
            input.contribution,
            input.contribution_frequency,
            input.annual_interest_rate_percent
        );

        if input.initial_balance >= input.goal {
            return self.already_met(&input);
        }

        if input.annual_interest_rate_percent == 0.0 && input.contribution == 0.0 {
            debug!("Goal unreachable without contributions or interest");
            return self.empty_result(&input, GoalStatus::Unreachable);
        }

        self.simulate(&input)
    }

    fn already_met(&self, input: &ProjectionInput) -> ProjectionResult {
        let mut result = self.empty_result(input, GoalStatus::AlreadyMet);
        result.reached = true;
        result.months_to_goal = Some(0);
        result.samples.push(ProjectionSample {
            month_index: 0,
            balance: input.initial_balance,
            cumulative_contributions: 0.0,
            cumulative_interest: 0.0,
        });
        result.milestones.push(Milestone::new(0, input.initial_balance, input.goal));
        result
    }

    fn empty_result(&self, input: &ProjectionInput, status: GoalStatus) -> ProjectionResult {
        ProjectionResult {
            status,
            reached: false,
            months_to_goal: None,
            goal: input.goal,
            initial_balance: input.initial_balance,
            final_balance: input.initial_balance,
            total_contributions: 0.0,
            total_interest: 0.0,
            max_months: self.config.max_months,
            samples: Vec::new(),
            milestones: Vec::new(),
        }
    }

    fn simulate(&self, input: &ProjectionInput) -> ProjectionResult {
        let monthly_contribution = input.monthly_contribution();
        let monthly_rate = input.monthly_rate();

        let mut balance = input.initial_balance;
        let mut contributions = 0.0;
        let mut interest = 0.0;
        let mut samples = Vec::new();
        let mut milestones = Vec::new();
        let mut months_to_goal = None;

        for month in 1..=self.config.max_months {
            // Contribution lands before interest is credited for the month
            balance += monthly_contribution;
            contributions += monthly_contribution;

            let credited = balance * monthly_rate;
            balance += credited;
            interest += credited;

            let reached = balance >= input.goal;

            if self.config.detailed_output
                || on_boundary(month, self.config.sample_interval)
                || reached
                || month == self.config.max_months
            {
                samples.push(ProjectionSample {
                    month_index: month,
                    balance,
                    cumulative_contributions: contributions,
                    cumulative_interest: interest,
                });
            }

            if on_boundary(month, self.config.milestone_interval) || reached {
                milestones.push(Milestone::new(month, balance, input.goal));
            }

            if reached {
                months_to_goal = Some(month);
                break;
            }
        }

        let status = if months_to_goal.is_some() {
            GoalStatus::Reached
        } else {
            GoalStatus::Exceeded
        };

        debug!(
            "Projection finished: {:?} after {:?} months, balance={:.2}",
            status, months_to_goal, balance
        );

        ProjectionResult {
            status,
            reached: months_to_goal.is_some(),
            months_to_goal,
            goal: input.goal,
            initial_balance: input.initial_balance,
            final_balance: balance,
            total_contributions: contributions,
            total_interest: interest,
            max_months: self.config.max_months,
            samples,
            milestones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::ContributionFrequency;
    use approx::assert_relative_eq;

    fn monthly(goal: f64, initial: f64, contribution: f64, rate: f64) -> ProjectionInput {
        ProjectionInput::new(goal, initial, contribution, ContributionFrequency::Monthly, rate)
    }

    #[test]
    fn test_goal_already_met() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&monthly(1000.0, 1000.0, 50.0, 5.0));

        assert_eq!(result.status, GoalStatus::AlreadyMet);
        assert!(result.reached);
        assert_eq!(result.months_to_goal, Some(0));
        assert_eq!(result.total_contributions, 0.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.samples.len(), 1);
        assert_eq!(result.samples[0].month_index, 0);
        assert_eq!(result.milestones.len(), 1);
        assert_eq!(result.milestones[0].percent_of_goal, 100);
    }

    #[test]
    fn test_unreachable_goal() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&monthly(10_000.0, 0.0, 0.0, 0.0));

        assert_eq!(result.status, GoalStatus::Unreachable);
        assert!(!result.reached);
        assert_eq!(result.months_to_goal, None);
        assert!(result.samples.is_empty());
        assert!(result.milestones.is_empty());
    }

    #[test]
    fn test_simple_contributions_reach_goal_in_ten_months() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&monthly(1000.0, 0.0, 100.0, 0.0));

        assert_eq!(result.status, GoalStatus::Reached);
        assert_eq!(result.months_to_goal, Some(10));
        assert_relative_eq!(result.total_contributions, 1000.0);
        assert_eq!(result.total_interest, 0.0);

        // Month 6 boundary plus the terminal month
        let months: Vec<u32> = result.samples.iter().map(|s| s.month_index).collect();
        assert_eq!(months, vec![6, 10]);

        // Only the completion milestone; month 12 never happens
        assert_eq!(result.milestones.len(), 1);
        assert_eq!(result.milestones[0].month_index, 10);
        assert_eq!(result.milestones[0].percent_of_goal, 100);
        assert_eq!(result.milestones[0].label, "10 months");
    }

    #[test]
    fn test_interest_applied_after_contribution() {
        let config = ProjectionConfig { max_months: 1, ..Default::default() };
        let engine = ProjectionEngine::new(config);
        // 12% annual = 1% monthly on (1000 + 100)
        let result = engine.project(&monthly(1_000_000.0, 1000.0, 100.0, 12.0));

        assert_eq!(result.status, GoalStatus::Exceeded);
        assert_relative_eq!(result.total_interest, 11.0, epsilon = 1e-9);
        assert_relative_eq!(result.final_balance, 1111.0, epsilon = 1e-9);
    }

    #[test]
    fn test_weekly_contributions_scaled_to_monthly() {
        let engine = ProjectionEngine::default();
        let input = ProjectionInput::new(5000.0, 0.0, 100.0, ContributionFrequency::Weekly, 0.0);
        let result = engine.project(&input);

        // 100 * 52 / 12 per month: ~4766 after 11 months, ~5200 after 12
        assert_eq!(result.months_to_goal, Some(12));
        assert_relative_eq!(result.total_contributions, 5200.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cap_reports_exceeded() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&monthly(1_000_000.0, 0.0, 10.0, 0.0));

        assert_eq!(result.status, GoalStatus::Exceeded);
        assert!(!result.reached);
        assert_eq!(result.months_to_goal, None);
        assert_eq!(result.time_to_goal_label(), "More than 50 years");
        assert_eq!(result.samples.last().map(|s| s.month_index), Some(600));
        assert_eq!(result.milestones.len(), 50);
        assert_relative_eq!(result.total_contributions, 6000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_goal_reached_on_final_capped_month() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&monthly(6000.0, 0.0, 10.0, 0.0));

        // Reaching the goal in month 600 still counts as reached
        assert_eq!(result.status, GoalStatus::Reached);
        assert!(result.reached);
        assert_eq!(result.months_to_goal, Some(600));
        assert_eq!(result.time_to_goal_label(), "50 years");
        assert_eq!(result.milestones.last().map(|m| m.percent_of_goal), Some(100));

        // One dollar more and the cap wins
        let result = engine.project(&monthly(6001.0, 0.0, 10.0, 0.0));
        assert_eq!(result.status, GoalStatus::Exceeded);
        assert_eq!(result.months_to_goal, None);
    }

    #[test]
    fn test_yearly_milestones_and_half_year_samples() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&monthly(3000.0, 0.0, 100.0, 0.0));

        assert_eq!(result.months_to_goal, Some(30));
        let sample_months: Vec<u32> = result.samples.iter().map(|s| s.month_index).collect();
        assert_eq!(sample_months, vec![6, 12, 18, 24, 30]);

        let milestone_months: Vec<u32> = result.milestones.iter().map(|m| m.month_index).collect();
        assert_eq!(milestone_months, vec![12, 24, 30]);
        assert_eq!(result.milestones[0].percent_of_goal, 40);
        assert_eq!(result.milestones[1].label, "2 years");
        assert_eq!(result.milestones[2].label, "2 years 6 months");
    }

    #[test]
    fn test_custom_cadence() {
        let config = ProjectionConfig {
            max_months: 600,
            sample_interval: 3,
            milestone_interval: 0,
            detailed_output: false,
        };
        let engine = ProjectionEngine::new(config);
        let result = engine.project(&monthly(700.0, 0.0, 100.0, 0.0));

        let sample_months: Vec<u32> = result.samples.iter().map(|s| s.month_index).collect();
        assert_eq!(sample_months, vec![3, 6, 7]);
        assert_eq!(result.milestones.len(), 1);
    }

    #[test]
    fn test_negative_inputs_are_clamped() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&monthly(1000.0, -500.0, 100.0, -4.0));

        assert_eq!(result.initial_balance, 0.0);
        assert_eq!(result.months_to_goal, Some(10));
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_interest_only_growth() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&monthly(2000.0, 1000.0, 0.0, 12.0));

        // 1% monthly doubles in 70 months
        assert_eq!(result.months_to_goal, Some(70));
        assert_eq!(result.total_contributions, 0.0);
        assert_relative_eq!(result.total_interest, result.final_balance - 1000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ProjectionConfig = serde_json::from_str(r#"{"maxMonths": 120}"#).unwrap();
        assert_eq!(config.max_months, 120);
        assert_eq!(config.sample_interval, 6);
        assert_eq!(config.milestone_interval, 12);
        assert!(!config.detailed_output);
    }
}
