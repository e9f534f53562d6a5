//! Savings Planner - calculators behind a personal-finance site
//!
//! This library provides:
//! - Savings goal projections with monthly compounding
//! - Budget allocation against the 50/30/20 rule
//! - Subscription cost aggregation
//! - Chart series for the presentation layer
//! - Parallel scenario sweeps over contribution and rate grids

pub mod error;
pub mod savings;
pub mod budget;
pub mod subscriptions;
pub mod chart;
pub mod sweep;

// Re-export commonly used types
pub use error::{Error, InputError, Result};
pub use savings::{
    ContributionFrequency, GoalStatus, Milestone, ProjectionConfig, ProjectionEngine,
    ProjectionInput, ProjectionResult, ProjectionSample, SavingsForm,
};
pub use budget::{BudgetInput, BudgetReport, BudgetRule};
pub use subscriptions::{Subscription, SubscriptionSummary};
pub use chart::{ChartData, ChartRenderer, ChartWidget};
