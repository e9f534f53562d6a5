//! Savings goal projection engine

mod input;
mod engine;
mod result;
pub mod label;

pub use input::{ContributionFrequency, ProjectionInput, RawNumber, SavingsForm};
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use result::{GoalStatus, Milestone, ProjectionResult, ProjectionSample};

// ============================================================================
// Default Simulation Cadence
// ============================================================================
// Product choices rather than derived requirements:
// - Chart samples every half year
// - Milestone rows every year
// - Simulation stops after 50 years whether or not the goal is reached

/// Default simulation cap in months (50 years)
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Default month interval between chart samples
pub const DEFAULT_SAMPLE_INTERVAL: u32 = 6;

/// Default month interval between milestones
pub const DEFAULT_MILESTONE_INTERVAL: u32 = 12;
