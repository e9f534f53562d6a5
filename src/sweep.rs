//! Scenario sweeps: project a grid of contribution/rate combinations
//!
//! Every cell is an independent projection, so the grid runs in parallel.

use crate::error::InputError;
use crate::savings::{ProjectionEngine, ProjectionInput};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Most values one axis of a linear grid may hold
pub const MAX_AXIS_STEPS: usize = 1_000;

/// Contribution amounts and rates to try around a base input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepGrid {
    pub contributions: Vec<f64>,
    pub rates_percent: Vec<f64>,
}

impl SweepGrid {
    /// Evenly spaced grid including both endpoints.
    /// A step of zero or less yields just the start value; an axis needing
    /// more than [`MAX_AXIS_STEPS`] values is rejected.
    pub fn linear(contribution: (f64, f64, f64), rate: (f64, f64, f64)) -> Result<Self, InputError> {
        Ok(Self {
            contributions: steps("contribution", contribution.0, contribution.1, contribution.2)?,
            rates_percent: steps("rate", rate.0, rate.1, rate.2)?,
        })
    }

    pub fn len(&self) -> usize {
        self.contributions.len() * self.rates_percent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn steps(field: &'static str, start: f64, end: f64, step: f64) -> Result<Vec<f64>, InputError> {
    if step <= 0.0 || end < start {
        return Ok(vec![start]);
    }
    let count = ((end - start) / step + 1e-9).floor();
    // NaN fails the comparison too
    if !(count < MAX_AXIS_STEPS as f64) {
        return Err(InputError::TooManySteps {
            field,
            steps: count + 1.0,
            max: MAX_AXIS_STEPS,
        });
    }
    let count = count as usize;
    Ok((0..=count).map(|i| start + step * i as f64).collect())
}

/// Outcome of one grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub contribution: f64,
    pub rate_percent: f64,
    pub reached: bool,
    pub months_to_goal: Option<u32>,
    pub total_contributions: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

/// Project every grid cell; rows come back contribution-major in grid order
pub fn run_sweep(engine: &ProjectionEngine, base: &ProjectionInput, grid: &SweepGrid) -> Vec<SweepRow> {
    let cells: Vec<(f64, f64)> = grid
        .contributions
        .iter()
        .flat_map(|&c| grid.rates_percent.iter().map(move |&r| (c, r)))
        .collect();

    log::info!("Running sweep over {} scenarios", cells.len());

    cells
        .par_iter()
        .map(|&(contribution, rate_percent)| {
            let input = ProjectionInput {
                contribution,
                annual_interest_rate_percent: rate_percent,
                ..*base
            };
            let result = engine.project(&input);
            SweepRow {
                contribution,
                rate_percent,
                reached: result.reached,
                months_to_goal: result.months_to_goal,
                total_contributions: result.total_contributions,
                total_interest: result.total_interest,
                final_balance: result.final_balance,
            }
        })
        .collect()
}
