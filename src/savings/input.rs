//! Projection inputs and the form validation boundary

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How often the saver adds money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
}

impl ContributionFrequency {
    /// Contributions made per year
    pub fn periods_per_year(self) -> u32 {
        match self {
            ContributionFrequency::Weekly => 52,
            ContributionFrequency::Biweekly => 26,
            ContributionFrequency::Monthly => 12,
        }
    }

    /// Scale a per-period contribution to its monthly equivalent
    pub fn monthly_equivalent(self, contribution: f64) -> f64 {
        contribution * (self.periods_per_year() as f64 / 12.0)
    }
}

/// Lenient parse: anything unrecognized is treated as monthly
impl FromStr for ContributionFrequency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => ContributionFrequency::Weekly,
            "biweekly" | "bi-weekly" | "fortnightly" => ContributionFrequency::Biweekly,
            _ => ContributionFrequency::Monthly,
        })
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContributionFrequency::Weekly => "weekly",
            ContributionFrequency::Biweekly => "biweekly",
            ContributionFrequency::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

/// A single snapshot of what the saver entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Target balance
    pub goal: f64,

    /// Balance already saved
    #[serde(default)]
    pub initial_balance: f64,

    /// Amount added each contribution period
    #[serde(default)]
    pub contribution: f64,

    #[serde(default)]
    pub contribution_frequency: ContributionFrequency,

    /// Annual interest rate in percent (5.0 = 5%)
    #[serde(default)]
    pub annual_interest_rate_percent: f64,
}

impl ProjectionInput {
    pub fn new(
        goal: f64,
        initial_balance: f64,
        contribution: f64,
        contribution_frequency: ContributionFrequency,
        annual_interest_rate_percent: f64,
    ) -> Self {
        Self {
            goal,
            initial_balance,
            contribution,
            contribution_frequency,
            annual_interest_rate_percent,
        }
    }

    /// Copy with every numeric field clamped to a non-negative finite value.
    /// NaN and negative values become 0.
    pub fn clamped(&self) -> Self {
        Self {
            goal: non_negative(self.goal),
            initial_balance: non_negative(self.initial_balance),
            contribution: non_negative(self.contribution),
            contribution_frequency: self.contribution_frequency,
            annual_interest_rate_percent: non_negative(self.annual_interest_rate_percent),
        }
    }

    /// Contribution normalized to a monthly amount
    pub fn monthly_contribution(&self) -> f64 {
        self.contribution_frequency.monthly_equivalent(self.contribution)
    }

    /// Monthly interest rate as a fraction
    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate_percent / 100.0 / 12.0
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else if value == f64::INFINITY {
        f64::MAX
    } else {
        0.0
    }
}

/// A field value as submitted by a form: either already numeric or raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// Raw savings calculator form, exactly as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsForm {
    #[serde(default)]
    pub goal: Option<RawNumber>,
    #[serde(default)]
    pub initial_amount: Option<RawNumber>,
    #[serde(default)]
    pub contribution_amount: Option<RawNumber>,
    #[serde(default)]
    pub contribution_frequency: Option<String>,
    #[serde(default)]
    pub interest_rate: Option<RawNumber>,
}

impl SavingsForm {
    /// Turn the raw form into a projection input.
    ///
    /// Blank or missing fields count as 0. Text that does not parse, infinite
    /// values and negative amounts are rejected.
    pub fn validate(&self) -> Result<ProjectionInput, InputError> {
        let frequency: ContributionFrequency = self
            .contribution_frequency
            .as_deref()
            .map(|s| s.parse::<ContributionFrequency>().unwrap_or_default())
            .unwrap_or_default();

        Ok(ProjectionInput {
            goal: parse_amount("goal", self.goal.as_ref())?,
            initial_balance: parse_amount("initialAmount", self.initial_amount.as_ref())?,
            contribution: parse_amount("contributionAmount", self.contribution_amount.as_ref())?,
            contribution_frequency: frequency,
            annual_interest_rate_percent: parse_amount("interestRate", self.interest_rate.as_ref())?,
        })
    }
}

/// Parse one numeric form field
pub(crate) fn parse_amount(field: &'static str, raw: Option<&RawNumber>) -> Result<f64, InputError> {
    let value = match raw {
        None => return Ok(0.0),
        Some(RawNumber::Number(n)) => *n,
        Some(RawNumber::Text(text)) => {
            let trimmed = text.trim().trim_start_matches('$').replace(',', "");
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed.parse::<f64>().map_err(|_| InputError::NotANumber {
                field,
                value: text.clone(),
            })?
        }
    };

    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(value)
}
