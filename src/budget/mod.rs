//! Budget planner: compare spending against a needs/wants/savings rule
//!
//! The default rule is the 50/30/20 split: half of income to needs, 30% to
//! wants and 20% to savings and debt repayment.

mod tips;

pub use tips::BudgetTip;

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending bucket under the allocation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Needs,
    Wants,
    Savings,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 3] = [
        BudgetCategory::Needs,
        BudgetCategory::Wants,
        BudgetCategory::Savings,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            BudgetCategory::Needs => "Needs",
            BudgetCategory::Wants => "Wants",
            BudgetCategory::Savings => "Savings & Debt",
        }
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "needs" | "need" => Ok(BudgetCategory::Needs),
            "wants" | "want" => Ok(BudgetCategory::Wants),
            "savings" | "saving" | "debt" => Ok(BudgetCategory::Savings),
            other => Err(format!("unknown budget category '{}'", other)),
        }
    }
}

/// Accepts the same aliases as `FromStr`
impl<'de> Deserialize<'de> for BudgetCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One line of the budget form (rent, dining, investments, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub label: String,
    pub category: BudgetCategory,
    pub amount: f64,
}

impl Expense {
    pub fn new(label: impl Into<String>, category: BudgetCategory, amount: f64) -> Self {
        Self { label: label.into(), category, amount }
    }
}

/// Parses `category:label=amount`, e.g. `needs:rent=1200`
impl FromStr for Expense {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("expected category:label=amount, got '{}'", s))?;
        let (label, amount) = rest
            .split_once('=')
            .ok_or_else(|| format!("expected category:label=amount, got '{}'", s))?;
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid amount", amount.trim()))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(format!("amount for '{}' must be a non-negative number", label.trim()));
        }
        Ok(Expense::new(label.trim(), category.parse()?, amount))
    }
}

/// Target share of income per category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRule {
    #[serde(default = "default_needs")]
    pub needs: f64,
    #[serde(default = "default_wants")]
    pub wants: f64,
    #[serde(default = "default_savings")]
    pub savings: f64,
}

fn default_needs() -> f64 { 0.50 }
fn default_wants() -> f64 { 0.30 }
fn default_savings() -> f64 { 0.20 }

impl Default for BudgetRule {
    fn default() -> Self {
        Self {
            needs: 0.50,
            wants: 0.30,
            savings: 0.20,
        }
    }
}

impl BudgetRule {
    pub fn share(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::Needs => self.needs,
            BudgetCategory::Wants => self.wants,
            BudgetCategory::Savings => self.savings,
        }
    }
}

/// Everything entered on the budget form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub income: f64,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl BudgetInput {
    pub fn category_total(&self, category: BudgetCategory) -> f64 {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount.max(0.0))
            .sum()
    }
}

/// Recommended versus actual spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub category: BudgetCategory,
    pub recommended: f64,
    pub actual: f64,
    /// Actual spending as a percentage of income (may exceed 100)
    pub percent_of_income: f64,
    /// Progress bar width, clamped to 0..=100
    pub bar_width: f64,
}

/// Result of planning a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub income: f64,
    pub total_expenses: f64,
    /// Income left after all expenses; negative when overspending
    pub remaining: f64,
    pub allocations: Vec<Allocation>,
    pub tips: Vec<BudgetTip>,
}

impl BudgetReport {
    pub fn allocation(&self, category: BudgetCategory) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.category == category)
    }
}

/// Build the budget report for `input` under `rule`
pub fn plan_budget(input: &BudgetInput, rule: &BudgetRule) -> BudgetReport {
    let income = input.income.max(0.0);

    let allocations: Vec<Allocation> = BudgetCategory::ALL
        .iter()
        .map(|&category| {
            let actual = input.category_total(category);
            let percent_of_income = if income > 0.0 { actual / income * 100.0 } else { 0.0 };
            Allocation {
                category,
                recommended: income * rule.share(category),
                actual,
                percent_of_income,
                bar_width: percent_of_income.clamp(0.0, 100.0),
            }
        })
        .collect();

    let total_expenses: f64 = allocations.iter().map(|a| a.actual).sum();
    let remaining = income - total_expenses;
    let tips = tips::budget_tips(&allocations, rule, income, remaining);

    log::debug!(
        "Budget planned: income={:.2} expenses={:.2} remaining={:.2}",
        income, total_expenses, remaining
    );

    BudgetReport {
        income,
        total_expenses,
        remaining,
        allocations,
        tips,
    }
}
