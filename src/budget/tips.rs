//! Advice derived from a budget's category percentages

use super::{Allocation, BudgetCategory, BudgetRule};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BudgetTip {
    /// Needs take more than their target share of income
    NeedsOverTarget { percent: f64, target: f64 },
    /// Wants take more than their target share of income
    WantsOverTarget { percent: f64, target: f64 },
    /// Savings fall short of their target share
    SavingsUnderTarget { percent: f64, target: f64 },
    /// Expenses exceed income
    Overspending { shortfall: f64 },
    /// Income left over that is not assigned anywhere
    Unallocated { amount: f64 },
    OnTrack,
}

impl fmt::Display for BudgetTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetTip::NeedsOverTarget { percent, target } => write!(
                f,
                "Needs take {:.0}% of your income, above the {:.0}% target. Look for savings on housing, utilities or transportation.",
                percent, target
            ),
            BudgetTip::WantsOverTarget { percent, target } => write!(
                f,
                "Wants take {:.0}% of your income, above the {:.0}% target. Dining out, shopping and subscriptions are the easiest places to cut back.",
                percent, target
            ),
            BudgetTip::SavingsUnderTarget { percent, target } => write!(
                f,
                "You are saving {:.0}% of your income. Aim for at least {:.0}% across savings, investments and debt payments.",
                percent, target
            ),
            BudgetTip::Overspending { shortfall } => write!(
                f,
                "Your expenses exceed your income by ${:.2}. Reduce spending to avoid taking on debt.",
                shortfall
            ),
            BudgetTip::Unallocated { amount } => write!(
                f,
                "You have ${:.2} left unallocated. Consider putting it toward savings or paying down debt.",
                amount
            ),
            BudgetTip::OnTrack => f.write_str("Your budget follows the recommended allocation. Keep it up!"),
        }
    }
}

pub(super) fn budget_tips(
    allocations: &[Allocation],
    rule: &BudgetRule,
    income: f64,
    remaining: f64,
) -> Vec<BudgetTip> {
    let mut tips = Vec::new();

    // Shares of zero income say nothing
    let shares = if income > 0.0 { allocations } else { &[] };
    for allocation in shares {
        let percent = allocation.percent_of_income;
        let target = rule.share(allocation.category) * 100.0;
        match allocation.category {
            BudgetCategory::Needs if percent > target => {
                tips.push(BudgetTip::NeedsOverTarget { percent, target });
            }
            BudgetCategory::Wants if percent > target => {
                tips.push(BudgetTip::WantsOverTarget { percent, target });
            }
            BudgetCategory::Savings if percent < target => {
                tips.push(BudgetTip::SavingsUnderTarget { percent, target });
            }
            _ => {}
        }
    }

    if remaining < 0.0 {
        tips.push(BudgetTip::Overspending { shortfall: -remaining });
    } else if remaining > 0.0 {
        tips.push(BudgetTip::Unallocated { amount: remaining });
    }

    if tips.is_empty() {
        tips.push(BudgetTip::OnTrack);
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{plan_budget, BudgetInput, Expense};

    #[test]
    fn test_balanced_budget_is_on_track() {
        let input = BudgetInput {
            income: 1000.0,
            expenses: vec![
                Expense::new("rent", BudgetCategory::Needs, 500.0),
                Expense::new("fun", BudgetCategory::Wants, 300.0),
                Expense::new("savings", BudgetCategory::Savings, 200.0),
            ],
        };
        let report = plan_budget(&input, &BudgetRule::default());
        assert_eq!(report.tips, vec![BudgetTip::OnTrack]);
    }

    #[test]
    fn test_overweight_wants_and_light_savings() {
        let input = BudgetInput {
            income: 1000.0,
            expenses: vec![
                Expense::new("rent", BudgetCategory::Needs, 400.0),
                Expense::new("dining", BudgetCategory::Wants, 450.0),
                Expense::new("savings", BudgetCategory::Savings, 50.0),
            ],
        };
        let report = plan_budget(&input, &BudgetRule::default());

        assert!(matches!(report.tips[0], BudgetTip::WantsOverTarget { .. }));
        assert!(matches!(report.tips[1], BudgetTip::SavingsUnderTarget { .. }));
        assert!(matches!(report.tips[2], BudgetTip::Unallocated { .. }));
        assert!(report.tips[0].to_string().contains("45%"));
    }
}
