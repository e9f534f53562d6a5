//! Subscription tracker: monthly/yearly totals and where the money goes

pub mod loader;

pub use loader::{load_subscriptions, load_subscriptions_from_reader};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionCategory {
    Entertainment,
    Music,
    News,
    Software,
    Gaming,
    Food,
    Fitness,
    Other,
}

impl SubscriptionCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            SubscriptionCategory::Entertainment => "Entertainment",
            SubscriptionCategory::Music => "Music",
            SubscriptionCategory::News => "News",
            SubscriptionCategory::Software => "Software",
            SubscriptionCategory::Gaming => "Gaming",
            SubscriptionCategory::Food => "Food Delivery",
            SubscriptionCategory::Fitness => "Fitness",
            SubscriptionCategory::Other => "Other",
        }
    }
}

/// Unknown categories fall into `Other`
impl FromStr for SubscriptionCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "entertainment" => SubscriptionCategory::Entertainment,
            "music" => SubscriptionCategory::Music,
            "news" => SubscriptionCategory::News,
            "software" => SubscriptionCategory::Software,
            "gaming" => SubscriptionCategory::Gaming,
            "food" | "food delivery" => SubscriptionCategory::Food,
            "fitness" => SubscriptionCategory::Fitness,
            _ => SubscriptionCategory::Other,
        })
    }
}

/// Same leniency as `FromStr`: unknown names deserialize as `Other`
impl<'de> Deserialize<'de> for SubscriptionCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(SubscriptionCategory::Other))
    }
}

impl fmt::Display for SubscriptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub name: String,
    pub monthly_cost: f64,
    pub category: SubscriptionCategory,
    #[serde(default)]
    pub essential: bool,
}

impl Subscription {
    pub fn new(name: impl Into<String>, monthly_cost: f64, category: SubscriptionCategory, essential: bool) -> Self {
        Self {
            name: name.into(),
            monthly_cost,
            category,
            essential,
        }
    }

    pub fn yearly_cost(&self) -> f64 {
        self.monthly_cost * 12.0
    }
}

/// Spend on one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: SubscriptionCategory,
    pub monthly_cost: f64,
    /// Rounded share of the monthly total
    pub percent_of_total: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub monthly_total: f64,
    pub yearly_total: f64,
    /// Yearly cost of everything not marked essential
    pub potential_yearly_savings: f64,
    pub subscriptions: Vec<Subscription>,
    /// Categories in the order they first appear
    pub by_category: Vec<CategoryBreakdown>,
}

/// Aggregate a list of subscriptions
pub fn summarize(subscriptions: &[Subscription]) -> SubscriptionSummary {
    let monthly_total: f64 = subscriptions.iter().map(|s| s.monthly_cost).sum();
    let non_essential_monthly: f64 = subscriptions
        .iter()
        .filter(|s| !s.essential)
        .map(|s| s.monthly_cost)
        .sum();

    let mut by_category: Vec<CategoryBreakdown> = Vec::new();
    for sub in subscriptions {
        match by_category.iter_mut().find(|c| c.category == sub.category) {
            Some(entry) => entry.monthly_cost += sub.monthly_cost,
            None => by_category.push(CategoryBreakdown {
                category: sub.category,
                monthly_cost: sub.monthly_cost,
                percent_of_total: 0,
            }),
        }
    }
    for entry in &mut by_category {
        entry.percent_of_total = if monthly_total > 0.0 {
            (entry.monthly_cost / monthly_total * 100.0).round().clamp(0.0, 100.0) as u8
        } else {
            0
        };
    }

    log::debug!(
        "Summarized {} subscriptions across {} categories: monthly={:.2}",
        subscriptions.len(),
        by_category.len(),
        monthly_total
    );

    SubscriptionSummary {
        monthly_total,
        yearly_total: monthly_total * 12.0,
        potential_yearly_savings: non_essential_monthly * 12.0,
        subscriptions: subscriptions.to_vec(),
        by_category,
    }
}
