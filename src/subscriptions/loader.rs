//! Load subscriptions from CSV
//!
//! Expected columns: `name,monthly_cost,category,essential`. The category is
//! matched case-insensitively; `essential` accepts yes/no, true/false or 1/0.

use super::{Subscription, SubscriptionCategory};
use crate::error::Result;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SubscriptionRecord {
    name: String,
    monthly_cost: f64,
    #[serde(default)]
    category: String,
    #[serde(default, deserialize_with = "yes_no")]
    essential: bool,
}

fn yes_no<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!("invalid essential flag '{}'", other))),
    }
}

/// Load subscriptions from a CSV file
pub fn load_subscriptions<P: AsRef<Path>>(path: P) -> Result<Vec<Subscription>> {
    let file = File::open(path.as_ref())?;
    load_subscriptions_from_reader(file)
}

/// Load subscriptions from any CSV reader
pub fn load_subscriptions_from_reader<R: Read>(reader: R) -> Result<Vec<Subscription>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut subscriptions = Vec::new();
    for record in rdr.deserialize() {
        let record: SubscriptionRecord = record?;
        if record.monthly_cost < 0.0 || !record.monthly_cost.is_finite() {
            log::warn!("Skipping '{}': monthly cost {} is not valid", record.name, record.monthly_cost);
            continue;
        }
        let category: SubscriptionCategory = record.category.parse().unwrap_or(SubscriptionCategory::Other);
        subscriptions.push(Subscription::new(record.name, record.monthly_cost, category, record.essential));
    }

    log::info!("Loaded {} subscriptions", subscriptions.len());
    Ok(subscriptions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "\
name,monthly_cost,category,essential
Netflix,15.49,entertainment,no
Gym,40,Fitness,yes
Mystery box,20,boxes,
";
        let subs = load_subscriptions_from_reader(data.as_bytes()).expect("Failed to load");
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0].name, "Netflix");
        assert_eq!(subs[0].monthly_cost, 15.49);
        assert!(!subs[0].essential);
        assert_eq!(subs[1].category, SubscriptionCategory::Fitness);
        assert!(subs[1].essential);
        assert_eq!(subs[2].category, SubscriptionCategory::Other);
    }

    #[test]
    fn test_bad_essential_flag_is_an_error() {
        let data = "name,monthly_cost,category,essential\nNetflix,15,entertainment,maybe\n";
        assert!(load_subscriptions_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_negative_cost_skipped() {
        let data = "name,monthly_cost,category,essential\nRefund,-5,other,no\nNews,8,news,no\n";
        let subs = load_subscriptions_from_reader(data.as_bytes()).unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].category, SubscriptionCategory::News);
    }
}
