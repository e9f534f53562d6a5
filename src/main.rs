//! Savings Planner CLI
//!
//! Usage:
//!   savings_planner savings --goal 10000 --contribution 250 --rate 4.5
//!   savings_planner budget --income 5000 --expense needs:rent=1500 --expense wants:dining=300
//!   savings_planner subscriptions --file subscriptions.csv
//!   savings_planner sweep --goal 50000 --output sweep.csv

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use savings_planner::budget::{plan_budget, BudgetInput, BudgetRule, Expense};
use savings_planner::chart::{ChartData, ChartWidget, TableRenderer};
use savings_planner::savings::label::format_currency;
use savings_planner::savings::{ProjectionConfig, ProjectionEngine, RawNumber, SavingsForm};
use savings_planner::subscriptions::{load_subscriptions, summarize};
use savings_planner::sweep::{run_sweep, SweepGrid};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "savings_planner", about = "Savings, budget and subscription calculators")]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project how long it takes to reach a savings goal
    Savings {
        #[arg(long)]
        goal: String,
        #[arg(long, default_value = "0")]
        initial: String,
        #[arg(long, default_value = "0")]
        contribution: String,
        /// weekly, biweekly or monthly
        #[arg(long, default_value = "monthly")]
        frequency: String,
        /// Annual interest rate in percent
        #[arg(long, default_value = "0")]
        rate: String,
        /// JSON file with projection settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Date saving starts, used to report a target date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// Compare spending against the 50/30/20 rule
    Budget {
        #[arg(long)]
        income: f64,
        /// Expense as category:label=amount (category: needs, wants, savings)
        #[arg(long = "expense")]
        expenses: Vec<Expense>,
        /// JSON file with a custom allocation rule
        #[arg(long)]
        rule: Option<PathBuf>,
    },

    /// Summarize subscriptions from a CSV file
    Subscriptions {
        #[arg(long)]
        file: PathBuf,
    },

    /// Project a grid of contribution amounts and interest rates
    Sweep {
        #[arg(long)]
        goal: f64,
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value = "monthly")]
        frequency: String,
        #[arg(long, default_value_t = 100.0)]
        contribution_min: f64,
        #[arg(long, default_value_t = 1000.0)]
        contribution_max: f64,
        #[arg(long, default_value_t = 100.0)]
        contribution_step: f64,
        #[arg(long, default_value_t = 0.0)]
        rate_min: f64,
        #[arg(long, default_value_t = 10.0)]
        rate_max: f64,
        #[arg(long, default_value_t = 1.0)]
        rate_step: f64,
        #[arg(long, default_value = "sweep_output.csv")]
        output: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Savings {
            goal,
            initial,
            contribution,
            frequency,
            rate,
            config,
            start_date,
        } => {
            let form = SavingsForm {
                goal: Some(RawNumber::Text(goal)),
                initial_amount: Some(RawNumber::Text(initial)),
                contribution_amount: Some(RawNumber::Text(contribution)),
                contribution_frequency: Some(frequency),
                interest_rate: Some(RawNumber::Text(rate)),
            };
            cmd_savings(&form, config.as_deref(), start_date, cli.json)
        }
        Commands::Budget { income, expenses, rule } => {
            cmd_budget(BudgetInput { income, expenses }, rule.as_deref(), cli.json)
        }
        Commands::Subscriptions { file } => cmd_subscriptions(&file, cli.json),
        Commands::Sweep {
            goal,
            initial,
            frequency,
            contribution_min,
            contribution_max,
            contribution_step,
            rate_min,
            rate_max,
            rate_step,
            output,
            config,
        } => {
            let form = SavingsForm {
                goal: Some(RawNumber::Number(goal)),
                initial_amount: Some(RawNumber::Number(initial)),
                contribution_frequency: Some(frequency),
                ..Default::default()
            };
            let grid = SweepGrid::linear(
                (contribution_min, contribution_max, contribution_step),
                (rate_min, rate_max, rate_step),
            )
            .context("Invalid sweep grid")?;
            cmd_sweep(&form, &grid, &output, config.as_deref())
        }
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("Failed to parse {}", path.display()))
}

fn load_engine(config: Option<&Path>) -> Result<ProjectionEngine> {
    let config: ProjectionConfig = match config {
        Some(path) => load_json(path)?,
        None => ProjectionConfig::default(),
    };
    Ok(ProjectionEngine::new(config))
}

fn cmd_savings(form: &SavingsForm, config: Option<&Path>, start_date: Option<NaiveDate>, json: bool) -> Result<()> {
    let input = form.validate().context("Invalid savings input")?;
    let engine = load_engine(config)?;
    let result = engine.project(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Time to goal:        {}", result.time_to_goal_label());
    println!("Total contributions: {}", format_currency(result.total_deposited()));
    println!("Interest earned:     {}", format_currency(result.total_interest));
    if let Some(date) = start_date.and_then(|d| result.goal_date(d)) {
        println!("Goal reached on:     {}", date);
    }

    if !result.samples.is_empty() {
        println!("\nGrowth:");
        let mut chart = ChartWidget::new(TableRenderer::new(io::stdout()));
        chart.render(&ChartData::savings(&result))?;
    }

    if !result.milestones.is_empty() {
        println!("\nMilestones:");
        for milestone in &result.milestones {
            println!(
                "  {:<20} {:>14} {:>4}%",
                milestone.label,
                format_currency(milestone.balance),
                milestone.percent_of_goal
            );
        }
    }
    Ok(())
}

fn cmd_budget(input: BudgetInput, rule: Option<&Path>, json: bool) -> Result<()> {
    let rule: BudgetRule = match rule {
        Some(path) => load_json(path)?,
        None => BudgetRule::default(),
    };
    let report = plan_budget(&input, &rule);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Income:    {}", format_currency(report.income));
    println!("Expenses:  {}", format_currency(report.total_expenses));
    println!("Remaining: {}", format_currency(report.remaining));
    println!();
    println!("{:<16} {:>14} {:>14} {:>8}", "Category", "Recommended", "Actual", "Share");
    for allocation in &report.allocations {
        println!(
            "{:<16} {:>14} {:>14} {:>7.1}%",
            allocation.category.to_string(),
            format_currency(allocation.recommended),
            format_currency(allocation.actual),
            allocation.percent_of_income
        );
    }
    println!("\nTips:");
    for tip in &report.tips {
        println!("  - {}", tip);
    }
    Ok(())
}

fn cmd_subscriptions(file: &Path, json: bool) -> Result<()> {
    let subscriptions = load_subscriptions(file)
        .with_context(|| format!("Failed to load subscriptions from {}", file.display()))?;
    let summary = summarize(&subscriptions);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Monthly total:     {}", format_currency(summary.monthly_total));
    println!("Yearly total:      {}", format_currency(summary.yearly_total));
    println!("Potential savings: {} per year", format_currency(summary.potential_yearly_savings));
    println!();
    println!("{:<24} {:<14} {:>10} {:>10} {:>9}", "Name", "Category", "Monthly", "Yearly", "Essential");
    for sub in &summary.subscriptions {
        println!(
            "{:<24} {:<14} {:>10} {:>10} {:>9}",
            sub.name,
            sub.category.to_string(),
            format_currency(sub.monthly_cost),
            format_currency(sub.yearly_cost()),
            if sub.essential { "Yes" } else { "No" }
        );
    }

    if !summary.by_category.is_empty() {
        println!("\nBy category:");
        let mut chart = ChartWidget::new(TableRenderer::new(io::stdout()));
        chart.render(&ChartData::subscriptions(&summary))?;
    }
    Ok(())
}

fn cmd_sweep(form: &SavingsForm, grid: &SweepGrid, output: &Path, config: Option<&Path>) -> Result<()> {
    let base = form.validate().context("Invalid sweep input")?;
    let engine = load_engine(config)?;

    let rows = run_sweep(&engine, &base, grid);

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let reached = rows.iter().filter(|r| r.reached).count();
    println!("{} of {} scenarios reach the goal", reached, rows.len());
    println!("Output written to {}", output.display());
    Ok(())
}
