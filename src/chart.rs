//! Chart series for the presentation layer and chart instance ownership
//!
//! Each calculator result converts into a [`ChartData`]. A [`ChartWidget`]
//! owns at most one live chart created by its [`ChartRenderer`]; rendering
//! again replaces the previous chart instead of leaking it.

use crate::budget::BudgetReport;
use crate::savings::label::{format_currency, format_months};
use crate::savings::ProjectionResult;
use crate::subscriptions::SubscriptionSummary;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Balance, deposits and deposits-plus-interest over the projection samples
    pub fn savings(result: &ProjectionResult) -> Self {
        let labels = result.samples.iter().map(|s| format_months(s.month_index)).collect();
        let balances = result.samples.iter().map(|s| s.balance).collect();
        let deposits: Vec<f64> = result
            .samples
            .iter()
            .map(|s| result.initial_balance + s.cumulative_contributions)
            .collect();
        let with_interest = result
            .samples
            .iter()
            .zip(&deposits)
            .map(|(s, deposited)| deposited + s.cumulative_interest)
            .collect();

        Self {
            kind: ChartKind::Line,
            labels,
            datasets: vec![
                Dataset { label: "Total Balance".to_string(), values: balances },
                Dataset { label: "Contributions".to_string(), values: deposits },
                Dataset { label: "Interest".to_string(), values: with_interest },
            ],
        }
    }

    /// Actual spend per budget category
    pub fn budget(report: &BudgetReport) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            labels: report.allocations.iter().map(|a| a.category.to_string()).collect(),
            datasets: vec![Dataset {
                label: "Spending".to_string(),
                values: report.allocations.iter().map(|a| a.actual).collect(),
            }],
        }
    }

    /// Monthly subscription cost per category
    pub fn subscriptions(summary: &SubscriptionSummary) -> Self {
        Self {
            kind: ChartKind::Pie,
            labels: summary.by_category.iter().map(|c| c.category.to_string()).collect(),
            datasets: vec![Dataset {
                label: "Monthly Cost".to_string(),
                values: summary.by_category.iter().map(|c| c.monthly_cost).collect(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Backend that draws charts and hands back a handle to the drawn instance
pub trait ChartRenderer {
    type Handle;

    fn create(&mut self, data: &ChartData) -> io::Result<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// A single chart slot owning its renderer and current instance
pub struct ChartWidget<R: ChartRenderer> {
    renderer: R,
    instance: Option<R::Handle>,
}

impl<R: ChartRenderer> ChartWidget<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer, instance: None }
    }

    /// Draw `data`, replacing any chart this widget already shows
    pub fn render(&mut self, data: &ChartData) -> io::Result<()> {
        self.destroy();
        let handle = self.renderer.create(data)?;
        self.instance = Some(handle);
        Ok(())
    }

    /// Release the current chart, if any
    pub fn destroy(&mut self) {
        if let Some(handle) = self.instance.take() {
            self.renderer.destroy(handle);
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.instance.is_some()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ChartRenderer> Drop for ChartWidget<R> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Renders charts as plain text tables
pub struct TableRenderer<W: Write> {
    out: W,
    drawn: usize,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, drawn: 0 }
    }
}

impl<W: Write> ChartRenderer for TableRenderer<W> {
    /// Sequence number of the drawn table
    type Handle = usize;

    fn create(&mut self, data: &ChartData) -> io::Result<usize> {
        let label_width = data.labels.iter().map(|l| l.len()).max().unwrap_or(0).max(8);

        write!(self.out, "{:<width$}", "", width = label_width)?;
        for dataset in &data.datasets {
            write!(self.out, " {:>16}", dataset.label)?;
        }
        writeln!(self.out)?;

        for (i, label) in data.labels.iter().enumerate() {
            write!(self.out, "{:<width$}", label, width = label_width)?;
            for dataset in &data.datasets {
                let value = dataset.values.get(i).copied().unwrap_or(0.0);
                write!(self.out, " {:>16}", format_currency(value))?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()?;

        self.drawn += 1;
        Ok(self.drawn)
    }

    fn destroy(&mut self, _handle: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::{ContributionFrequency, ProjectionEngine, ProjectionInput};

    #[derive(Default)]
    struct CountingRenderer {
        created: usize,
        destroyed: Vec<usize>,
    }

    impl ChartRenderer for &mut CountingRenderer {
        type Handle = usize;

        fn create(&mut self, _data: &ChartData) -> io::Result<usize> {
            self.created += 1;
            Ok(self.created)
        }

        fn destroy(&mut self, handle: usize) {
            self.destroyed.push(handle);
        }
    }

    fn savings_result() -> ProjectionResult {
        let input = ProjectionInput::new(1000.0, 100.0, 100.0, ContributionFrequency::Monthly, 0.0);
        ProjectionEngine::default().project(&input)
    }

    #[test]
    fn test_savings_chart_series() {
        let data = ChartData::savings(&savings_result());

        assert_eq!(data.kind, ChartKind::Line);
        assert_eq!(data.labels, vec!["6 months".to_string(), "9 months".to_string()]);
        assert_eq!(data.datasets[0].values, vec![700.0, 1000.0]);
        // Contributions include the initial balance
        assert_eq!(data.datasets[1].values, vec![700.0, 1000.0]);
        assert_eq!(data.datasets[2].values, vec![700.0, 1000.0]);
    }

    #[test]
    fn test_widget_destroys_previous_instance() {
        let mut counter = CountingRenderer::default();
        {
            let mut widget = ChartWidget::new(&mut counter);
            let data = ChartData::savings(&savings_result());
            widget.render(&data).unwrap();
            widget.render(&data).unwrap();
            assert!(widget.is_rendered());
        }
        assert_eq!(counter.created, 2);
        // First replaced on re-render, second released on drop
        assert_eq!(counter.destroyed, vec![1, 2]);
    }

    #[test]
    fn test_explicit_destroy() {
        let mut counter = CountingRenderer::default();
        {
            let mut widget = ChartWidget::new(&mut counter);
            widget.render(&ChartData::savings(&savings_result())).unwrap();
            widget.destroy();
            assert!(!widget.is_rendered());
            widget.destroy();
        }
        assert_eq!(counter.destroyed, vec![1]);
    }

    #[test]
    fn test_table_renderer_output() {
        let mut widget = ChartWidget::new(TableRenderer::new(Vec::new()));
        widget.render(&ChartData::savings(&savings_result())).unwrap();

        let text = String::from_utf8(widget.renderer().out.clone()).unwrap();
        assert!(text.contains("Total Balance"));
        assert!(text.contains("9 months"));
        assert!(text.contains("$1000.00"));
    }
}
