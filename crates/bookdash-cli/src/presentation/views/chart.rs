use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::text;
use crate::presentation::view_models::BarChartViewModel;

const MAX_LABEL_WIDTH: usize = 32;

/// Horizontal bar chart drawn with block characters.
pub struct BarChartView<'a> {
    data: &'a BarChartViewModel,
    width: usize,
}

impl<'a> BarChartView<'a> {
    pub fn new(data: &'a BarChartViewModel) -> Self {
        Self::with_width(data, text::terminal_width())
    }

    pub fn with_width(data: &'a BarChartViewModel, width: usize) -> Self {
        Self { data, width }
    }
}

impl<'a> fmt::Display for BarChartView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.title.bold())?;

        if self.data.bars.is_empty() {
            return writeln!(f, "  {}", "No data".bright_black());
        }

        let label_width = self
            .data
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);
        let max_value = self.data.max_value();
        let value_width = max_value.to_string().len();
        let bar_width = self
            .width
            .saturating_sub(label_width + value_width + 6)
            .max(10);

        for bar in &self.data.bars {
            let filled = if max_value == 0 {
                0
            } else {
                ((bar.value as f64 / max_value as f64) * bar_width as f64).round() as usize
            };
            writeln!(
                f,
                "  {} {} {:>value_width$}",
                text::fit(&bar.label, label_width),
                "█".repeat(filled.max(1)).cyan(),
                bar.value,
            )?;
        }
        writeln!(f, "  {}", format!("({})", self.data.value_label).bright_black())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::BarViewModel;

    fn chart(bars: &[(&str, u64)]) -> BarChartViewModel {
        BarChartViewModel {
            title: "Countries".to_string(),
            value_label: "Rating Count".to_string(),
            bars: bars
                .iter()
                .map(|(label, value)| BarViewModel {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_chart_says_no_data() {
        let out = BarChartView::with_width(&chart(&[]), 80).to_string();
        assert!(out.contains("No data"));
    }

    #[test]
    fn test_longest_bar_belongs_to_max_value() {
        let vm = chart(&[("usa", 40), ("canada", 10)]);
        let out = BarChartView::with_width(&vm, 80).to_string();

        let widths: Vec<usize> = out
            .lines()
            .filter(|l| l.contains('█'))
            .map(|l| l.matches('█').count())
            .collect();
        assert_eq!(widths.len(), 2);
        assert!(widths[0] > widths[1]);
        assert!(out.contains("usa"));
        assert!(out.contains("40"));
    }
}
