use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{BarChartViewModel, KpiViewModel};

const LABEL_WIDTH: usize = 28;

/// Horizontal bar chart, one row per bar.
pub struct BarChartWidget<'a> {
    model: &'a BarChartViewModel,
}

impl<'a> BarChartWidget<'a> {
    pub fn new(model: &'a BarChartViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for BarChartWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.model.title.as_str())
            .borders(Borders::ALL);

        if self.model.bars.is_empty() {
            Paragraph::new("No data").block(block).render(area, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .model
            .bars
            .iter()
            .map(|b| {
                Bar::default()
                    .value(b.value)
                    .label(Line::from(text::truncate(&b.label, LABEL_WIDTH)))
                    .text_value(b.value.to_string())
            })
            .collect();

        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

/// The two headline numbers of the Dashboard page.
pub struct KpiView<'a> {
    model: &'a KpiViewModel,
}

impl<'a> KpiView<'a> {
    pub fn new(model: &'a KpiViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for KpiView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(vec![
                Span::raw("Total of Books: "),
                Span::styled(number::format_thousands(self.model.total_books), bold),
            ]),
            Line::from(vec![
                Span::raw("Average Rating: "),
                Span::styled(number::format_average(self.model.average_rating), bold),
                Span::raw(" "),
                Span::raw(number::format_stars(self.model.stars)),
            ]),
        ];

        Paragraph::new(lines)
            .block(Block::default().title("Overview").borders(Borders::ALL))
            .render(area, buf);
    }
}
