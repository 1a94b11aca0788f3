use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Widget},
};

use super::header_style;
use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{
    AuthorTableViewModel, CountryTitleRowViewModel, DataframeViewModel,
};

/// Per-country ranking, starting at row `scroll`.
pub struct CountryTitleTableView<'a> {
    rows: &'a [CountryTitleRowViewModel],
    scroll: usize,
}

impl<'a> CountryTitleTableView<'a> {
    pub fn new(rows: &'a [CountryTitleRowViewModel], scroll: usize) -> Self {
        Self { rows, scroll }
    }
}

impl<'a> Widget for CountryTitleTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Top Books per Country")
            .borders(Borders::ALL);

        if self.rows.is_empty() {
            Paragraph::new("No data").block(block).render(area, buf);
            return;
        }

        let scroll = self.scroll.min(self.rows.len() - 1);
        let rows = self.rows[scroll..].iter().map(|r| {
            Row::new(vec![
                r.country.clone(),
                r.title.clone(),
                r.occurrences.to_string(),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Min(20),
                Constraint::Length(6),
            ],
        )
        .header(Row::new(vec!["Country", "Title", "Count"]).style(header_style()))
        .block(block)
        .render(area, buf);
    }
}

/// Featured-author tables stacked as text, starting at line `scroll`.
pub struct AuthorTablesView<'a> {
    tables: &'a [AuthorTableViewModel],
    scroll: u16,
}

impl<'a> AuthorTablesView<'a> {
    pub fn new(tables: &'a [AuthorTableViewModel], scroll: u16) -> Self {
        Self { tables, scroll }
    }
}

impl<'a> Widget for AuthorTablesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        for table in self.tables {
            lines.push(Line::from(Span::styled(
                format!("Top {} books by author {}", table.limit, table.author),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            if table.books.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  No books found",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for book in &table.books {
                lines.push(Line::from(format!(
                    "  {:>4}  {}  {}  ({}, {})",
                    number::format_optional_number(book.rating),
                    text::fit(text::or_dash(book.title.as_deref()), 40),
                    text::or_dash(book.isbn.as_deref()),
                    text::or_dash(book.publisher.as_deref()),
                    number::format_optional_number(book.year_of_publication),
                )));
            }
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .block(Block::default().title("Featured Authors").borders(Borders::ALL))
            .render(area, buf);
    }
}

/// Dataframe rows, starting at row `scroll`.
pub struct DataframeTableView<'a> {
    model: &'a DataframeViewModel,
    scroll: usize,
}

impl<'a> DataframeTableView<'a> {
    pub fn new(model: &'a DataframeViewModel, scroll: usize) -> Self {
        Self { model, scroll }
    }
}

impl<'a> Widget for DataframeTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            "Dataframe ({} rows)",
            number::format_thousands(self.model.total_matches)
        );
        let block = Block::default().title(title).borders(Borders::ALL);

        if self.model.rows.is_empty() {
            let message = if self.model.selected_countries.is_empty() {
                "Select at least one country"
            } else {
                "No rows match the selected countries"
            };
            Paragraph::new(message).block(block).render(area, buf);
            return;
        }

        let scroll = self.scroll.min(self.model.rows.len() - 1);
        let rows = self.model.rows[scroll..].iter().map(|r| {
            Row::new(vec![
                text::or_dash(r.title.as_deref()).to_string(),
                text::or_dash(r.author.as_deref()).to_string(),
                text::or_dash(r.isbn.as_deref()).to_string(),
                number::format_optional_number(r.year_of_publication),
                text::or_dash(r.publisher.as_deref()).to_string(),
                text::or_dash(r.country.as_deref()).to_string(),
                number::format_optional_number(r.age),
                number::format_optional_number(r.rating),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(20),
                Constraint::Length(11),
                Constraint::Length(5),
                Constraint::Length(18),
                Constraint::Length(14),
                Constraint::Length(4),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec![
                "Title", "Author", "ISBN", "Year", "Publisher", "Country", "Age", "Rating",
            ])
            .style(header_style()),
        )
        .block(block)
        .render(area, buf);
    }
}
