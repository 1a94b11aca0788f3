//! Dashboard page: KPIs on top, one chart section at a time below.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Tabs,
    Frame,
};

use crate::presentation::view_models::DashboardViewModel;
use crate::presentation::views::tui::{
    AuthorTablesView, BarChartWidget, CountryTitleTableView, KpiView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Countries,
    Age,
    Books,
    Authors,
}

impl DashboardSection {
    pub const ALL: [DashboardSection; 4] = [
        DashboardSection::Countries,
        DashboardSection::Age,
        DashboardSection::Books,
        DashboardSection::Authors,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardSection::Countries => "Country Distribution",
            DashboardSection::Age => "Age Distribution",
            DashboardSection::Books => "Book Ratings",
            DashboardSection::Authors => "Author Ratings",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

pub struct DashboardComponent {
    section: DashboardSection,
    scroll: u16,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            section: DashboardSection::Countries,
            scroll: 0,
        }
    }

    pub fn section(&self) -> DashboardSection {
        self.section
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        let index = self.section.index();
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.section = DashboardSection::ALL[(index + 1) % DashboardSection::ALL.len()];
                self.scroll = 0;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                let len = DashboardSection::ALL.len();
                self.section = DashboardSection::ALL[(index + len - 1) % len];
                self.scroll = 0;
            }
            KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, model: &DashboardViewModel) {
        let chunks = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .split(area);

        f.render_widget(KpiView::new(&model.kpis), chunks[0]);

        let tabs = Tabs::new(DashboardSection::ALL.iter().map(|s| s.title()))
            .select(self.section.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, chunks[1]);

        let body = chunks[2];
        match self.section {
            DashboardSection::Countries => {
                f.render_widget(BarChartWidget::new(&model.country_distribution), body);
            }
            DashboardSection::Age => {
                f.render_widget(BarChartWidget::new(&model.age_distribution), body);
            }
            DashboardSection::Books => {
                let halves =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .split(body);
                f.render_widget(BarChartWidget::new(&model.top_titles), halves[0]);
                f.render_widget(
                    CountryTitleTableView::new(&model.top_titles_per_country, self.scroll as usize),
                    halves[1],
                );
            }
            DashboardSection::Authors => {
                let chart_height = model.top_authors.bars.len() as u16 + 2;
                let rows =
                    Layout::vertical([Constraint::Length(chart_height.max(3)), Constraint::Min(3)])
                        .split(body);
                f.render_widget(BarChartWidget::new(&model.top_authors), rows[0]);
                f.render_widget(
                    AuthorTablesView::new(&model.featured_authors, self.scroll),
                    rows[1],
                );
            }
        }
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_sections_wrap_around() {
        let mut component = DashboardComponent::new();
        component.handle_input(key(KeyCode::Left));
        assert_eq!(component.section(), DashboardSection::Authors);

        component.handle_input(key(KeyCode::Right));
        component.handle_input(key(KeyCode::Right));
        assert_eq!(component.section(), DashboardSection::Age);
    }
}
