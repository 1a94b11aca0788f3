use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::presentation::view_models::DataframeViewModel;
use crate::presentation::views::tui::DataframeTableView;

const PAGE: usize = 10;

pub struct DataframeComponent {
    scroll: usize,
}

impl DataframeComponent {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Back to the first row, used when the selection changes.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn handle_input(&mut self, key: KeyEvent, row_count: usize) {
        let last = row_count.saturating_sub(1);
        self.scroll = match key.code {
            KeyCode::Char('j') => (self.scroll + 1).min(last),
            KeyCode::Char('k') => self.scroll.saturating_sub(1),
            KeyCode::PageDown => (self.scroll + PAGE).min(last),
            KeyCode::PageUp => self.scroll.saturating_sub(PAGE),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => self.scroll,
        };
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, model: &DataframeViewModel) {
        f.render_widget(DataframeTableView::new(model, self.scroll), area);
    }
}

impl Default for DataframeComponent {
    fn default() -> Self {
        Self::new()
    }
}
