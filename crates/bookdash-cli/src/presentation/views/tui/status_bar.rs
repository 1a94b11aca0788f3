use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bottom line: current selection on the left, key help on the right.
pub struct StatusBarView<'a> {
    message: &'a str,
}

impl<'a> StatusBarView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(inner);

        Paragraph::new(self.message).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[Tab/1-3]", key),
            Span::raw("page "),
            Span::styled("[←/→]", key),
            Span::raw("section "),
            Span::styled("[j/k]", key),
            Span::raw("scroll "),
            Span::styled("[↑/↓ space a]", key),
            Span::raw("countries"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
