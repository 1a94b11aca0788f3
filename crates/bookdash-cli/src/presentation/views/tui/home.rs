use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::HomeViewModel;

pub struct HomePageView<'a> {
    model: &'a HomeViewModel,
}

impl<'a> HomePageView<'a> {
    pub fn new(model: &'a HomeViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HomePageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let link = Style::default().fg(Color::Cyan);

        let mut lines = vec![
            Line::from(Span::styled(self.model.heading.as_str(), bold)),
            Line::from(vec![
                Span::raw("A Web App by "),
                Span::styled(self.model.credit.name.as_str(), bold),
                Span::raw(" "),
                Span::styled(self.model.credit.github_url.as_str(), link),
            ]),
            Line::default(),
        ];
        for paragraph in &self.model.paragraphs {
            lines.push(Line::from(paragraph.as_str()));
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::raw("Created by "),
            Span::styled(self.model.credit.linkedin_url.as_str(), link),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.model.title.as_str())
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}
