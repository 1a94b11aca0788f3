//! Country multiselect sidebar shared by the Dashboard and Dataframe pages.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Changed,
}

pub struct CountrySelectComponent {
    countries: Vec<String>,
    selected: Vec<bool>,
    list_state: ListState,
}

impl CountrySelectComponent {
    /// The first country starts selected.
    pub fn new(countries: Vec<String>) -> Self {
        let mut selected = vec![false; countries.len()];
        if let Some(first) = selected.first_mut() {
            *first = true;
        }

        let mut list_state = ListState::default();
        if !countries.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            countries,
            selected,
            list_state,
        }
    }

    /// Selected countries in sidebar order.
    pub fn selection(&self) -> Vec<String> {
        self.countries
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|(country, _)| country.clone())
            .collect()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SelectionAction> {
        if self.countries.is_empty() {
            return None;
        }

        let cursor = self.list_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Up => {
                self.list_state.select(Some(cursor.saturating_sub(1)));
                None
            }
            KeyCode::Down => {
                let last = self.countries.len() - 1;
                self.list_state.select(Some((cursor + 1).min(last)));
                None
            }
            KeyCode::Char(' ') => {
                let slot = self.selected.get_mut(cursor)?;
                *slot = !*slot;
                Some(SelectionAction::Changed)
            }
            KeyCode::Char('a') => {
                if self.selected.iter().any(|on| *on) {
                    self.selected.iter_mut().for_each(|on| *on = false);
                    Some(SelectionAction::Changed)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .countries
            .iter()
            .zip(&self.selected)
            .map(|(country, on)| {
                let mark = if *on { "[x]" } else { "[ ]" };
                ListItem::new(format!("{} {}", mark, country))
            })
            .collect();

        let count = self.selected.iter().filter(|on| **on).count();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Countries ({})", count))
                    .borders(Borders::ALL),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn component() -> CountrySelectComponent {
        CountrySelectComponent::new(vec![
            "usa".to_string(),
            "canada".to_string(),
            "spain".to_string(),
        ])
    }

    #[test]
    fn test_first_country_selected_by_default() {
        assert_eq!(component().selection(), vec!["usa"]);
    }

    #[test]
    fn test_toggle_under_cursor() {
        let mut select = component();
        assert_eq!(select.handle_input(key(KeyCode::Down)), None);
        assert_eq!(
            select.handle_input(key(KeyCode::Char(' '))),
            Some(SelectionAction::Changed)
        );
        assert_eq!(select.selection(), vec!["usa", "canada"]);

        select.handle_input(key(KeyCode::Up));
        select.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(select.selection(), vec!["canada"]);
    }

    #[test]
    fn test_clear_and_cursor_bounds() {
        let mut select = component();
        for _ in 0..10 {
            select.handle_input(key(KeyCode::Down));
        }
        select.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(select.selection(), vec!["usa", "spain"]);

        assert_eq!(
            select.handle_input(key(KeyCode::Char('a'))),
            Some(SelectionAction::Changed)
        );
        assert!(select.selection().is_empty());
        assert_eq!(select.handle_input(key(KeyCode::Char('a'))), None);
    }

    #[test]
    fn test_empty_list_ignores_keys() {
        let mut select = CountrySelectComponent::new(Vec::new());
        assert_eq!(select.handle_input(key(KeyCode::Char(' '))), None);
        assert!(select.selection().is_empty());
    }
}
