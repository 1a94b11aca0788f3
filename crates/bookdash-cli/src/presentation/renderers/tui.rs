//! TUI Renderer (Router)
//!
//! Owns the terminal session and the page-level UI state. Data comes from
//! a [`DashboardSource`]; the renderer asks it for fresh view models
//! whenever the country selection changes and never computes aggregates
//! itself.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame, Terminal,
};

use crate::presentation::view_models::{DashboardViewModel, DataframeViewModel, HomeViewModel};
use crate::presentation::views::tui::components::{
    CountrySelectComponent, DashboardComponent, DataframeComponent, SelectionAction,
};
use crate::presentation::views::tui::{HomePageView, StatusBarView};

/// Where the TUI pulls its view models from.
pub trait DashboardSource {
    fn countries(&self) -> Vec<String>;
    fn home(&self) -> HomeViewModel;
    /// Empty `countries` means every country.
    fn dashboard(&self, countries: &[String]) -> DashboardViewModel;
    /// Empty `countries` selects no rows.
    fn dataframe(&self, countries: &[String]) -> DataframeViewModel;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    Dataframe,
}

impl Page {
    const ALL: [Page; 3] = [Page::Home, Page::Dashboard, Page::Dataframe];

    fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home Page",
            Page::Dashboard => "Dashboard",
            Page::Dataframe => "Dataframe",
        }
    }

    fn index(&self) -> usize {
        match self {
            Page::Home => 0,
            Page::Dashboard => 1,
            Page::Dataframe => 2,
        }
    }

    fn next(&self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(&self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct TuiRenderer<'s, S: DashboardSource> {
    source: &'s S,
    page: Page,
    countries: CountrySelectComponent,
    dashboard: DashboardComponent,
    dataframe: DataframeComponent,
    home_vm: HomeViewModel,
    dashboard_vm: DashboardViewModel,
    dataframe_vm: DataframeViewModel,
    should_quit: bool,
}

impl<'s, S: DashboardSource> TuiRenderer<'s, S> {
    pub fn new(source: &'s S) -> Self {
        let countries = CountrySelectComponent::new(source.countries());
        let selection = countries.selection();

        Self {
            source,
            page: Page::Home,
            countries,
            dashboard: DashboardComponent::new(),
            dataframe: DataframeComponent::new(),
            home_vm: source.home(),
            dashboard_vm: source.dashboard(&selection),
            dataframe_vm: source.dataframe(&selection),
            should_quit: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn dashboard_model(&self) -> &DashboardViewModel {
        &self.dashboard_vm
    }

    pub fn dataframe_model(&self) -> &DataframeViewModel {
        &self.dataframe_vm
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.page = self.page.next();
                return;
            }
            KeyCode::BackTab => {
                self.page = self.page.previous();
                return;
            }
            KeyCode::Char('1') => {
                self.page = Page::Home;
                return;
            }
            KeyCode::Char('2') => {
                self.page = Page::Dashboard;
                return;
            }
            KeyCode::Char('3') => {
                self.page = Page::Dataframe;
                return;
            }
            _ => {}
        }

        if self.page == Page::Home {
            return;
        }

        if let Some(SelectionAction::Changed) = self.countries.handle_input(key) {
            self.refresh();
            return;
        }

        match self.page {
            Page::Dashboard => self.dashboard.handle_input(key),
            Page::Dataframe => self
                .dataframe
                .handle_input(key, self.dataframe_vm.rows.len()),
            Page::Home => {}
        }
    }

    fn refresh(&mut self) {
        let selection = self.countries.selection();
        tracing::debug!(countries = ?selection, "country selection changed");

        self.dashboard_vm = self.source.dashboard(&selection);
        self.dataframe_vm = self.source.dataframe(&selection);
        self.dataframe.reset();
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

        let tabs = Tabs::new(Page::ALL.iter().map(|p| p.title()))
            .select(self.page.index())
            .block(Block::default().title("Menu").borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, chunks[0]);

        match self.page {
            Page::Home => {
                f.render_widget(HomePageView::new(&self.home_vm), chunks[1]);
            }
            Page::Dashboard | Page::Dataframe => {
                let columns = Layout::horizontal([Constraint::Length(26), Constraint::Min(20)])
                    .split(chunks[1]);
                self.countries.render(f, columns[0]);

                if self.page == Page::Dashboard {
                    self.dashboard.render(f, columns[1], &self.dashboard_vm);
                } else {
                    self.dataframe.render(f, columns[1], &self.dataframe_vm);
                }
            }
        }

        let selection = self.countries.selection();
        let message = if selection.is_empty() {
            "Countries: none selected".to_string()
        } else {
            format!("Countries: {}", selection.join(", "))
        };
        f.render_widget(StatusBarView::new(&message), chunks[2]);
    }
}
