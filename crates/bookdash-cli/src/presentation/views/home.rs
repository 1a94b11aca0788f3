use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::number;
use crate::presentation::view_models::{CreateView, HomeViewModel, ViewMode};

impl CreateView for HomeViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(HomeView { data: self, mode })
    }
}

struct HomeView<'a> {
    data: &'a HomeViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for HomeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.title.bold().underline())?;
        writeln!(f)?;
        writeln!(f, "{}", self.data.heading.bold())?;
        writeln!(
            f,
            "A Web App by {} ({})",
            self.data.credit.name.bold(),
            self.data.credit.github_url.cyan()
        )?;
        writeln!(f)?;

        if self.mode == ViewMode::Compact {
            if let Some(first) = self.data.paragraphs.first() {
                writeln!(f, "{}", first)?;
            }
        } else {
            for paragraph in &self.data.paragraphs {
                writeln!(f, "{}", paragraph)?;
                writeln!(f)?;
            }
        }

        writeln!(
            f,
            "{} {} rows loaded",
            "Dataset:".bright_black(),
            number::format_thousands(self.data.record_count)
        )?;
        if let Some(image) = &self.data.image_path {
            writeln!(f, "{} {}", "Image:".bright_black(), image)?;
        }
        writeln!(
            f,
            "{} {}",
            "Created by".bright_black(),
            self.data.credit.linkedin_url.cyan()
        )
    }
}
