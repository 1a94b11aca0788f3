use std::fmt;

use owo_colors::OwoColorize;

use super::author::AuthorTableView;
use super::chart::BarChartView;
use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{CreateView, DashboardViewModel, ViewMode};

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DashboardView { data: self, mode })
    }
}

struct DashboardView<'a> {
    data: &'a DashboardViewModel,
    mode: ViewMode,
}

impl<'a> DashboardView<'a> {
    fn render_kpis(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kpis = &self.data.kpis;
        writeln!(f, "{}", "Overview:".bold().underline())?;
        writeln!(
            f,
            "  {:<18} {}",
            "Total of Books:",
            number::format_thousands(kpis.total_books).bold()
        )?;
        writeln!(
            f,
            "  {:<18} {} {}",
            "Average Rating:",
            number::format_average(kpis.average_rating).bold(),
            number::format_stars(kpis.stars)
        )
    }

    fn render_per_country(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let scope = if self.data.selected_countries.is_empty() {
            "all countries".to_string()
        } else {
            self.data.selected_countries.join(", ")
        };
        writeln!(f, "{} ({})", "Top Books per Country".bold(), scope.cyan())?;

        if self.data.top_titles_per_country.is_empty() {
            return writeln!(f, "  {}", "No data".bright_black());
        }

        let mut current: Option<&str> = None;
        for row in &self.data.top_titles_per_country {
            if current != Some(row.country.as_str()) {
                writeln!(f, "  {}", row.country.yellow())?;
                current = Some(row.country.as_str());
            }
            writeln!(f, "    {:>5}  {}", row.occurrences, text::truncate(&row.title, 70))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_kpis(f)?;

        writeln!(f, "\n{}", "# Country Distribution".bold())?;
        writeln!(f, "{}", BarChartView::new(&self.data.country_distribution))?;

        writeln!(f, "{}", "# Age Distribution".bold())?;
        writeln!(f, "{}", BarChartView::new(&self.data.age_distribution))?;

        writeln!(f, "{}", "# Book Ratings".bold())?;
        write!(f, "{}", BarChartView::new(&self.data.top_titles))?;

        if self.mode == ViewMode::Compact {
            return Ok(());
        }

        writeln!(f)?;
        self.render_per_country(f)?;

        writeln!(f, "\n{}", "# Author Ratings".bold())?;
        write!(f, "{}", BarChartView::new(&self.data.top_authors))?;

        for table in &self.data.featured_authors {
            writeln!(f)?;
            write!(f, "{}", AuthorTableView::new(table, self.mode))?;
        }
        Ok(())
    }
}
