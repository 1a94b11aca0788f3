use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{CreateView, DataframeViewModel, ViewMode};

impl CreateView for DataframeViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DataframeView { data: self, mode })
    }
}

struct DataframeView<'a> {
    data: &'a DataframeViewModel,
    mode: ViewMode,
}

impl<'a> DataframeView<'a> {
    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<36} {:<22} {:<16} {:>4} {:>6}",
            "TITLE", "AUTHOR", "COUNTRY", "AGE", "RATING"
        )?;
        writeln!(f, "{}", "-".repeat(88))?;

        for row in &self.data.rows {
            writeln!(
                f,
                "{} {} {} {:>4} {:>6}",
                text::fit(text::or_dash(row.title.as_deref()), 36),
                text::fit(text::or_dash(row.author.as_deref()), 22),
                text::fit(text::or_dash(row.country.as_deref()), 16),
                number::format_optional_number(row.age),
                number::format_optional_number(row.rating),
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<32} {:<20} {:<11} {:<5} {:<20} {:<14} {:>4} {:>6}  IMAGE",
            "TITLE", "AUTHOR", "ISBN", "YEAR", "PUBLISHER", "COUNTRY", "AGE", "RATING"
        )?;
        writeln!(f, "{}", "-".repeat(130))?;

        for row in &self.data.rows {
            writeln!(
                f,
                "{} {} {:<11} {:<5} {} {} {:>4} {:>6}  {}",
                text::fit(text::or_dash(row.title.as_deref()), 32),
                text::fit(text::or_dash(row.author.as_deref()), 20),
                text::or_dash(row.isbn.as_deref()),
                number::format_optional_number(row.year_of_publication),
                text::fit(text::or_dash(row.publisher.as_deref()), 20),
                text::fit(text::or_dash(row.country.as_deref()), 14),
                number::format_optional_number(row.age),
                number::format_optional_number(row.rating),
                text::or_dash(row.image_url.as_deref()).bright_black(),
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DataframeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.rows.is_empty() {
            return writeln!(f, "No rows match the selected countries.");
        }

        match self.mode {
            ViewMode::Compact => self.render_compact(f)?,
            ViewMode::Standard => self.render_standard(f)?,
        }

        if self.data.is_truncated() {
            writeln!(
                f,
                "{}",
                format!(
                    "... showing {} of {} rows",
                    self.data.rows.len(),
                    number::format_thousands(self.data.total_matches)
                )
                .bright_black()
            )?;
        }
        Ok(())
    }
}
