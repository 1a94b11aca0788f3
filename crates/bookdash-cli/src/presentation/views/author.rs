use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{AuthorTableViewModel, CreateView, ViewMode};

impl CreateView for AuthorTableViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(AuthorTableView::new(self, mode))
    }
}

pub struct AuthorTableView<'a> {
    data: &'a AuthorTableViewModel,
    mode: ViewMode,
}

impl<'a> AuthorTableView<'a> {
    pub fn new(data: &'a AuthorTableViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for AuthorTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            format!("Top {} books by author {}", self.data.limit, self.data.author).bold()
        )?;

        if self.data.books.is_empty() {
            return writeln!(f, "  {}", "No books found".bright_black());
        }

        if self.mode == ViewMode::Compact {
            for book in &self.data.books {
                writeln!(
                    f,
                    "  {:>4}  {}",
                    number::format_optional_number(book.rating),
                    text::or_dash(book.title.as_deref())
                )?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "  {:<40} {:<12} {:<6} {:<24} {:>6}",
            "TITLE", "ISBN", "YEAR", "PUBLISHER", "RATING"
        )?;
        writeln!(f, "  {}", "-".repeat(92))?;
        for book in &self.data.books {
            writeln!(
                f,
                "  {} {:<12} {:<6} {} {:>6}",
                text::fit(text::or_dash(book.title.as_deref()), 40),
                text::or_dash(book.isbn.as_deref()),
                number::format_optional_number(book.year_of_publication),
                text::fit(text::or_dash(book.publisher.as_deref()), 24),
                number::format_optional_number(book.rating),
            )?;
            if let Some(url) = &book.image_url {
                writeln!(f, "  {}", url.bright_black())?;
            }
        }
        Ok(())
    }
}
