use bookdash_engine::ReportGenerator;
use bookdash_types::AuthorBookRow;

use crate::presentation::view_models::{
    AuthorBookViewModel, AuthorTableViewModel, CommandResultViewModel, Guidance, StatusBadge,
};

impl From<AuthorBookRow> for AuthorBookViewModel {
    fn from(row: AuthorBookRow) -> Self {
        Self {
            title: row.title,
            isbn: row.isbn,
            year_of_publication: row.year_of_publication,
            publisher: row.publisher,
            image_url: row.image_url,
            rating: row.rating,
        }
    }
}

pub fn build_author_table(report: &ReportGenerator<'_>, author: &str, n: usize) -> AuthorTableViewModel {
    AuthorTableViewModel {
        author: author.to_string(),
        limit: n,
        books: report
            .top_rated_by_author(author, n)
            .into_iter()
            .map(AuthorBookViewModel::from)
            .collect(),
    }
}

pub fn present_author(
    report: &ReportGenerator<'_>,
    author: &str,
    n: usize,
) -> CommandResultViewModel<AuthorTableViewModel> {
    let table = build_author_table(report, author, n);

    if table.books.is_empty() {
        return CommandResultViewModel::new(table)
            .with_badge(StatusBadge::warning(format!("No books by '{}'", author)))
            .with_suggestion(Guidance::new(
                "Author matching is case-sensitive and accepts any part of the name",
            ));
    }

    let badge = StatusBadge::info(format!(
        "Top {} rated books by {}",
        table.books.len(),
        author
    ));
    CommandResultViewModel::new(table).with_badge(badge)
}
