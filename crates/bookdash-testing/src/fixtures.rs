//! Dataset fixtures written with the production column headers.

use anyhow::Result;
use bookdash_types::{BookRating, Column};
use std::path::Path;

/// Builds a ratings CSV from [`BookRating`] values.
///
/// # Example
/// ```
/// use bookdash_testing::DatasetBuilder;
/// use bookdash_types::BookRating;
///
/// let csv = DatasetBuilder::new()
///     .record(BookRating::new("Carrie").with_author("Stephen King"))
///     .to_csv()
///     .unwrap();
/// assert!(csv.starts_with("Book-Title,Book-Author"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    records: Vec<BookRating>,
    skip: Option<Column>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, record: BookRating) -> Self {
        self.records.push(record);
        self
    }

    pub fn records(mut self, records: impl IntoIterator<Item = BookRating>) -> Self {
        self.records.extend(records);
        self
    }

    /// Leave one column out of the header and the rows.
    pub fn without_column(mut self, column: Column) -> Self {
        self.skip = Some(column);
        self
    }

    pub fn to_csv(&self) -> Result<String> {
        let columns: Vec<Column> = Column::ALL
            .into_iter()
            .filter(|c| Some(*c) != self.skip)
            .collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(columns.iter().map(|c| c.header()))?;
        for record in &self.records {
            writer.write_record(columns.iter().map(|c| cell(record, *c)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_csv()?)?;
        Ok(())
    }
}

fn cell(record: &BookRating, column: Column) -> String {
    fn text(value: &Option<String>) -> String {
        value.clone().unwrap_or_default()
    }
    fn number<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    match column {
        Column::Title => text(&record.title),
        Column::Author => text(&record.author),
        Column::Isbn => text(&record.isbn),
        Column::YearOfPublication => number(record.year_of_publication),
        Column::Publisher => text(&record.publisher),
        Column::Country => text(&record.country),
        Column::Age => number(record.age),
        Column::Rating => number(record.rating),
        Column::ImageUrl => text(&record.image_url),
    }
}

/// A small dataset covering every page: three countries, several ages,
/// repeated titles and two of the default featured authors.
pub fn sample_records() -> Vec<BookRating> {
    let king = |title: &str, country: &str, age: f64, rating: f64| {
        BookRating::new(title)
            .with_author("Stephen King")
            .with_isbn("0451169514")
            .with_year(1987)
            .with_publisher("Signet Book")
            .with_country(country)
            .with_age(age)
            .with_rating(rating)
    };

    vec![
        king("It", "usa", 23.0, 9.0),
        king("Misery", "usa", 35.0, 8.0),
        king("It", "canada", 61.0, 10.0),
        BookRating::new("The Pelican Brief")
            .with_author("John Grisham")
            .with_isbn("0440214041")
            .with_year(1993)
            .with_publisher("Dell")
            .with_country("usa")
            .with_age(44.0)
            .with_rating(7.0),
        BookRating::new("Wild Animus")
            .with_author("Rich Shapero")
            .with_isbn("0971880107")
            .with_year(2004)
            .with_publisher("Too Far")
            .with_country("canada")
            .with_age(17.0),
        BookRating::new("The Lovely Bones: A Novel")
            .with_author("Alice Sebold")
            .with_isbn("0316666343")
            .with_year(2002)
            .with_publisher("Little, Brown")
            .with_country("united kingdom")
            .with_rating(6.0),
    ]
}
