use serde::{Deserialize, Serialize};

/// One (book, rater) observation from the ratings dataset.
///
/// Empty cells deserialize to `None`. Numeric cells that fail to parse are
/// also treated as missing so one malformed value never aborts a load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRating {
    #[serde(rename(deserialize = "Book-Title"), alias = "Title", default)]
    pub title: Option<String>,

    #[serde(rename(deserialize = "Book-Author"), alias = "Author", default)]
    pub author: Option<String>,

    #[serde(rename(deserialize = "ISBN"), default)]
    pub isbn: Option<String>,

    #[serde(
        rename(deserialize = "Year-Of-Publication"),
        alias = "YearOfPublication",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub year_of_publication: Option<i32>,

    #[serde(rename(deserialize = "Publisher"), default)]
    pub publisher: Option<String>,

    #[serde(rename(deserialize = "Country"), default)]
    pub country: Option<String>,

    #[serde(
        rename(deserialize = "Age"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub age: Option<f64>,

    #[serde(
        rename(deserialize = "Book-Rating"),
        alias = "Rating",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub rating: Option<f64>,

    #[serde(rename(deserialize = "Image-URL-L"), alias = "ImageURL", default)]
    pub image_url: Option<String>,
}

impl BookRating {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year_of_publication = Some(year);
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Age, ignoring NaN cells.
    pub fn known_age(&self) -> Option<f64> {
        self.age.filter(|a| !a.is_nan())
    }

    /// Rating, ignoring NaN cells.
    pub fn known_rating(&self) -> Option<f64> {
        self.rating.filter(|r| !r.is_nan())
    }
}

/// Columns a dataset file must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Author,
    Isbn,
    YearOfPublication,
    Publisher,
    Country,
    Age,
    Rating,
    ImageUrl,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Title,
        Column::Author,
        Column::Isbn,
        Column::YearOfPublication,
        Column::Publisher,
        Column::Country,
        Column::Age,
        Column::Rating,
        Column::ImageUrl,
    ];

    /// Header used by the published dataset.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Title => "Book-Title",
            Column::Author => "Book-Author",
            Column::Isbn => "ISBN",
            Column::YearOfPublication => "Year-Of-Publication",
            Column::Publisher => "Publisher",
            Column::Country => "Country",
            Column::Age => "Age",
            Column::Rating => "Book-Rating",
            Column::ImageUrl => "Image-URL-L",
        }
    }

    /// Alternative header accepted in place of [`Column::header`].
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            Column::Title => Some("Title"),
            Column::Author => Some("Author"),
            Column::YearOfPublication => Some("YearOfPublication"),
            Column::Rating => Some("Rating"),
            Column::ImageUrl => Some("ImageURL"),
            Column::Isbn | Column::Publisher | Column::Country | Column::Age => None,
        }
    }

    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim();
        header == self.header() || self.alias() == Some(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_one(data: &str) -> BookRating {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        reader
            .deserialize()
            .next()
            .expect("one row")
            .expect("row deserializes")
    }

    #[test]
    fn test_deserialize_published_headers() {
        let row = read_one(
            "Book-Title,Book-Author,ISBN,Year-Of-Publication,Publisher,Country,Age,Book-Rating,Image-URL-L\n\
             Carrie,Stephen King,0385086954,1974,Doubleday,usa,34,9,http://img/l.jpg\n",
        );

        assert_eq!(row.title.as_deref(), Some("Carrie"));
        assert_eq!(row.author.as_deref(), Some("Stephen King"));
        assert_eq!(row.isbn.as_deref(), Some("0385086954"));
        assert_eq!(row.year_of_publication, Some(1974));
        assert_eq!(row.country.as_deref(), Some("usa"));
        assert_eq!(row.age, Some(34.0));
        assert_eq!(row.rating, Some(9.0));
        assert_eq!(row.image_url.as_deref(), Some("http://img/l.jpg"));
    }

    #[test]
    fn test_deserialize_aliases_and_missing_cells() {
        let row = read_one(
            "Title,Author,ISBN,YearOfPublication,Publisher,Country,Age,Rating,ImageURL\n\
             Dune,,,not-a-year,,,,,\n",
        );

        assert_eq!(row.title.as_deref(), Some("Dune"));
        assert_eq!(row.author, None);
        assert_eq!(row.year_of_publication, None);
        assert_eq!(row.country, None);
        assert_eq!(row.age, None);
        assert_eq!(row.rating, None);
    }

    #[test]
    fn test_malformed_numbers_become_missing() {
        let row = read_one("Book-Title,Age,Book-Rating\nIt,old,great\n");
        assert_eq!(row.age, None);
        assert_eq!(row.rating, None);
    }

    #[test]
    fn test_known_values_skip_nan() {
        let row = BookRating::new("x").with_age(f64::NAN).with_rating(7.0);
        assert_eq!(row.known_age(), None);
        assert_eq!(row.known_rating(), Some(7.0));
    }

    #[test]
    fn test_column_matches_header_or_alias() {
        assert!(Column::Title.matches("Book-Title"));
        assert!(Column::Title.matches(" Title "));
        assert!(!Column::Title.matches("Book-Author"));
        assert!(Column::Country.matches("Country"));
        assert_eq!(Column::Country.alias(), None);
    }
}
