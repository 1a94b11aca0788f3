use crate::{AgeBucket, BookRating};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleCount {
    pub title: String,
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBucketCount {
    pub bucket: AgeBucket,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryTitleCount {
    pub country: String,
    pub title: String,
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCount {
    pub author: String,
    pub books: usize,
}

/// Fixed column subset shown in the per-author tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorBookRow {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub year_of_publication: Option<i32>,
    pub publisher: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
}

impl From<&BookRating> for AuthorBookRow {
    fn from(record: &BookRating) -> Self {
        Self {
            title: record.title.clone(),
            isbn: record.isbn.clone(),
            year_of_publication: record.year_of_publication,
            publisher: record.publisher.clone(),
            image_url: record.image_url.clone(),
            rating: record.rating,
        }
    }
}
