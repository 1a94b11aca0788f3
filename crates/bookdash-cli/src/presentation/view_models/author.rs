use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AuthorBookViewModel {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub year_of_publication: Option<i32>,
    pub publisher: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorTableViewModel {
    pub author: String,
    pub limit: usize,
    pub books: Vec<AuthorBookViewModel>,
}
