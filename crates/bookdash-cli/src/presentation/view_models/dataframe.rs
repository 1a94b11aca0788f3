use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecordRowViewModel {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub year_of_publication: Option<i32>,
    pub publisher: Option<String>,
    pub country: Option<String>,
    pub age: Option<f64>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataframeViewModel {
    pub selected_countries: Vec<String>,
    pub total_matches: usize,
    pub rows: Vec<RecordRowViewModel>,
}

impl DataframeViewModel {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_matches
    }
}
