use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub data_path: String,
    pub data_exists: bool,
    pub config_path: String,
    pub config_exists: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub config_exists: bool,
    pub data_path: String,
    pub image_path: String,
    pub top_titles: usize,
    pub top_titles_per_country: usize,
    pub top_authors: usize,
    pub top_rated_per_author: usize,
    pub featured_authors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub config_path: String,
    pub overwritten: bool,
}
