use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreditViewModel {
    pub name: String,
    pub github_url: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeViewModel {
    pub title: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub credit: CreditViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    pub record_count: usize,
}
