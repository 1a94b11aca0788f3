use serde::Serialize;

use super::author::AuthorTableViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct KpiViewModel {
    pub total_books: usize,
    /// `None` when no record carries a rating
    pub average_rating: Option<f64>,
    pub stars: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarViewModel {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChartViewModel {
    pub title: String,
    pub value_label: String,
    pub bars: Vec<BarViewModel>,
}

impl BarChartViewModel {
    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryTitleRowViewModel {
    pub country: String,
    pub title: String,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub kpis: KpiViewModel,
    pub country_distribution: BarChartViewModel,
    pub age_distribution: BarChartViewModel,
    pub top_titles: BarChartViewModel,
    /// Empty means every country
    pub selected_countries: Vec<String>,
    pub top_titles_per_country: Vec<CountryTitleRowViewModel>,
    pub top_authors: BarChartViewModel,
    pub featured_authors: Vec<AuthorTableViewModel>,
}
