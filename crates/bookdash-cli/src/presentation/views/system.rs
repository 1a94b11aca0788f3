use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, GuidanceViewModel, ViewMode,
};

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bookdash - Book rating dataset explorer\n")?;

        let marker = |exists: bool| if exists { "found" } else { "missing" };
        writeln!(f, "Dataset: {} ({})", self.data.data_path, marker(self.data.data_exists))?;
        writeln!(f, "Config:  {} ({})\n", self.data.config_path, marker(self.data.config_exists))?;

        writeln!(f, "Pages:")?;
        writeln!(f, "  bookdash home                      # Welcome page")?;
        writeln!(f, "  bookdash dashboard                 # KPIs, charts and rankings")?;
        writeln!(f, "  bookdash dataframe --country usa   # Raw rows of some countries")?;
        writeln!(f, "  bookdash author \"Stephen King\"     # Top-rated books of an author")?;
        writeln!(f, "  bookdash tui                       # Interactive dashboard\n")?;

        writeln!(f, "For more commands:")?;
        writeln!(f, "  bookdash --help")
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", "Config file:".bold(), self.data.config_path)?;
        writeln!(f, "  {:<24} {}", "data_path", self.data.data_path)?;
        writeln!(f, "  {:<24} {}", "image_path", self.data.image_path)?;
        writeln!(f, "{}", "[dashboard]".bold())?;
        writeln!(f, "  {:<24} {}", "top_titles", self.data.top_titles)?;
        writeln!(f, "  {:<24} {}", "top_titles_per_country", self.data.top_titles_per_country)?;
        writeln!(f, "  {:<24} {}", "top_authors", self.data.top_authors)?;
        writeln!(f, "  {:<24} {}", "top_rated_per_author", self.data.top_rated_per_author)?;
        writeln!(f, "  {:<24} {}", "featured_authors", self.data.featured_authors.join(", "))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote default settings to {}", self.data.config_path.cyan())
    }
}
