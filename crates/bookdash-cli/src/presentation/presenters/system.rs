use bookdash_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, GuidanceViewModel,
    StatusBadge,
};

pub fn present_guidance(
    config_path: &Path,
    data_path: &Path,
) -> CommandResultViewModel<GuidanceViewModel> {
    let content = GuidanceViewModel {
        data_path: data_path.display().to_string(),
        data_exists: data_path.is_file(),
        config_path: config_path.display().to_string(),
        config_exists: config_path.is_file(),
    };

    let mut result = CommandResultViewModel::new(content);
    if !data_path.is_file() {
        result = result.with_suggestion(
            Guidance::new("Point bookdash at your ratings CSV")
                .with_command("bookdash --data dataviz.csv home"),
        );
    }
    if !config_path.is_file() {
        result = result
            .with_suggestion(Guidance::new("Save your defaults").with_command("bookdash config init"));
    }
    result
}

pub fn present_config(config_path: &Path, config: &Config) -> CommandResultViewModel<ConfigViewModel> {
    let settings = &config.dashboard;
    let content = ConfigViewModel {
        config_path: config_path.display().to_string(),
        config_exists: config_path.is_file(),
        data_path: config.data_path.display().to_string(),
        image_path: config.image_path.display().to_string(),
        top_titles: settings.top_titles,
        top_titles_per_country: settings.top_titles_per_country,
        top_authors: settings.top_authors,
        top_rated_per_author: settings.top_rated_per_author,
        featured_authors: settings.featured_authors.clone(),
    };

    let mut result = CommandResultViewModel::new(content);
    if !config_path.is_file() {
        result = result
            .with_badge(StatusBadge::info("No config file, showing defaults"))
            .with_suggestion(Guidance::new("Write the defaults to disk").with_command("bookdash config init"));
    }
    result
}

pub fn present_config_init(
    config_path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        config_path: config_path.display().to_string(),
        overwritten,
    };
    let label = if overwritten {
        "Config file replaced"
    } else {
        "Config file created"
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(label))
        .with_suggestion(
            Guidance::new("Edit featured_authors to choose the author tables")
                .with_command(format!("$EDITOR {}", config_path.display())),
        )
}
