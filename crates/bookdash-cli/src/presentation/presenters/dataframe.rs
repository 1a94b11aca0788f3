use bookdash_engine::RecordSet;
use bookdash_types::BookRating;

use crate::presentation::view_models::{
    CommandResultViewModel, DataframeViewModel, Guidance, RecordRowViewModel, StatusBadge,
};

impl From<&BookRating> for RecordRowViewModel {
    fn from(record: &BookRating) -> Self {
        Self {
            title: record.title.clone(),
            author: record.author.clone(),
            isbn: record.isbn.clone(),
            year_of_publication: record.year_of_publication,
            publisher: record.publisher.clone(),
            country: record.country.clone(),
            age: record.age,
            rating: record.rating,
            image_url: record.image_url.clone(),
        }
    }
}

/// Rows of the selected countries. `limit` of `None` keeps every row.
pub fn build_dataframe(
    records: &RecordSet,
    countries: &[String],
    limit: Option<usize>,
) -> DataframeViewModel {
    let matches = records.records_in_countries(countries);
    let total_matches = matches.len();
    let rows = matches
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(RecordRowViewModel::from)
        .collect();

    DataframeViewModel {
        selected_countries: countries.to_vec(),
        total_matches,
        rows,
    }
}

pub fn present_dataframe(
    records: &RecordSet,
    countries: &[String],
    limit: Option<usize>,
) -> CommandResultViewModel<DataframeViewModel> {
    let content = build_dataframe(records, countries, limit);

    if countries.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("No country selected"))
            .with_suggestion(
                Guidance::new("Pick one or more countries").with_command("bookdash dataframe --country usa"),
            );
    }

    let badge = StatusBadge::info(format!(
        "{} rows in {}",
        content.total_matches,
        countries.join(", ")
    ));
    let truncated = content.is_truncated();
    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if truncated {
        result = result.with_suggestion(
            Guidance::new("Print every matching row").with_command(show_all_command(countries)),
        );
    }
    result
}

/// Same selection, no row limit
fn show_all_command(countries: &[String]) -> String {
    let mut command = String::from("bookdash dataframe");
    for country in countries {
        if country.contains(' ') {
            command.push_str(&format!(" --country '{}'", country));
        } else {
            command.push_str(&format!(" --country {}", country));
        }
    }
    command.push_str(" --limit 0");
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> RecordSet {
        RecordSet::new(vec![
            BookRating::new("A").with_country("usa"),
            BookRating::new("B").with_country("canada"),
            BookRating::new("C").with_country("usa"),
        ])
    }

    #[test]
    fn test_limit_keeps_total() {
        let vm = build_dataframe(&records(), &["usa".to_string()], Some(1));
        assert_eq!(vm.total_matches, 2);
        assert_eq!(vm.rows.len(), 1);
        assert!(vm.is_truncated());
    }

    #[test]
    fn test_truncation_tip_keeps_selection() {
        let countries = vec!["usa".to_string(), "united kingdom".to_string()];
        let result = present_dataframe(&records(), &countries, Some(1));

        let commands: Vec<_> = result
            .suggestions
            .iter()
            .filter_map(|s| s.command.as_deref())
            .collect();
        assert_eq!(
            commands,
            vec!["bookdash dataframe --country usa --country 'united kingdom' --limit 0"]
        );
    }

    #[test]
    fn test_no_tip_when_everything_fits() {
        let result = present_dataframe(&records(), &["usa".to_string()], None);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_empty_selection_warns() {
        let result = present_dataframe(&records(), &[], None);
        assert!(result.content.rows.is_empty());
        assert_eq!(
            result.badge.map(|b| b.label),
            Some("No country selected".to_string())
        );
    }
}
