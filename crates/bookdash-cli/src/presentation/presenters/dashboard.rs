use bookdash_engine::{star_rating, ReportGenerator};
use bookdash_runtime::DashboardConfig;

use super::author::build_author_table;
use crate::presentation::view_models::{
    BarChartViewModel, BarViewModel, CommandResultViewModel, CountryTitleRowViewModel,
    DashboardViewModel, Guidance, KpiViewModel, StatusBadge,
};

/// Assemble every section of the Dashboard page.
///
/// `countries` only narrows the per-country ranking; an empty slice means
/// every country.
pub fn build_dashboard(
    report: &ReportGenerator<'_>,
    settings: &DashboardConfig,
    countries: &[String],
) -> DashboardViewModel {
    let average_rating = report.average_rating();

    let kpis = KpiViewModel {
        total_books: report.total_count(),
        average_rating,
        stars: average_rating.map(star_rating).unwrap_or(0),
    };

    let country_distribution = BarChartViewModel {
        title: "The Country with more ratings rated".to_string(),
        value_label: "Rating Count".to_string(),
        bars: report
            .country_distribution()
            .into_iter()
            .map(|c| bar(c.country, c.count))
            .collect(),
    };

    let age_distribution = BarChartViewModel {
        title: "Distribution of Books by Age Category".to_string(),
        value_label: "Count".to_string(),
        bars: report
            .age_distribution()
            .into_iter()
            .map(|a| bar(a.bucket.label().to_string(), a.count))
            .collect(),
    };

    let top_titles = BarChartViewModel {
        title: format!("Top {} of books with more ratings", settings.top_titles),
        value_label: "Ratings".to_string(),
        bars: report
            .top_n_by_title(settings.top_titles)
            .into_iter()
            .map(|t| bar(t.title, t.occurrences))
            .collect(),
    };

    let top_titles_per_country = report
        .top_n_by_title_per_country(countries, settings.top_titles_per_country)
        .into_iter()
        .map(|row| CountryTitleRowViewModel {
            country: row.country,
            title: row.title,
            occurrences: row.occurrences,
        })
        .collect();

    let top_authors = BarChartViewModel {
        title: format!("Top {} authors with most books", settings.top_authors),
        value_label: "Total number of books".to_string(),
        bars: report
            .top_authors_by_book_count(settings.top_authors)
            .into_iter()
            .map(|a| bar(a.author, a.books))
            .collect(),
    };

    let featured_authors = settings
        .featured_authors
        .iter()
        .map(|author| build_author_table(report, author, settings.top_rated_per_author))
        .collect();

    DashboardViewModel {
        kpis,
        country_distribution,
        age_distribution,
        top_titles,
        selected_countries: countries.to_vec(),
        top_titles_per_country,
        top_authors,
        featured_authors,
    }
}

fn bar(label: String, value: usize) -> BarViewModel {
    BarViewModel {
        label,
        value: value as u64,
    }
}

pub fn present_dashboard(
    report: &ReportGenerator<'_>,
    settings: &DashboardConfig,
    countries: &[String],
) -> CommandResultViewModel<DashboardViewModel> {
    let content = build_dashboard(report, settings, countries);

    if content.kpis.total_books == 0 {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("The dataset has no titled rows"))
            .with_suggestion(
                Guidance::new("Point bookdash at another CSV file")
                    .with_command("bookdash --data <path> dashboard"),
            );
    }

    let scope = if countries.is_empty() {
        "all countries".to_string()
    } else {
        countries.join(", ")
    };
    let badge = StatusBadge::info(format!("Overview ({})", scope));

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(
            Guidance::new("Filter the per-country ranking")
                .with_command("bookdash dashboard --country usa,canada"),
        )
        .with_suggestion(
            Guidance::new("Rank any author's books").with_command("bookdash author \"Stephen King\""),
        )
}
