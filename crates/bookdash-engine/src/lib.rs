// Engine module - Report generation over the loaded record set
// This layer sits between the typed records (types) and CLI presentation.
// Every operation is a pure function of the record set and recomputes on each call.

mod distribution;
mod ranking;
mod record_set;
mod summary;
mod tally;

pub use record_set::RecordSet;

use bookdash_types::{
    AgeBucket, AgeBucketCount, AuthorBookRow, AuthorCount, CountryCount, CountryTitleCount,
    TitleCount,
};
use std::collections::HashMap;

/// Façade API - stable interface for the CLI layer.
///
/// Borrows the record set; holds no state of its own, so it is cheap to
/// create per request.
#[derive(Debug, Clone, Copy)]
pub struct ReportGenerator<'a> {
    records: &'a RecordSet,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(records: &'a RecordSet) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &'a RecordSet {
        self.records
    }

    /// Number of records with a title
    pub fn total_count(&self) -> usize {
        summary::total_count(self.records.as_slice())
    }

    /// Mean rating rounded to one decimal, `None` when nothing is rated
    pub fn average_rating(&self) -> Option<f64> {
        summary::average_rating(self.records.as_slice())
    }

    pub fn count_by_country(&self) -> HashMap<String, usize> {
        distribution::count_by_country(self.records.as_slice())
    }

    /// Country counts ordered for charting (descending, ties by first appearance)
    pub fn country_distribution(&self) -> Vec<CountryCount> {
        distribution::country_distribution(self.records.as_slice())
    }

    pub fn age_bucket(age: f64) -> Option<AgeBucket> {
        AgeBucket::classify(age)
    }

    pub fn count_by_age_bucket(&self) -> HashMap<AgeBucket, usize> {
        distribution::count_by_age_bucket(self.records.as_slice())
    }

    /// Non-empty age buckets, oldest band first
    pub fn age_distribution(&self) -> Vec<AgeBucketCount> {
        distribution::age_distribution(self.records.as_slice())
    }

    pub fn top_n_by_title(&self, n: usize) -> Vec<TitleCount> {
        ranking::top_n_by_title(self.records.as_slice(), n)
    }

    pub fn top_n_by_title_per_country(
        &self,
        countries: &[String],
        n: usize,
    ) -> Vec<CountryTitleCount> {
        ranking::top_n_by_title_per_country(self.records.as_slice(), countries, n)
    }

    pub fn top_authors_by_book_count(&self, n: usize) -> Vec<AuthorCount> {
        ranking::top_authors_by_book_count(self.records.as_slice(), n)
    }

    pub fn top_rated_by_author(&self, author_name: &str, n: usize) -> Vec<AuthorBookRow> {
        ranking::top_rated_by_author(self.records.as_slice(), author_name, n)
    }
}

pub use summary::star_rating;
