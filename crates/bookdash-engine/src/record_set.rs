use bookdash_types::BookRating;
use std::collections::HashSet;

/// Immutable handle to the loaded dataset.
///
/// Built once at startup; nothing hands out `&mut` access afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<BookRating>,
}

impl RecordSet {
    pub fn new(records: Vec<BookRating>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[BookRating] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRating> {
        self.records.iter()
    }

    pub fn report(&self) -> crate::ReportGenerator<'_> {
        crate::ReportGenerator::new(self)
    }

    /// Non-missing countries in first-appearance order.
    ///
    /// The first entry is the default selection of the country filters.
    pub fn distinct_countries(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(|r| r.country.as_deref())
            .filter(|country| seen.insert(*country))
            .map(str::to_string)
            .collect()
    }

    /// Records whose country is in `countries`, in source order.
    ///
    /// An empty selection selects nothing.
    pub fn records_in_countries(&self, countries: &[String]) -> Vec<&BookRating> {
        let wanted: HashSet<&str> = countries.iter().map(String::as_str).collect();
        self.records
            .iter()
            .filter(|r| r.country.as_deref().is_some_and(|c| wanted.contains(c)))
            .collect()
    }
}

impl From<Vec<BookRating>> for RecordSet {
    fn from(records: Vec<BookRating>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a BookRating;
    type IntoIter = std::slice::Iter<'a, BookRating>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
