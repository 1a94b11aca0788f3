use crate::tally::Tally;
use bookdash_types::{AgeBucket, AgeBucketCount, BookRating, CountryCount};
use std::collections::HashMap;

fn country_tally(records: &[BookRating]) -> Tally<'_> {
    records.iter().filter_map(|r| r.country.as_deref()).collect()
}

pub(crate) fn count_by_country(records: &[BookRating]) -> HashMap<String, usize> {
    country_tally(records).into_map()
}

pub(crate) fn country_distribution(records: &[BookRating]) -> Vec<CountryCount> {
    country_tally(records)
        .into_ranked()
        .into_iter()
        .map(|(country, count)| CountryCount {
            country: country.to_string(),
            count,
        })
        .collect()
}

pub(crate) fn count_by_age_bucket(records: &[BookRating]) -> HashMap<AgeBucket, usize> {
    let mut counts = HashMap::new();
    for bucket in records
        .iter()
        .filter_map(BookRating::known_age)
        .filter_map(AgeBucket::classify)
    {
        *counts.entry(bucket).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn age_distribution(records: &[BookRating]) -> Vec<AgeBucketCount> {
    let mut buckets: Vec<AgeBucketCount> = count_by_age_bucket(records)
        .into_iter()
        .map(|(bucket, count)| AgeBucketCount { bucket, count })
        .collect();
    buckets.sort_by(|a, b| b.bucket.cmp(&a.bucket));
    buckets
}
