use crate::tally::Tally;
use bookdash_types::{AuthorBookRow, AuthorCount, BookRating, CountryTitleCount, TitleCount};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

pub(crate) fn top_n_by_title(records: &[BookRating], n: usize) -> Vec<TitleCount> {
    records
        .iter()
        .filter_map(|r| r.title.as_deref())
        .collect::<Tally>()
        .into_ranked()
        .into_iter()
        .take(n)
        .map(|(title, occurrences)| TitleCount {
            title: title.to_string(),
            occurrences,
        })
        .collect()
}

pub(crate) fn top_n_by_title_per_country(
    records: &[BookRating],
    countries: &[String],
    n: usize,
) -> Vec<CountryTitleCount> {
    let wanted: HashSet<&str> = countries.iter().map(String::as_str).collect();

    // BTreeMap keeps countries in ascending order
    let mut per_country: BTreeMap<&str, Tally> = BTreeMap::new();
    for record in records {
        let (Some(country), Some(title)) = (record.country.as_deref(), record.title.as_deref())
        else {
            continue;
        };
        if !wanted.is_empty() && !wanted.contains(country) {
            continue;
        }
        per_country.entry(country).or_default().add(title);
    }

    let mut rows = Vec::new();
    for (country, tally) in per_country {
        let mut titles = tally.entries().to_vec();
        titles.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        rows.extend(
            titles
                .into_iter()
                .take(n)
                .map(|(title, occurrences)| CountryTitleCount {
                    country: country.to_string(),
                    title: title.to_string(),
                    occurrences,
                }),
        );
    }
    rows
}

pub(crate) fn top_authors_by_book_count(records: &[BookRating], n: usize) -> Vec<AuthorCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut authors: Vec<(&str, HashSet<&str>)> = Vec::new();

    for record in records {
        let (Some(author), Some(title)) = (record.author.as_deref(), record.title.as_deref())
        else {
            continue;
        };
        let slot = *index.entry(author).or_insert_with(|| {
            authors.push((author, HashSet::new()));
            authors.len() - 1
        });
        authors[slot].1.insert(title);
    }

    // Stable sort: equal counts stay in first-appearance order
    authors.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    authors
        .into_iter()
        .take(n)
        .map(|(author, titles)| AuthorCount {
            author: author.to_string(),
            books: titles.len(),
        })
        .collect()
}

pub(crate) fn top_rated_by_author(
    records: &[BookRating],
    author_name: &str,
    n: usize,
) -> Vec<AuthorBookRow> {
    let mut matches: Vec<&BookRating> = records
        .iter()
        .filter(|r| r.author.as_deref().is_some_and(|a| a.contains(author_name)))
        .collect();

    matches.sort_by(|a, b| rating_descending(a.known_rating(), b.known_rating()));
    matches.into_iter().take(n).map(AuthorBookRow::from).collect()
}

/// Higher ratings first, unrated rows last
fn rating_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
