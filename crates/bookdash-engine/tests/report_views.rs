use bookdash_engine::{RecordSet, ReportGenerator};
use bookdash_types::{AgeBucket, BookRating};

fn ratings() -> RecordSet {
    let rows = [
        ("Wild Animus", "Rich Shapero", "usa", Some(34.0), 0.0),
        ("The Lovely Bones", "Alice Sebold", "usa", Some(27.0), 9.0),
        ("Wild Animus", "Rich Shapero", "canada", Some(61.0), 1.0),
        ("The Firm", "John Grisham", "usa", None, 8.0),
        ("The Pelican Brief", "John Grisham", "canada", Some(60.0), 7.0),
        ("Wild Animus", "Rich Shapero", "usa", Some(19.0), 0.0),
        ("The Lovely Bones", "Alice Sebold", "united kingdom", Some(45.0), 10.0),
        ("Carrie", "Stephen King", "usa", Some(8.0), 9.0),
    ];

    rows.into_iter()
        .map(|(title, author, country, age, rating)| {
            let record = BookRating::new(title)
                .with_author(author)
                .with_country(country)
                .with_rating(rating);
            match age {
                Some(age) => record.with_age(age),
                None => record,
            }
        })
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn test_kpis() {
    let records = ratings();
    let report = records.report();

    assert_eq!(report.total_count(), 8);
    assert_eq!(report.average_rating(), Some(5.5));
    assert_eq!(
        ReportGenerator::new(&RecordSet::default()).average_rating(),
        None
    );
}

#[test]
fn test_country_distribution_snapshot() {
    let records = ratings();
    let rendered = records
        .report()
        .country_distribution()
        .iter()
        .map(|c| format!("{} {}", c.country, c.count))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r"
    usa 5
    canada 2
    united kingdom 1
    ");
}

#[test]
fn test_age_distribution_partitions_known_ages() {
    let records = ratings();
    let report = records.report();

    let buckets = report.age_distribution();
    let total: usize = buckets.iter().map(|b| b.count).sum();
    assert_eq!(total, 7);
    assert_eq!(buckets[0].bucket, AgeBucket::From60);
    assert_eq!(buckets[0].count, 2);
    assert_eq!(ReportGenerator::age_bucket(60.0), Some(AgeBucket::From60));
}

#[test]
fn test_rankings() {
    let records = ratings();
    let report = records.report();

    let top = report.top_n_by_title(2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].title, "Wild Animus");
    assert_eq!(top[0].occurrences, 3);
    assert_eq!(top[1].title, "The Lovely Bones");

    let authors = report.top_authors_by_book_count(1);
    assert_eq!(authors[0].author, "John Grisham");
    assert_eq!(authors[0].books, 2);

    let per_country = report.top_n_by_title_per_country(&["canada".to_string()], 10);
    let rendered = per_country
        .iter()
        .map(|r| format!("{} | {} | {}", r.country, r.title, r.occurrences))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    canada | The Pelican Brief | 1
    canada | Wild Animus | 1
    ");
}

#[test]
fn test_featured_author_table() {
    let records = ratings();
    let rows = records.report().top_rated_by_author("John Grisham", 5);

    let titles: Vec<_> = rows.iter().filter_map(|r| r.title.as_deref()).collect();
    assert_eq!(titles, vec!["The Firm", "The Pelican Brief"]);
}
