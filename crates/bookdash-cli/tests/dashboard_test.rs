use bookdash_testing::TestWorld;
use bookdash_types::BookRating;

fn world() -> TestWorld {
    TestWorld::new().with_sample_dataset().with_image()
}

#[test]
fn test_dashboard_json_kpis() {
    let world = world();
    let result = world
        .run(&["--format", "json", "dashboard"])
        .expect("Failed to run dashboard");

    assert!(result.success(), "dashboard failed: {}", result.stderr());
    let json = result.json().expect("Parse failed");
    let kpis = &json["content"]["kpis"];

    assert_eq!(kpis["total_books"], 6);
    assert_eq!(kpis["average_rating"], 8.0);
    assert_eq!(kpis["stars"], 8);
}

#[test]
fn test_dashboard_default_selection_is_first_country() {
    let world = world();
    let json = world
        .run(&["--format", "json", "dashboard"])
        .expect("Failed to run dashboard")
        .json()
        .expect("Parse failed");

    let content = &json["content"];
    assert_eq!(content["selected_countries"], serde_json::json!(["usa"]));

    let titles: Vec<&str> = content["top_titles_per_country"]
        .as_array()
        .expect("Expected rows")
        .iter()
        .map(|row| row["title"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(titles, vec!["It", "Misery", "The Pelican Brief"]);
}

#[test]
fn test_dashboard_charts() {
    let world = world();
    let json = world
        .run(&["--format", "json", "dashboard", "--all-countries"])
        .expect("Failed to run dashboard")
        .json()
        .expect("Parse failed");
    let content = &json["content"];

    let countries: Vec<(&str, u64)> = content["country_distribution"]["bars"]
        .as_array()
        .expect("Expected bars")
        .iter()
        .map(|b| (b["label"].as_str().unwrap_or_default(), b["value"].as_u64().unwrap_or(0)))
        .collect();
    assert_eq!(countries, vec![("usa", 3), ("canada", 2), ("united kingdom", 1)]);

    assert_eq!(content["age_distribution"]["bars"][0]["label"], "age group 60+");
    assert_eq!(content["age_distribution"]["bars"].as_array().map(Vec::len), Some(5));
    assert_eq!(content["top_titles"]["bars"][0]["label"], "It");
    assert_eq!(content["top_titles"]["bars"][0]["value"], 2);
    assert_eq!(content["top_authors"]["bars"][0]["label"], "Stephen King");

    let per_country = content["top_titles_per_country"].as_array().expect("Expected rows");
    assert_eq!(per_country[0]["country"], "canada");
    assert_eq!(per_country.len(), 6);
}

#[test]
fn test_featured_author_tables() {
    let world = world();
    let json = world
        .run(&["--format", "json", "dashboard"])
        .expect("Failed to run dashboard")
        .json()
        .expect("Parse failed");

    let tables = json["content"]["featured_authors"].as_array().expect("Expected tables");
    assert_eq!(tables.len(), 5);
    assert_eq!(tables[0]["author"], "Stephen King");

    let ratings: Vec<f64> = tables[0]["books"]
        .as_array()
        .expect("Expected books")
        .iter()
        .filter_map(|b| b["rating"].as_f64())
        .collect();
    assert_eq!(ratings, vec![10.0, 9.0, 8.0]);

    assert_eq!(tables[1]["author"], "Nora Roberts");
    assert_eq!(tables[1]["books"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_plain_output_formats_kpis() {
    let records = (0..1234).map(|i| {
        BookRating::new(format!("Book {}", i % 7))
            .with_author("Nora Roberts")
            .with_country("spain")
            .with_rating(7.0)
    });
    let world = TestWorld::new().with_records(records).with_image();

    let result = world.run(&["dashboard"]).expect("Failed to run dashboard");
    assert!(result.success(), "dashboard failed: {}", result.stderr());

    let stdout = result.stdout();
    assert!(stdout.contains("Total of Books:"));
    assert!(stdout.contains("1,234"));
    assert!(stdout.contains(&"⭐".repeat(7)));
    assert!(!stdout.contains(&"⭐".repeat(8)));
    assert!(stdout.contains("Top 5 books by author Nora Roberts"));
}

#[test]
fn test_half_star_rounds_to_even() {
    let records = [8.0, 9.0]
        .into_iter()
        .map(|rating| BookRating::new("It").with_country("usa").with_rating(rating));
    let world = TestWorld::new().with_records(records).with_image();

    let result = world.run(&["dashboard"]).expect("Failed to run dashboard");
    assert!(result.success(), "dashboard failed: {}", result.stderr());

    let stdout = result.stdout();
    assert!(stdout.contains("8.5"));
    assert!(stdout.contains(&"⭐".repeat(8)));
    assert!(!stdout.contains(&"⭐".repeat(9)));
}

#[test]
fn test_compact_dashboard_skips_author_tables() {
    let world = world();
    let result = world
        .run(&["--compact", "dashboard"])
        .expect("Failed to run dashboard");

    assert!(result.success());
    assert!(result.stdout().contains("Overview:"));
    assert!(!result.stdout().contains("Top 5 books by author"));
}

#[test]
fn test_unrated_dataset_shows_na() {
    let world = TestWorld::new()
        .with_records([BookRating::new("Emma").with_country("uk")])
        .with_image();

    let result = world.run(&["dashboard"]).expect("Failed to run dashboard");
    assert!(result.success());
    assert!(result.stdout().contains("N/A"));

    let json = world
        .run(&["--format", "json", "dashboard"])
        .expect("Failed to run dashboard")
        .json()
        .expect("Parse failed");
    assert!(json["content"]["kpis"]["average_rating"].is_null());
}

#[test]
fn test_tui_without_terminal_prints_dashboard() {
    let world = world();
    let result = world.run(&["tui"]).expect("Failed to run tui");

    assert!(result.success(), "tui failed: {}", result.stderr());
    assert!(result.stdout().contains("Overview:"));
}
