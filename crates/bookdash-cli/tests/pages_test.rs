use bookdash_testing::TestWorld;

fn world() -> TestWorld {
    TestWorld::new().with_sample_dataset().with_image()
}

#[test]
fn test_home_page() {
    let world = world();
    let result = world.run(&["home"]).expect("Failed to run home");

    assert!(result.success(), "home failed: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Analysing Book Rating Dataset"));
    assert!(stdout.contains("young adults (18 - 35 years old)"));
    assert!(stdout.contains("Diele Monteiro"));
}

#[test]
fn test_home_json_mentions_image() {
    let world = world();
    let json = world
        .run(&["--format", "json", "home"])
        .expect("Failed to run home")
        .json()
        .expect("Parse failed");

    assert_eq!(json["content"]["record_count"], 6);
    assert!(json["content"]["image_path"].as_str().is_some_and(|p| p.ends_with("book.png")));
}

#[test]
fn test_dataframe_filters_by_country() {
    let world = world();
    let json = world
        .run(&["--format", "json", "dataframe", "--country", "canada"])
        .expect("Failed to run dataframe")
        .json()
        .expect("Parse failed");

    let rows = json["content"]["rows"].as_array().expect("Expected rows");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["country"] == "canada"));
    assert_eq!(rows[0]["title"], "It");
    assert_eq!(rows[1]["title"], "Wild Animus");
    assert!(rows[1]["rating"].is_null());
}

#[test]
fn test_dataframe_selection_variants() {
    let world = world();
    let count = |args: &[&str]| {
        let mut full = vec!["--format", "json", "dataframe"];
        full.extend_from_slice(args);
        world.run(&full).expect("Failed to run dataframe").json().expect("Parse failed")
            ["content"]["total_matches"]
            .as_u64()
    };

    assert_eq!(count(&[]), Some(3));
    assert_eq!(count(&["--country", "usa,canada"]), Some(5));
    assert_eq!(count(&["--country", "usa", "--country", "united kingdom"]), Some(4));
    assert_eq!(count(&["--all-countries"]), Some(6));
    assert_eq!(count(&["--country", "atlantis"]), Some(0));
}

#[test]
fn test_dataframe_limit() {
    let world = world();
    let result = world
        .run(&["dataframe", "--all-countries", "--limit", "2"])
        .expect("Failed to run dataframe");

    assert!(result.success());
    assert!(result.stdout().contains("showing 2 of 6 rows"));
    assert!(result.stdout().contains("--limit 0"));
}

#[test]
fn test_author_ranking() {
    let world = world();
    let json = world
        .run(&["--format", "json", "author", "King", "--top", "2"])
        .expect("Failed to run author")
        .json()
        .expect("Parse failed");

    let books = json["content"]["books"].as_array().expect("Expected books");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["rating"], 10.0);
    assert_eq!(books[0]["isbn"], "0451169514");
    assert!(books[0].get("country").is_none());
}

#[test]
fn test_author_match_is_case_sensitive() {
    let world = world();
    let json = world
        .run(&["--format", "json", "author", "stephen king"])
        .expect("Failed to run author")
        .json()
        .expect("Parse failed");

    assert_eq!(json["content"]["books"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_guidance_without_command() {
    let world = world();
    let result = world.run(&[]).expect("Failed to run bookdash");

    assert!(result.success());
    assert!(result.stdout().contains("bookdash dashboard"));
    assert!(result.stdout().contains("(found)"));
}
