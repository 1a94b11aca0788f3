use bookdash_testing::{DatasetBuilder, TestWorld};
use bookdash_types::{BookRating, Column};
use predicates::prelude::*;

#[test]
fn test_missing_image_is_fatal() {
    let world = TestWorld::new().with_sample_dataset();
    let result = world.run(&["home"]).expect("Failed to run home");

    assert!(!result.success());
    assert!(result.stdout().is_empty());
    assert!(result.stderr().contains("Image asset not found"));
}

#[test]
fn test_no_image_flag_skips_check() {
    let world = TestWorld::new().with_sample_dataset();
    let result = world.run(&["--no-image", "home"]).expect("Failed to run home");

    assert!(result.success(), "home failed: {}", result.stderr());
}

#[test]
fn test_missing_column_is_fatal() {
    let world = TestWorld::new()
        .with_dataset(
            DatasetBuilder::new()
                .record(BookRating::new("It").with_country("usa"))
                .without_column(Column::Rating),
        )
        .with_image();

    let result = world.run(&["dashboard"]).expect("Failed to run dashboard");
    assert!(!result.success());
    assert!(
        predicate::str::contains("missing column 'Book-Rating'").eval(result.stderr()),
        "unexpected stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_missing_dataset_is_fatal() {
    let world = TestWorld::new().with_image();
    let result = world.run(&["dashboard"]).expect("Failed to run dashboard");

    assert!(!result.success());
    assert!(
        result.stderr().contains("Error: Startup failed: IO error: "),
        "unexpected stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_malformed_numbers_are_missing() {
    let world = TestWorld::new().with_image();
    std::fs::write(
        world.data_path(),
        "Book-Title,Book-Author,ISBN,Year-Of-Publication,Publisher,Country,Age,Book-Rating,Image-URL-L\n\
         It,Stephen King,x,DK Publishing,Viking,usa,n/a,9,\n",
    )
    .expect("Failed to write dataset");

    let json = world
        .run(&["--format", "json", "dataframe"])
        .expect("Failed to run dataframe")
        .json()
        .expect("Parse failed");
    let row = &json["content"]["rows"][0];
    assert!(row["year_of_publication"].is_null());
    assert!(row["age"].is_null());
    assert_eq!(row["rating"], 9.0);
}

#[test]
fn test_data_flag_overrides_default_path() {
    let world = TestWorld::new().with_image();
    let other = world.root().join("other.csv");
    DatasetBuilder::new()
        .record(BookRating::new("Emma").with_country("uk").with_rating(10.0))
        .write_to(&other)
        .expect("Failed to write dataset");

    let result = world
        .run(&["--data", "other.csv", "--format", "json", "dashboard"])
        .expect("Failed to run dashboard");
    assert!(result.success(), "dashboard failed: {}", result.stderr());
    assert_eq!(result.json().expect("Parse failed")["content"]["kpis"]["total_books"], 1);
}
