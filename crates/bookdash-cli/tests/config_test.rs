use bookdash_testing::TestWorld;

#[test]
fn test_config_show_defaults() {
    let world = TestWorld::new();
    let json = world
        .run(&["--format", "json", "config", "show"])
        .expect("Failed to run config show")
        .json()
        .expect("Parse failed");

    let content = &json["content"];
    assert_eq!(content["config_exists"], false);
    assert_eq!(content["data_path"], "dataviz.csv");
    assert_eq!(content["top_titles"], 10);
    assert_eq!(content["featured_authors"][4], "Mary Higgins Clark");
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"]).expect("Failed to run config init");
    assert!(first.success(), "init failed: {}", first.stderr());
    assert!(world.config_path().is_file());

    let second = world.run(&["config", "init"]).expect("Failed to run config init");
    assert!(!second.success());
    assert!(second.stderr().contains("--force"));

    let forced = world
        .run(&["--format", "json", "config", "init", "--force"])
        .expect("Failed to run config init");
    assert!(forced.success());
    assert_eq!(forced.json().expect("Parse failed")["content"]["overwritten"], true);
}

#[test]
fn test_config_file_drives_dashboard() {
    let world = TestWorld::new()
        .with_sample_dataset()
        .with_image()
        .with_config("[dashboard]\ntop_titles = 1\nfeatured_authors = [\"John Grisham\"]\n");

    let json = world
        .run(&["--format", "json", "dashboard"])
        .expect("Failed to run dashboard")
        .json()
        .expect("Parse failed");
    let content = &json["content"];

    assert_eq!(content["top_titles"]["bars"].as_array().map(Vec::len), Some(1));
    assert_eq!(content["featured_authors"].as_array().map(Vec::len), Some(1));
    assert_eq!(content["featured_authors"][0]["books"][0]["title"], "The Pelican Brief");
}

#[test]
fn test_invalid_config_is_fatal() {
    let world = TestWorld::new()
        .with_sample_dataset()
        .with_image()
        .with_config("[dashboard]\ntop_titles = \"ten\"\n");

    let result = world.run(&["dashboard"]).expect("Failed to run dashboard");
    assert!(!result.success());
    assert!(result.stderr().contains("Configuration error"));
}
