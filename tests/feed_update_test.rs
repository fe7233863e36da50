use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use feedsync::cli::feed::UpdateCommand;
use tempfile::TempDir;

const CHANGELOG: &str = "\
# Changelog

## [1.1.0](https://github.com/acme/app/compare/v1.0.0...v1.1.0) (2025-02-01)

### Features

* add dark mode ([abc123](http://example.com/commit/abc123))

### Bug Fixes

- quick fix

## [1.0.0](https://github.com/acme/app/releases/v1.0.0) (2025-01-01)

### Bug Fixes

* Fix login bug ([def456](http://example.com/commit/def456))
";

/// Test setup that creates a changelog and feed path in a temporary directory
struct TestProject {
    _temp_dir: TempDir,
    changelog: PathBuf,
    feed: PathBuf,
}

impl TestProject {
    fn new(changelog_content: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let changelog = temp_dir.path().join("CHANGELOG.md");
        fs::write(&changelog, changelog_content)?;
        let feed = temp_dir.path().join("public").join("version-feed.json");

        Ok(TestProject {
            _temp_dir: temp_dir,
            changelog,
            feed,
        })
    }

    fn update_command(&self) -> UpdateCommand {
        UpdateCommand {
            changelog: self.changelog.clone(),
            output: self.feed.clone(),
            no_ai: true,
            model: None,
            base_url: None,
            locale: "pt-BR".to_string(),
        }
    }

    fn feed_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&fs::read_to_string(&self.feed)?)?)
    }
}

#[tokio::test]
async fn test_fresh_run_writes_parsed_releases() -> Result<()> {
    let project = TestProject::new(CHANGELOG)?;
    project.update_command().execute().await?;

    let feed = project.feed_json()?;
    let releases = feed.as_array().unwrap();
    assert_eq!(releases.len(), 2);
    assert_eq!(releases[0]["version"], "1.1.0");
    assert_eq!(releases[1]["version"], "1.0.0");

    // Structured item keeps its marker and commit link.
    let fix = &releases[1]["changes"]["bug fixes"][0];
    assert_eq!(fix["description"], "* Fix login bug");
    assert_eq!(fix["commit"], "http://example.com/commit/def456");

    // Fallback item has the marker stripped and no commit link.
    let quick = &releases[0]["changes"]["bug fixes"][0];
    assert_eq!(quick["description"], "quick fix");
    assert_eq!(quick["commit"], "");

    Ok(())
}

#[tokio::test]
async fn test_second_run_is_a_no_op() -> Result<()> {
    let project = TestProject::new(CHANGELOG)?;
    project.update_command().execute().await?;
    let first = fs::read_to_string(&project.feed)?;

    project.update_command().execute().await?;
    let second = fs::read_to_string(&project.feed)?;

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_new_release_is_prepended_on_rerun() -> Result<()> {
    let project = TestProject::new(CHANGELOG)?;
    project.update_command().execute().await?;

    let extended = format!(
        "## [1.2.0](https://github.com/acme/app/compare/v1.1.0...v1.2.0) (2025-03-01)\n\
         \n\
         ### Features\n\
         \n\
         * brand new ([fff000](http://example.com/commit/fff000))\n\
         \n\
         {CHANGELOG}"
    );
    fs::write(&project.changelog, extended)?;
    project.update_command().execute().await?;

    let feed = project.feed_json()?;
    let versions: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["version"].as_str().unwrap())
        .collect();
    assert_eq!(versions, ["1.2.0", "1.1.0", "1.0.0"]);

    Ok(())
}

#[tokio::test]
async fn test_corrupt_feed_is_recovered() -> Result<()> {
    let project = TestProject::new(CHANGELOG)?;
    fs::create_dir_all(project.feed.parent().unwrap())?;
    fs::write(&project.feed, "definitely { not json")?;

    project.update_command().execute().await?;

    let feed = project.feed_json()?;
    assert_eq!(feed.as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_missing_changelog_aborts_without_writing() -> Result<()> {
    let project = TestProject::new(CHANGELOG)?;
    fs::remove_file(&project.changelog)?;

    let err = project.update_command().execute().await.unwrap_err();
    assert!(err.to_string().contains("Changelog not found"));
    assert!(!project.feed.exists());
    Ok(())
}

#[tokio::test]
async fn test_changelog_without_releases_is_a_no_op() -> Result<()> {
    let project = TestProject::new("# Changelog\n\nNothing released yet.\n")?;
    project.update_command().execute().await?;

    // No new versions, so no feed file is ever written.
    assert!(!project.feed.exists());
    Ok(())
}
