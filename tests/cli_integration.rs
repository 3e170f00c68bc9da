use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn seed_shelf(home: &Path) {
    let shelf = home.join("books");
    fs::create_dir_all(&shelf).unwrap();
    fs::write(
        shelf.join("books.json"),
        r#"[
            {
                "id": "1",
                "author": "Джек Лондон",
                "title": "Сердца трех",
                "file": "hearts.fb2",
                "genre": "fiction",
                "description": "Приключенческий роман."
            },
            {
                "id": "2",
                "author": "Anon",
                "title": "Field Notes",
                "file": "notes.fb2",
                "genre": "science"
            }
        ]"#,
    )
    .unwrap();
    fs::write(
        shelf.join("hearts.fb2"),
        "<body>Para one</body><body>Para two</body>",
    )
    .unwrap();
}

fn libris(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.env("LIBRIS_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn list_shows_seeded_catalog() {
    let home = tempfile::tempdir().unwrap();
    seed_shelf(home.path());

    libris(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Сердца трех"))
        .stdout(predicate::str::contains("Field Notes"));
}

#[test]
fn list_filters_by_search_and_genre() {
    let home = tempfile::tempdir().unwrap();
    seed_shelf(home.path());

    libris(home.path())
        .args(["list", "--search", "лондон"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Сердца трех"))
        .stdout(predicate::str::contains("Field Notes").not());

    libris(home.path())
        .args(["list", "--genre", "science"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Field Notes"))
        .stdout(predicate::str::contains("Сердца трех").not());

    libris(home.path())
        .args(["list", "--search", "толстой"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"));
}

#[test]
fn favorite_round_trip_through_the_store() {
    let home = tempfile::tempdir().unwrap();
    seed_shelf(home.path());

    libris(home.path())
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no favorite books"));

    libris(home.path())
        .args(["fav", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added to favorites"));

    libris(home.path())
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Сердца трех"));

    libris(home.path())
        .args(["fav", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed from favorites"));
}

#[test]
fn show_displays_detail_with_bookmark() {
    let home = tempfile::tempdir().unwrap();
    seed_shelf(home.path());

    libris(home.path())
        .args(["mark", "1", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 2"));

    libris(home.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Сердца трех"))
        .stdout(predicate::str::contains("bookmark at page 2"));
}

#[test]
fn show_unknown_id_reports_not_found() {
    let home = tempfile::tempdir().unwrap();
    seed_shelf(home.path());

    libris(home.path())
        .args(["show", "missing-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book not found"));
}

#[test]
fn read_opens_bookmark_page_by_default() {
    let home = tempfile::tempdir().unwrap();
    seed_shelf(home.path());

    libris(home.path())
        .args(["mark", "1", "--page", "2"])
        .assert()
        .success();

    libris(home.path())
        .args(["read", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Para two"))
        .stdout(predicate::str::contains("Page 2 of 2"));

    // Requests past the last page clamp to it
    libris(home.path())
        .args(["read", "1", "--page", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2"));
}

#[test]
fn read_missing_document_fails_cleanly() {
    let home = tempfile::tempdir().unwrap();
    seed_shelf(home.path());

    libris(home.path())
        .args(["read", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document unavailable"));
}

#[test]
fn unmark_then_mark_toggles_back_on_at_page_one() {
    let home = tempfile::tempdir().unwrap();
    seed_shelf(home.path());

    libris(home.path())
        .args(["mark", "1", "--page", "3"])
        .assert()
        .success();
    libris(home.path())
        .args(["unmark", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmark removed"));

    libris(home.path())
        .args(["mark", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1"));
}

#[test]
fn broken_catalog_reports_scan_failure_but_stays_usable() {
    let home = tempfile::tempdir().unwrap();
    let shelf = home.path().join("books");
    fs::create_dir_all(&shelf).unwrap();
    fs::write(shelf.join("books.json"), "not json at all").unwrap();

    libris(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load book list"));
}

#[test]
fn config_shows_and_sets_shelf_dir() {
    let home = tempfile::tempdir().unwrap();

    libris(home.path())
        .args(["config", "shelf-dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shelf-dir ="));

    libris(home.path())
        .args(["config", "shelf-dir", "/tmp/myshelf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shelf-dir set to /tmp/myshelf"));
}
