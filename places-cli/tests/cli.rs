use assert_cmd::Command;
use predicates::prelude::*;

// Адрес, на котором никто не слушает: запросы до него доходить не должны.
const NOWHERE: &str = "http://127.0.0.1:9";

fn places() -> Command {
    let mut cmd = Command::cargo_bin("places").unwrap();
    cmd.env_remove("PLACES_API_URL")
        .env_remove("PLACES_API_TOKEN")
        .args(["--server", NOWHERE, "--token", "t"]);
    cmd
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("places")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("edit-profile"))
        .stdout(predicate::str::contains("unlike"));
}

#[test]
fn short_title_is_rejected_before_any_request() {
    places()
        .args(["add", "--title", "A", "--link", "https://example.com/a.png"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Title must be between 2 and 30 characters."))
        .stdout(predicate::str::contains("Connecting").not());
}

#[test]
fn bad_link_is_rejected() {
    places()
        .args(["add", "--title", "Байкал", "--link", "ftp://x.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter a valid URL"));
}

#[test]
fn bad_avatar_is_rejected() {
    places()
        .args(["avatar", "--url", "https://.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid avatar"));
}

#[test]
fn long_about_is_rejected() {
    let about = "x".repeat(201);
    places()
        .args(["edit-profile", "--name", "Ann", "--about", &about])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Description must be between 2 and 200"));
}
