//! End-to-end tests for the `catalog` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn catalog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.env("LIBRARY_CATALOG_DIR", dir.path());
    cmd
}

/// Add a book and return the ID printed by the command
fn add_book(dir: &TempDir, title: &str, author: &str, quantity: &str) -> String {
    let output = catalog(dir)
        .args(["book", "add", title, author, quantity])
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .find_map(|line| line.strip_prefix("ID: "))
        .unwrap()
        .to_string()
}

#[test]
fn test_init_and_config() {
    let dir = TempDir::new().unwrap();

    catalog(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("data/books.csv").exists());
    assert!(dir.path().join("config.json").exists());

    catalog(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default top count: 5"));
}

#[test]
fn test_add_list_and_data_file_format() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "Frank Herbert", "4");

    catalog(&dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Total: 1 book(s)"));

    let data = std::fs::read_to_string(dir.path().join("data/books.csv")).unwrap();
    assert_eq!(data, format!("{};Dune;Frank Herbert;4;4\n", id));
}

#[test]
fn test_validation_errors() {
    let dir = TempDir::new().unwrap();

    catalog(&dir)
        .args(["book", "add", " ", "Someone", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid title."));

    catalog(&dir)
        .args(["book", "add", "Title", "Author", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cantity."));
}

#[test]
fn test_borrow_return_scenario() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "Frank Herbert", "4");

    catalog(&dir)
        .args(["book", "borrow", &id, "--amount", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available: 2 of 4"));

    catalog(&dir)
        .args(["book", "return", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available: 3 of 4"));

    catalog(&dir)
        .args(["book", "return", &id, "-n", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceed the initial stock"));

    catalog(&dir)
        .args(["book", "borrow", &id, "-n", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Not enough stock available for borrowing.",
        ));
}

#[test]
fn test_most_borrowed() {
    let dir = TempDir::new().unwrap();
    add_book(&dir, "Book A", "Author A", "5");
    let b = add_book(&dir, "Book B", "Author B", "5");

    catalog(&dir)
        .args(["book", "borrow", &b, "-n", "3"])
        .assert()
        .success();

    let output = catalog(&dir)
        .args(["book", "top", "--count", "1"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Top 1 most borrowed books:"));
    assert!(stdout.contains("Book B"));
    assert!(!stdout.contains("Book A"));
}

#[test]
fn test_delete_then_show() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "Frank Herbert", "1");

    catalog(&dir)
        .args(["book", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    catalog(&dir)
        .args(["book", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book deleted."));

    catalog(&dir)
        .args(["book", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book not found."));
}

#[test]
fn test_search() {
    let dir = TempDir::new().unwrap();
    add_book(&dir, "Dune", "Frank Herbert", "1");
    add_book(&dir, "Emma", "Jane Austen", "1");

    catalog(&dir)
        .args(["book", "search", "--author", "AUSTEN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"))
        .stdout(predicate::str::contains("Dune").not());
}

#[test]
fn test_menu_over_stdin() {
    let dir = TempDir::new().unwrap();

    catalog(&dir)
        .write_stdin("1\nDune\nFrank Herbert\n2\n9\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added."))
        .stdout(predicate::str::contains("Invalid option."))
        .stdout(predicate::str::contains(
            "Title: Dune\nAuthor: Frank Herbert\nQuantity: 2\n",
        ));
}

#[test]
fn test_audit_log_records_mutations() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "Frank Herbert", "2");

    catalog(&dir)
        .args(["book", "borrow", &id])
        .assert()
        .success();

    catalog(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("BORROW"));
}

#[test]
fn test_backup_and_restore() {
    let dir = TempDir::new().unwrap();
    add_book(&dir, "Dune", "Frank Herbert", "2");

    catalog(&dir)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created: books-"));

    add_book(&dir, "Emma", "Jane Austen", "1");

    catalog(&dir)
        .args(["backup", "restore", "latest", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 book(s) restored"));

    catalog(&dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 book(s)"));
}

#[test]
fn test_export_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    add_book(&dir, "Dune", "Frank Herbert", "2");

    catalog(&dir)
        .args(["export", "all", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\":\"1.0.0\""))
        .stdout(predicate::str::contains("\"title\":\"Dune\""));
}

#[test]
fn test_restore_recovers_corrupt_catalog() {
    let dir = TempDir::new().unwrap();
    add_book(&dir, "Dune", "Frank Herbert", "2");

    catalog(&dir).args(["backup", "create"]).assert().success();

    // A ';' in the title splits the record into six fields on reload
    add_book(&dir, "Part 1; Part 2", "Someone", "1");

    catalog(&dir)
        .args(["book", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 5 fields, found 6"));

    catalog(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data file valid:  no"));

    catalog(&dir)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 backup(s)"));

    catalog(&dir)
        .args(["backup", "restore", "latest", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 book(s) restored"));

    catalog(&dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Total: 1 book(s)"));
}

#[test]
fn test_init_keeps_existing_data_file() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("data/books.csv");
    std::fs::create_dir_all(data_file.parent().unwrap()).unwrap();
    std::fs::write(&data_file, "not;a;catalog\n").unwrap();

    catalog(&dir).arg("init").assert().success();

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "not;a;catalog\n");
    assert!(dir.path().join("config.json").exists());
}
