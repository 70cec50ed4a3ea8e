use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_CLI_DATA_DIR", data_dir)
        .env_remove("EXPENSE_LOG");
    cmd
}

/// A data dir with currency £, a cap of 20 and a report "trip" of three entries
fn seeded() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    expense(dir).args(["set-currency", "£"]).assert().success();
    expense(dir).args(["set-max", "20"]).assert().success();
    expense(dir)
        .args(["create", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new report: 'trip'"));

    for (date, amount, description) in [
        ("2024-01-02", "3", "Bus"),
        ("2024-01-01", "15", "Hotel"),
        ("2024-01-01", "10.10", "Dinner"),
    ] {
        expense(dir)
            .args([
                "update",
                "trip",
                "--date",
                date,
                "--amount",
                amount,
                "--description",
                description,
            ])
            .assert()
            .success();
    }

    temp_dir
}

#[test]
fn display_lists_entries_sorted_with_total() {
    let temp_dir = seeded();

    let assert = expense(temp_dir.path())
        .args(["display", "trip"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Expense Report: trip"));
    assert!(stdout.contains("Total: £28.10"));
    let hotel = stdout.find("Hotel").unwrap();
    let dinner = stdout.find("Dinner").unwrap();
    let bus = stdout.find("Bus").unwrap();
    assert!(hotel < dinner && dinner < bus);
}

#[test]
fn summary_caps_each_day() {
    let temp_dir = seeded();

    expense(temp_dir.path())
        .args(["display", "trip", "-s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary Report: trip"))
        .stdout(predicate::str::contains("£25.10"))
        .stdout(predicate::str::contains("Total: £28.10"))
        .stdout(predicate::str::contains("Total: £23.00"));
}

#[test]
fn rm_unknown_id_fails_without_changing_report() {
    let temp_dir = seeded();
    let report = temp_dir.path().join("reports").join("trip.json");
    let before = fs::read(&report).unwrap();

    expense(temp_dir.path())
        .args(["rm", "trip", "--id", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Report ID '5' does not exist"));

    assert_eq!(fs::read(&report).unwrap(), before);
}

#[test]
fn rm_id_deletes_entry_by_sorted_position() {
    let temp_dir = seeded();

    expense(temp_dir.path())
        .args(["rm", "trip", "-i", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Report ID: 3"));

    expense(temp_dir.path())
        .args(["display", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus").not())
        .stdout(predicate::str::contains("Total: £25.10"));
}

#[test]
fn rm_without_id_removes_report() {
    let temp_dir = seeded();

    expense(temp_dir.path())
        .args(["rm", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully removed report: 'trip'"));

    expense(temp_dir.path())
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no reports to list"));
}

#[test]
fn ls_shows_report_names() {
    let temp_dir = seeded();
    expense(temp_dir.path()).args(["create", "office"]).assert().success();

    expense(temp_dir.path())
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Reports:"))
        .stdout(predicate::str::contains("office"))
        .stdout(predicate::str::contains("trip"));
}

#[test]
fn create_existing_report_fails() {
    let temp_dir = seeded();

    expense(temp_dir.path())
        .args(["create", "trip"])
        .assert()
        .failure();
}

#[test]
fn update_rejects_bad_amount() {
    let temp_dir = seeded();

    expense(temp_dir.path())
        .args([
            "update",
            "trip",
            "--date",
            "2024-01-05",
            "--amount",
            "1.5",
            "--description",
            "Coffee",
        ])
        .assert()
        .failure();
}

#[test]
fn update_prompts_for_missing_fields() {
    let temp_dir = seeded();

    expense(temp_dir.path())
        .args(["update", "trip"])
        .write_stdin("2024-01-03\nabc\n4.50\nTaxi\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense to 'trip'"));

    expense(temp_dir.path())
        .args(["display", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Taxi"))
        .stdout(predicate::str::contains("Total: £32.60"));
}

#[test]
fn display_unknown_report_fails() {
    let temp_dir = seeded();

    expense(temp_dir.path())
        .args(["display", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn display_prompts_for_unset_currency() {
    let temp_dir = TempDir::new().unwrap();
    expense(temp_dir.path()).args(["create", "trip"]).assert().success();

    expense(temp_dir.path())
        .args(["display", "trip"])
        .write_stdin("XX\n$\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'XX' is not a valid currency symbol"))
        .stdout(predicate::str::contains("Total: $0.00"));

    expense(temp_dir.path())
        .args(["view-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency:             $"))
        .stdout(predicate::str::contains("NOT_SET"));
}

#[test]
fn set_max_rejects_invalid_value() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["set-max", "lots"])
        .assert()
        .failure();

    expense(temp_dir.path())
        .args(["set-max", "unlimited"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max daily claimable amount set to: unlimited"));
}

#[test]
fn export_writes_workbook_and_respects_force() {
    let temp_dir = seeded();
    let out_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["export", "trip", "-o"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported Expense Report 'trip'"));

    let workbook = out_dir.path().join("trip.xlsx");
    assert!(workbook.exists());

    // Declining the overwrite leaves the file alone
    let modified = fs::metadata(&workbook).unwrap().modified().unwrap();
    expense(temp_dir.path())
        .args(["export", "trip", "-o"])
        .arg(out_dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Export cancelled"));
    assert_eq!(fs::metadata(&workbook).unwrap().modified().unwrap(), modified);

    expense(temp_dir.path())
        .args(["export", "trip", "--force", "-o"])
        .arg(out_dir.path())
        .assert()
        .success();
}

#[test]
fn export_to_missing_directory_fails() {
    let temp_dir = seeded();

    expense(temp_dir.path())
        .args(["export", "trip", "-o"])
        .arg(temp_dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory does not exist"));
}
