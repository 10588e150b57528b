use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use regex::Regex;

fn script_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker_cli").unwrap();
    cmd.env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .env("EXPENSE_TRACKER_HOME", home)
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_adds_and_lists_expenses() {
    let home = tempfile::tempdir().unwrap();
    let script = "\
add 12.5 debit coffee
add 40 credit rent
sort amount
list
exit
";

    script_cmd(home.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Expense added successfully!")
                .and(contains("CREDIT: $40.00"))
                .and(contains("DEBIT: $12.50")),
        );
}

#[test]
fn invalid_amount_is_warned_about() {
    let home = tempfile::tempdir().unwrap();
    script_cmd(home.path())
        .write_stdin("add abc\nadd -5 credit refund\nlist\n")
        .assert()
        .success()
        .stdout(contains("Please enter a valid amount").and(contains("No expenses to show.")));
}

#[test]
fn export_writes_projected_lines() {
    let home = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let script = format!(
        "add 12.5 debit coffee\nadd 40 credit rent\nexport {}\nexit\n",
        out.path().display()
    );

    script_cmd(home.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Exported 2 expense(s)"));

    let text = std::fs::read_to_string(out.path().join("expenses.txt")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let debit = Regex::new(r"^\d{4}-\d{2}-\d{2} - DEBIT: \$12\.50 - coffee$").unwrap();
    let credit = Regex::new(r"^\d{4}-\d{2}-\d{2} - CREDIT: \$40\.00 - rent$").unwrap();
    assert!(debit.is_match(lines[0]), "unexpected line {:?}", lines[0]);
    assert!(credit.is_match(lines[1]), "unexpected line {:?}", lines[1]);
}

#[test]
fn config_defaults_apply_to_the_next_session() {
    let home = tempfile::tempdir().unwrap();
    script_cmd(home.path())
        .write_stdin("config set default_filter credit\nexit\n")
        .assert()
        .success()
        .stdout(contains("Updated `default_filter`."));

    script_cmd(home.path())
        .write_stdin("add 3 debit tea\nadd 8 credit gift\nlist\n")
        .assert()
        .success()
        .stdout(
            contains("filter: credit")
                .and(contains("CREDIT: $8.00"))
                .and(contains("DEBIT: $3.00").not()),
        );
}

#[test]
fn auto_list_renders_rows_after_each_change() {
    let home = tempfile::tempdir().unwrap();
    script_cmd(home.path())
        .write_stdin("config set auto_list on\nadd 5 debit x\nexit\n")
        .assert()
        .success()
        .stdout(contains("DEBIT: $5.00").and(contains("Transactions (").not()));
}

#[test]
fn export_without_directory_uses_configured_export_dir() {
    let home = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let script = format!(
        "config set export_dir {}\nadd 2 credit tip\nexport\nexit\n",
        out.path().display()
    );

    script_cmd(home.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Exported 1 expense(s)"));

    let text = std::fs::read_to_string(out.path().join("expenses.txt")).unwrap();
    assert!(text.ends_with(" - CREDIT: $2.00 - tip"), "unexpected export {text:?}");
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = tempfile::tempdir().unwrap();
    script_cmd(home.path())
        .write_stdin("lsit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `lsit`").and(contains("Suggestion: `list`?")));
}
