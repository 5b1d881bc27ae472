use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("reqscan");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // pipeline commands
    run_help(&home, &["generate"]);
    run_help(&home, &["scan"]);

    // inspection commands
    run_help(&home, &["installed"]);
    run_help(&home, &["mapping"]);
    run_help(&home, &["mapping", "list"]);
    run_help(&home, &["mapping", "set"]);
}

#[test]
fn unknown_strategy_is_rejected() {
    let home = TempDir::new().expect("temp home");
    cargo_bin_cmd!("reqscan")
        .env("HOME", home.path())
        .args(["scan", ".", "--strategy", "guess"])
        .assert()
        .failure();
}

#[test]
fn mapping_commands_describe_themselves_in_help() {
    let home = TempDir::new().expect("temp home");
    cargo_bin_cmd!("reqscan")
        .env("HOME", home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("module-to-package mapping file"));
    cargo_bin_cmd!("reqscan")
        .env("HOME", home.path())
        .args(["mapping", "--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Print every recorded module"))
        .stdout(predicates::str::contains("Record the package that provides a module"));
}
