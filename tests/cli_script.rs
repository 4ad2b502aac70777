use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("interview_form_cli").unwrap();
    cmd.env("INTERVIEW_FORM_CLI_SCRIPT", "1")
        .env("INTERVIEW_FORM_CONFIG", config_dir.path().join("config.json"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_submits_valid_form() {
    let dir = TempDir::new().unwrap();
    let input = "set name Ada\n\
                 set surname Lovelace\n\
                 set birthDate 12/12/1990\n\
                 set email ada@example.com\n\
                 set phone 555-1234\n\
                 submit\n\
                 show\n\
                 exit\n";

    script_cmd(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Form Submitted"))
        .stdout(contains("\"birthDate\": \"12/12/1990\""))
        .stdout(contains("Form submitted. All fields were cleared."))
        .stdout(contains("Name: (empty)"));
}

#[test]
fn script_mode_reports_required_fields() {
    let dir = TempDir::new().unwrap();
    script_cmd(&dir)
        .write_stdin("submit\nexit\n")
        .assert()
        .success()
        .stdout(contains("5 field(s) need attention"))
        .stdout(contains("Name: Name is required"))
        .stdout(contains("Phone Number: Phone number is required"))
        .stdout(contains("Form Submitted").not());
}

#[test]
fn script_mode_keeps_values_after_failed_submit() {
    let dir = TempDir::new().unwrap();
    let input = "set name \"Ada King\"\nset email not-an-email\nsubmit\nshow\nexit\n";
    script_cmd(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Email: Invalid email format"))
        .stdout(contains("Name: Ada King"))
        .stdout(contains("Email: not-an-email"));
}

#[test]
fn script_mode_suggests_field_names() {
    let dir = TempDir::new().unwrap();
    script_cmd(&dir)
        .write_stdin("set emial ada@example.com\nsumbit\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown field `emial`"))
        .stdout(contains("Suggestion: `email`?"))
        .stdout(contains("Suggestion: `submit`?"));
}

#[test]
fn mode_command_persists_to_config_file() {
    let dir = TempDir::new().unwrap();
    script_cmd(&dir)
        .write_stdin("mode on-change\nexit\n")
        .assert()
        .success()
        .stdout(contains("Validation mode set to on-change."));

    let saved = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(saved.contains("\"on-change\""));

    script_cmd(&dir)
        .write_stdin("set email bad\nmode\nexit\n")
        .assert()
        .success()
        .stdout(contains("Email: Invalid email format"))
        .stdout(contains("Validation mode: on-change"));
}

#[test]
fn set_after_failed_submit_does_not_repeat_stale_error() {
    let dir = TempDir::new().unwrap();
    let output = script_cmd(&dir)
        .write_stdin("submit\nset name Ada\nexit\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(stdout.matches("Name: Name is required").count(), 1);
    let after_submit = stdout
        .split("Phone Number: Phone number is required")
        .nth(1)
        .unwrap();
    assert!(!after_submit.contains("Name is required"));
}
