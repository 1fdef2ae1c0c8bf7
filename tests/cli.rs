// tests/cli.rs
//
// Binary-level tests: exit codes and report lines.

#![allow(deprecated)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use rmmkit_test_utils::builders::MonitorOutputBuilder;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn rmmkit(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rmmkit").unwrap();
    cmd.current_dir(cwd.path()).env_remove("RMMKIT_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() -> TestResult {
    let tmp = TempDir::new()?;
    rmmkit(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("validate-monitor-output"))
        .stdout(predicate::str::contains("scaffold"));
    Ok(())
}

#[test]
fn valid_output_file_passes() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("out.txt"), MonitorOutputBuilder::new().build())?;

    rmmkit(&tmp)
        .args(["validate-monitor-output", "--input", "out.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("OK: Monitor output is valid (out.txt)"));
    Ok(())
}

#[test]
fn invalid_stdin_fails_with_one_line_per_violation() -> TestResult {
    let tmp = TempDir::new()?;

    rmmkit(&tmp)
        .args(["validate-monitor-output", "--input", "-"])
        .write_stdin("Status=OK\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "INVALID: Monitor output failed validation (<stdin>)",
        ))
        .stderr(predicate::str::contains(
            "- Expected exactly one '<-Start Diagnostic->' line.",
        ))
        .stderr(predicate::str::contains(
            "- Expected exactly one '<-End Result->' line.",
        ));
    Ok(())
}

#[test]
fn bad_output_var_is_a_usage_error() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("out.txt"), "")?;

    rmmkit(&tmp)
        .args(["validate-monitor-output", "--input", "out.txt", "--output-var", "A B"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("ERROR: Invalid --output-var 'A B'"));
    Ok(())
}

#[test]
fn config_file_sets_default_output_var() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("Rmm.toml"), "[run]\noutput_var = \"Health\"\n")?;
    let output = MonitorOutputBuilder::new()
        .result_lines(&["Health=OK"])
        .build();
    fs::write(tmp.path().join("out.txt"), output)?;

    rmmkit(&tmp)
        .args(["validate-monitor-output", "--input", "out.txt"])
        .assert()
        .code(0);
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected_before_running() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("check.py"), "print('hi')\n")?;

    rmmkit(&tmp)
        .args(["run", "--script", "check.py"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: Unsupported script extension: .py",
        ));
    Ok(())
}

#[test]
fn missing_vars_file_is_a_usage_error() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("check.sh"), "echo hi\n")?;

    rmmkit(&tmp)
        .args(["run", "--script", "check.sh", "--vars", "missing.env"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--vars file not found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn monitor_run_reports_invalid_output_and_exits_2() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("check.sh"), "echo 'Status=OK'\n")?;

    rmmkit(&tmp)
        .args(["run", "--script", "check.sh", "--workdir", "work", "--category", "monitors"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Exit code: 0"))
        .stderr(predicate::str::contains(
            "Monitor output: INVALID (expected 'Status=...')",
        ));

    assert_eq!(fs::read_to_string(tmp.path().join("work/stdout.txt"))?, "Status=OK\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn plain_script_exit_code_passes_through() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("check.sh"), "exit 4\n")?;

    rmmkit(&tmp)
        .args(["run", "--script", "check.sh", "--workdir", "work"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Exit code: 4"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn vars_file_reaches_the_script() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("check.sh"), "echo \"site=$SITE\"\n")?;
    fs::write(tmp.path().join("vars.env"), "export SITE='Head Office'\n")?;

    rmmkit(&tmp)
        .args(["run", "--script", "check.sh", "--workdir", "work", "--vars", "vars.env"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("work/stdout.txt"))?,
        "site=Head Office\n"
    );
    Ok(())
}

#[test]
fn scaffold_dry_run_writes_nothing() -> TestResult {
    let tmp = TempDir::new()?;
    fs::create_dir_all(tmp.path().join("templates"))?;
    fs::write(tmp.path().join("templates/bash-monitor.sh.tmpl"), "{{NAME}}\n")?;

    rmmkit(&tmp)
        .args([
            "scaffold", "--os", "linux", "--category", "monitors", "--name", "Disk Check",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target:    components/Monitors/Linux/disk-check.sh"))
        .stdout(predicate::str::contains("Dry run: not writing files."));

    assert!(!tmp.path().join("components").exists());
    Ok(())
}

#[test]
fn usage_errors_do_not_use_the_validation_exit_code() -> TestResult {
    let tmp = TempDir::new()?;

    rmmkit(&tmp)
        .args(["run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--script"));
    Ok(())
}

#[test]
fn missing_interpreter_message_ends_with_the_install_hint() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("Rmm.toml"), "[interpreters]\nshell = \"rmmkit-no-such-shell\"\n")?;
    fs::write(tmp.path().join("check.sh"), "echo hi\n")?;

    rmmkit(&tmp)
        .args(["run", "--script", "check.sh", "--workdir", "work"])
        .assert()
        .code(1)
        .stderr(predicate::str::ends_with(
            "ERROR: Command not found: rmmkit-no-such-shell (install it and try again)\n",
        ))
        .stderr(predicate::str::contains("os error").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn vars_file_values_are_not_expanded() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("check.sh"), "printf '%s\\n' \"$PASS\"\n")?;
    fs::write(tmp.path().join("vars.env"), "PASS=abc$HOME\n")?;

    rmmkit(&tmp)
        .args(["run", "--script", "check.sh", "--workdir", "work", "--vars", "vars.env"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(tmp.path().join("work/stdout.txt"))?, "abc$HOME\n");
    Ok(())
}
