//! Tests for the protofix binary: arguments, exit codes and output streams.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn generated_tree() -> Result<TempDir> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("pkg/sub"))?;
    fs::write(temp.path().join("pkg/foo_pb2.py"), "DESCRIPTOR = None\n")?;
    fs::write(
        temp.path().join("pkg/sub/bar_pb2.py"),
        "import foo_pb2 as foo__pb2\n",
    )?;
    Ok(temp)
}

#[test]
fn test_cli_rewrites_in_place() -> Result<()> {
    let temp = generated_tree()?;

    let mut cmd = Command::cargo_bin("protofix")?;
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(
            "pkg/sub/bar_pb2.py: \"import foo_pb2 as foo__pb2\" -> \"from .. import foo_pb2 as foo__pb2\"\n",
        )
        .stderr(predicate::str::contains("Rewrote"));

    assert_eq!(
        fs::read_to_string(temp.path().join("pkg/sub/bar_pb2.py"))?,
        "from .. import foo_pb2 as foo__pb2\n"
    );
    Ok(())
}

#[test]
fn test_cli_dry_run() -> Result<()> {
    let temp = generated_tree()?;

    let mut cmd = Command::cargo_bin("protofix")?;
    cmd.arg("--dry")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("-> \"from .. import foo_pb2 as foo__pb2\""))
        .stderr(predicate::str::contains("[DRY-RUN]"));

    assert_eq!(
        fs::read_to_string(temp.path().join("pkg/sub/bar_pb2.py"))?,
        "import foo_pb2 as foo__pb2\n"
    );
    Ok(())
}

#[test]
fn test_cli_missing_root_fails() -> Result<()> {
    let temp = TempDir::new()?;

    let mut cmd = Command::cargo_bin("protofix")?;
    cmd.arg(temp.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn test_cli_file_root_is_not_a_directory() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("foo_pb2.py");
    fs::write(&file, "")?;

    let mut cmd = Command::cargo_bin("protofix")?;
    cmd.arg(&file)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a directory"))
        .stderr(predicate::str::contains("does not exist").not());
    Ok(())
}

#[test]
fn test_cli_unresolved_module_fails() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("a_pb2.py"), "import missing_pb2 as m\n")?;

    let mut cmd = Command::cargo_bin("protofix")?;
    cmd.arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("a_pb2.py:1"))
        .stderr(predicate::str::contains("import missing_pb2 as m"));
    Ok(())
}

#[test]
fn test_cli_aborted_file_reports_no_rewrites() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("foo_pb2.py"), "")?;
    fs::write(
        temp.path().join("bar_pb2.py"),
        "import foo_pb2 as foo\nimport missing_pb2 as m\n",
    )?;

    let mut cmd = Command::cargo_bin("protofix")?;
    cmd.arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_cli_requires_root_argument() -> Result<()> {
    let mut cmd = Command::cargo_bin("protofix")?;
    cmd.assert().failure().code(1);
    Ok(())
}

#[test]
fn test_cli_verbose_goes_to_stderr() -> Result<()> {
    let temp = generated_tree()?;

    let mut cmd = Command::cargo_bin("protofix")?;
    cmd.arg("--verbose")
        .arg("--dry")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[VERBOSE]").not())
        .stderr(predicate::str::contains("[VERBOSE] Indexed 2 files: 2 message"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_cli_walk_error_uses_verbose_prefix() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp = generated_tree()?;
    let locked = temp.path().join("locked");
    fs::create_dir(&locked)?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;
    // Privileged users can list the directory anyway
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let assert = Command::cargo_bin("protofix")?
        .arg("--verbose")
        .arg("--dry")
        .arg(temp.path())
        .assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    assert
        .success()
        .stderr(predicate::str::contains("[VERBOSE] Walk error"))
        .stderr(predicate::str::contains("\nWalk error").not());
    Ok(())
}
