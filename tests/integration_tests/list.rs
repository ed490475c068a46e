//! `cdls list` against the real `ls`. Skipped when GNU ls is not installed.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::common::{TestDir, cdls_command, gnu_ls_available, stderr_of, stdout_of};

fn sample_dir() -> TestDir {
    let dir = TestDir::new();
    dir.dir("src");
    dir.dir("docs");
    dir.file("Cargo.toml", "[package]\n");
    dir.file("README.md", "# cdls\n");
    dir.file("notes with  spaces.txt", "");
    dir.file(".hidden", "");
    dir
}

fn list(dir: &TestDir, args: &[&str]) -> String {
    let output = cdls_command()
        .args(["list", "--color", "never"])
        .args(args)
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    stdout_of(&output)
}

/// Name column of a single-column listing: everything after `size  date time  `.
fn names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.get(28..).unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_list_single_column() {
    if !gnu_ls_available() {
        return;
    }
    let dir = sample_dir();
    let output = list(&dir, &["--width", "80"]);

    assert!(!output.contains("total"));
    assert!(!output.contains("drwx"));
    // Directories first, then files, in ls order (C collation)
    assert_eq!(
        names(&output),
        vec!["docs", "src", "Cargo.toml", "README.md", "notes with  spaces.txt"]
    );
    for line in output.lines() {
        // 8-wide size, two spaces, long-iso timestamp, two spaces
        assert_eq!(&line[8..10], "  ");
        assert_eq!(line.as_bytes()[14], b'-');
        assert_eq!(&line[26..28], "  ");
    }
}

#[test]
fn test_list_two_columns() {
    if !gnu_ls_available() {
        return;
    }
    let dir = sample_dir();
    let output = list(&dir, &["--width", "200"]);
    let rows: Vec<&str> = output.lines().collect();

    // Five entries: three rows, left column read top to bottom first
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("docs") && rows[0].ends_with("README.md"));
    assert!(rows[1].contains("src") && rows[1].ends_with("notes with  spaces.txt"));
    assert!(rows[2].contains("Cargo.toml"));

    let right_start = rows[0].find("README").unwrap() - 28;
    assert_eq!(rows[1].find("notes").unwrap() - 28, right_start);
}

#[test]
fn test_list_hidden() {
    if !gnu_ls_available() {
        return;
    }
    let dir = sample_dir();
    assert!(!list(&dir, &["--width", "80"]).contains(".hidden"));
    assert!(list(&dir, &["--width", "80", "-a"]).contains(".hidden"));

    let output = cdls_command()
        .env("CDLS_SHOW_HIDDEN", "true")
        .args(["list", "--width", "80"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(stdout_of(&output).contains(".hidden"));
}

#[test]
fn test_list_plain_passes_through() {
    if !gnu_ls_available() {
        return;
    }
    let dir = sample_dir();
    let output = list(&dir, &["--plain"]);
    assert!(output.starts_with("total"));
    assert!(output.contains("drwx"));
}

#[test]
fn test_list_color_always_keeps_escapes() {
    if !gnu_ls_available() {
        return;
    }
    let dir = sample_dir();
    let output = cdls_command()
        .env("LS_COLORS", "di=01;34")
        .args(["list", "--width", "80", "--color", "always"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(stdout_of(&output).contains("\x1b[01;34mdocs\x1b[0m"));
}

#[test]
fn test_list_default_subcommand_uses_current_dir() {
    if !gnu_ls_available() {
        return;
    }
    let dir = sample_dir();
    let output = cdls_command()
        .current_dir(dir.path())
        .env("CDLS_COLOR", "never")
        .env("COLUMNS", "80")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), list(&dir, &["--width", "80"]));
}

#[test]
fn test_list_missing_directory() {
    let dir = TestDir::new();
    let output = cdls_command()
        .arg("list")
        .arg(dir.path().join("gone"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Not a directory"));
}

#[test]
fn test_list_unknown_listing_command() {
    let dir = TestDir::new();
    let output = cdls_command()
        .env("CDLS_LISTING_COMMAND", "no-such-ls-anywhere")
        .arg("list")
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("no-such-ls-anywhere"));
}

/// A stand-in for GNU ls that lists one readable and one unreadable entry,
/// complains about the second on stderr, then exits with `exit_code`.
fn failing_ls(dir: &TestDir, exit_code: i32, listing: bool) -> PathBuf {
    let rows = if listing {
        "echo 'total 8'\n\
         echo '-rw-r--r-- 1 alice staff 5 2024-01-01 10:00 readable'\n\
         echo '-????????? ? ? ? ? ? ? locked'\n"
    } else {
        ""
    };
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then echo 'ls (GNU coreutils) 9.4'; exit 0; fi\n\
         {rows}\
         echo \"ls: cannot access 'locked': Permission denied\" >&2\n\
         exit {exit_code}\n"
    );
    let path = dir.file("fake-ls", &script);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn list_with(program: &Path, dir: &TestDir) -> std::process::Output {
    cdls_command()
        .env("CDLS_LISTING_COMMAND", program)
        .args(["list", "--width", "40", "--color", "never"])
        .arg(dir.path())
        .output()
        .unwrap()
}

#[test]
fn test_list_minor_problems_still_lists() {
    let dir = TestDir::new();
    let program = failing_ls(&dir, 1, true);
    let output = list_with(&program, &dir);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    // Too narrow for two columns
    assert_eq!(
        stdout_of(&output),
        "       5  2024-01-01 10:00  readable\n       ?  ? ?  locked\n"
    );

    let stderr = stderr_of(&output);
    assert!(stderr.contains("reported problems"));
    assert!(stderr.contains("cannot access 'locked': Permission denied"));
}

#[test]
fn test_list_minor_problems_with_nothing_listed_fails() {
    let dir = TestDir::new();
    let program = failing_ls(&dir, 1, false);
    let output = list_with(&program, &dir);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "");
    assert!(stderr_of(&output).contains("Permission denied"));
}

#[test]
fn test_list_serious_trouble_fails() {
    let dir = TestDir::new();
    let program = failing_ls(&dir, 2, true);
    let output = list_with(&program, &dir);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_of(&output), "");
    assert!(stderr_of(&output).contains("Permission denied"));
}
