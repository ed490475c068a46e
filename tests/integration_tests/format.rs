//! `cdls format`: the formatter alone, over fixture listings.

use std::fs;

use crate::common::{cdls_command, fixture, run_with_stdin, stderr_of, stdout_of};

fn format_fixture(name: &str, width: &str) -> String {
    let output = cdls_command()
        .args(["format", "--width", width, "--input"])
        .arg(fixture(name))
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    stdout_of(&output)
}

#[test]
fn test_format_two_columns() {
    assert_eq!(
        format_fixture("plain.txt", "100"),
        "    4.0K  2024-01-01 10:00  bin            1.2M  2024-02-11 23:59  archive.tar.gz\n\
         \x20   4.0K  2024-01-03 18:42  docs            16K  2024-01-04 12:00  run.sh\n\
         \x20    220  2023-12-30 07:05  .bashrc    \n"
    );
}

#[test]
fn test_format_below_threshold_is_single_column() {
    assert_eq!(
        format_fixture("plain.txt", "99"),
        "    4.0K  2024-01-01 10:00  bin\n\
         \x20   4.0K  2024-01-03 18:42  docs\n\
         \x20    220  2023-12-30 07:05  .bashrc\n\
         \x20   1.2M  2024-02-11 23:59  archive.tar.gz\n\
         \x20    16K  2024-01-04 12:00  run.sh\n"
    );
}

#[test]
fn test_format_reads_stdin() {
    let input = fs::read_to_string(fixture("plain.txt")).unwrap();
    let output = run_with_stdin(cdls_command().args(["format", "--width", "99"]), &input);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format_fixture("plain.txt", "99"));
}

#[test]
fn test_format_uses_columns_env() {
    let output = cdls_command()
        .env("COLUMNS", "100")
        .args(["format", "--input"])
        .arg(fixture("plain.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format_fixture("plain.txt", "100"));
}

#[test]
fn test_format_keeps_escape_sequences() {
    let output = format_fixture("color.txt", "120");
    assert!(output.contains("\x1b[01;34mmy projects\x1b[0m"));
    assert!(output.contains("\x1b[01;36mlatest\x1b[0m -> \x1b[01;34mreleases\x1b[0m"));
    assert!(!output.contains("total"));
    assert_eq!(output.lines().count(), 3);
}

#[test]
fn test_format_empty_input() {
    let output = run_with_stdin(cdls_command().args(["format", "--width", "200"]), "total 0\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn test_format_malformed_line_passes_through() {
    let output = run_with_stdin(
        cdls_command().args(["format", "--width", "80"]),
        "ls: permission denied\n\
         -rw-r--r-- 1 alice staff 5 2024-01-01 10:00 a  b\n",
    );
    assert_eq!(
        stdout_of(&output),
        "ls: permission denied\n\
         \x20      5  2024-01-01 10:00  a  b\n"
    );
}

#[test]
fn test_format_missing_input_file() {
    let output = cdls_command()
        .args(["format", "--input", "/nonexistent/listing.txt"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Failed to read"));
}

#[test]
fn test_format_rejects_zero_width() {
    let output = cdls_command()
        .args(["format", "--width", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}
