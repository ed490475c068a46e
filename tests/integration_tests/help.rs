use crate::common::{cdls_command, stdout_of};

#[test]
fn help_root() {
    let output = cdls_command().arg("--help").output().unwrap();
    assert!(output.status.success());
    let help = stdout_of(&output);
    assert!(help.starts_with("cdls - "));
    for subcommand in ["list", "format", "resolve", "init"] {
        assert!(help.contains(subcommand), "missing {subcommand} in:\n{help}");
    }
    assert!(help.contains("--verbose"));
}

#[test]
fn help_list() {
    let output = cdls_command().args(["list", "--help"]).output().unwrap();
    assert!(output.status.success());
    let help = stdout_of(&output);
    for flag in ["--all", "--width", "--color", "--plain"] {
        assert!(help.contains(flag), "missing {flag} in:\n{help}");
    }
}

#[test]
fn version() {
    let output = cdls_command().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).trim(),
        format!("cdls {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn unknown_subcommand_fails() {
    let output = cdls_command().arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
