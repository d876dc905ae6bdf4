use std::process::{Command, Output};

fn run_randnum(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_randnum"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn randnum")
}

fn parse_value(stdout: &[u8]) -> u32 {
    let text = std::str::from_utf8(stdout).expect("stdout is utf-8");
    let digits = text
        .strip_prefix("Random number: ")
        .and_then(|s| s.strip_suffix('\n'))
        .unwrap_or_else(|| panic!("unexpected output {text:?}"));
    assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    assert!(!digits.starts_with('0'), "leading zero in {digits:?}");
    digits.parse().unwrap()
}

#[test]
fn prints_one_value_in_range() {
    let out = run_randnum(&[]);
    assert!(out.status.success());
    assert_eq!(out.status.code(), Some(0));
    let value = parse_value(&out.stdout);
    assert!((1..=100).contains(&value), "out of range: {value}");
}

#[test]
fn extra_arguments_are_ignored() {
    let out = run_randnum(&["--help", "-x", "17", "anything"]);
    assert!(out.status.success());
    let value = parse_value(&out.stdout);
    assert!((1..=100).contains(&value));
}

#[test]
fn nothing_on_stderr_by_default() {
    let out = run_randnum(&[]);
    assert!(out.stderr.is_empty(), "stderr: {:?}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn debug_logging_stays_off_stdout() {
    let out = Command::new(env!("CARGO_BIN_EXE_randnum"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to spawn randnum");
    assert!(out.status.success());
    parse_value(&out.stdout);
    assert!(String::from_utf8_lossy(&out.stderr).contains("seeding generator with"));
}
