//! Runs the `canright-bases` binary.

use std::process::{Command, Output};

use canright_bases::{emit_all, emit_table, Format, Table};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_canright-bases"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> &str {
    std::str::from_utf8(&out.stdout).unwrap()
}

#[test]
fn no_arguments_prints_every_table() {
    let out = run(&[]);

    assert!(out.status.success());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), emit_all(Format::Hex));
    assert!(out.stderr.is_empty());
}

#[test]
fn same_output_every_run() {
    assert_eq!(run(&[]).stdout, run(&[]).stdout);
}

#[test]
fn formats() {
    let cases = [
        ("hex", Format::Hex),
        ("python", Format::Python),
        ("c", Format::C),
        ("symbolic", Format::Symbolic),
    ];

    for &(arg, format) in cases.iter() {
        let out = run(&["--format", arg]);
        assert!(out.status.success(), "--format {}", arg);
        assert_eq!(stdout(&out), emit_all(format));
    }
}

#[test]
fn single_table() {
    let out = run(&["-f", "python", "GF2_4"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), emit_table(Table::Gf2_4, Format::Python));
}

#[test]
fn unknown_table_fails() {
    let out = run(&["bogus"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid argument: unknown table \"bogus\""), "{}", stderr);
}

#[test]
fn aliases() {
    let out = run(&["--aliases"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert_eq!(text.lines().count(), 23);
    assert!(text.starts_with("one = 0x01\nd = 0xff\n"));
    assert!(text.contains("\nL8 = 0xaf\n"));
    assert!(text.ends_with("omega2 = 0xbc\n"));
}
