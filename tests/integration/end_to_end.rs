// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{Inputs, numrange};

const PERMUTATIONS: [&str; 6] = [
    "-500 3 5000",
    "-500 5000 3",
    "3 -500 5000",
    "3 5000 -500",
    "5000 -500 3",
    "5000 3 -500",
];

#[test]
fn shows_help() {
    numrange().arg("--help").assert().success().stdout(predicate::str::contains("numrange"));
}

#[test]
fn three_items_in_any_order_from_stdin() {
    for input in PERMUTATIONS {
        numrange().write_stdin(input).assert().success().stdout("{-500 - 5000}\n");
    }
}

#[test]
fn single_value() {
    numrange().write_stdin("5\n").assert().success().stdout("{5 - 5}\n");
}

#[test]
fn repeated_value() {
    numrange().write_stdin("3,3,3").assert().success().stdout("{3 - 3}\n");
}

#[test]
fn signed_zeros_agree_across_bounds() {
    let float = ["--kind", "float"];
    numrange().args(float).write_stdin("0 -0").assert().success().stdout("{-0 - 0}\n");
    numrange().args(float).args(["--bound", "min"]).write_stdin("0 -0").assert().success().stdout("-0\n");
    numrange().args(float).args(["--bound", "max"]).write_stdin("-0 0").assert().success().stdout("0\n");
}

#[test]
fn min_and_max_only() {
    numrange().args(["--bound", "min"]).write_stdin("4 -2 9").assert().success().stdout("-2\n");
    numrange().args(["--bound", "max"]).write_stdin("4 -2 9").assert().success().stdout("9\n");
}

#[test]
fn empty_input_fails() {
    for bound in ["range", "min", "max"] {
        numrange()
            .args(["--bound", bound])
            .write_stdin("")
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("empty sequence"));
    }
}

#[test]
fn reads_files_and_reports_per_file() {
    let inputs = Inputs::new();
    let a = inputs.write("a.txt", "# first batch\n10 20\n");
    let b = inputs.write("b.txt", "-5\n");

    numrange()
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("{-5 - 20}\n");

    numrange()
        .arg("--per-file")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("{10 - 20}"))
        .stdout(predicate::str::contains("{-5 - 5}"))
        .stdout(predicate::str::contains("(all)"))
        .stdout(predicate::str::contains("{-5 - 20}"));
}

#[test]
fn file_and_stdin_together() {
    let inputs = Inputs::new();
    let a = inputs.write("a.txt", "1 2");

    numrange().arg(&a).arg("-").write_stdin("-7").assert().success().stdout("{-7 - 2}\n");
}

#[test]
fn bad_token_fails_unless_lenient() {
    numrange()
        .write_stdin("1 two 3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'two'").and(predicate::str::contains("line 1")));

    numrange()
        .arg("--lenient")
        .write_stdin("1 two 3")
        .assert()
        .success()
        .stdout("{1 - 3}\n")
        .stderr(predicate::str::contains("skipping 'two'"));
}

#[test]
fn floats_and_nan() {
    numrange()
        .args(["--kind", "float"])
        .write_stdin("2.5 -0.25 1e3")
        .assert()
        .success()
        .stdout("{-0.25 - 1000}\n");

    numrange()
        .args(["--kind", "float"])
        .write_stdin("1.0 NaN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NaN"));
}

#[test]
fn missing_file_fails() {
    numrange()
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn stdin_twice_is_rejected() {
    numrange().args(["-", "-"]).assert().failure().stderr(predicate::str::contains("stdin"));
}
