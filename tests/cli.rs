use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_aten-linear"))
}

const EXPECTED: &str = "\
tensor([[2.5000, 2.5000, 2.5000, 2.5000, 1.5000],
        [2.5000, 2.5000, 2.5000, 2.5000, 1.5000],
        [2.5000, 2.5000, 2.5000, 2.5000, 1.5000]])
tensor([[[2., 2., 2., 2., 1.],
         [2., 2., 2., 2., 1.],
         [2., 2., 2., 2., 1.]]])
";

fn run() -> std::process::Output {
    bin().env_remove("RUST_LOG").output().expect("failed to run aten-linear")
}

#[test]
fn prints_both_results() {
    let output = run();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn output_is_deterministic() {
    let first = run();
    let second = run();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let output = bin()
        .env_remove("RUST_LOG")
        .arg("-vv")
        .output()
        .expect("failed to run aten-linear");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(String::from_utf8_lossy(&output.stderr).contains("linear"));
}

#[test]
fn rejects_unknown_arguments() {
    let output = bin().arg("--bogus").output().expect("failed to run aten-linear");
    assert!(!output.status.success());
}
