use assert_cmd::Command;
use predicates::prelude::*;

fn heatpump_codes() -> Command {
    let mut command = Command::cargo_bin("heatpump-codes").unwrap();
    command.env_remove("HEATPUMP_CODES_LOG");
    command
}

#[test]
fn describe_as_csv() {
    heatpump_codes()
        .args(["describe", "-f", "csv", " f.01", "S.14", "X.1"])
        .assert()
        .success()
        .stdout(
            "Code,Category,Severity,Description\n\
             F.01,fault,error,Außentemperatursensor defekt\n\
             S.14,status,warning,Notbetrieb/Störung\n\
             X.1,unknown,unknown,X.1\n",
        );
}

#[test]
fn describe_as_jsonl() {
    heatpump_codes()
        .args(["describe", "--format", "jsonl", "s.999"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"code":"S.999","category":"status","severity":"info","description":"S.999 - Unbekannter Statuscode"}"#,
        ));
}

#[test]
fn describe_requires_a_code() {
    heatpump_codes().arg("describe").assert().failure();
}

#[test]
fn list_one_category() {
    let output = heatpump_codes()
        .args(["codes", "--category", "maintenance", "-f", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "P.1,maintenance,warning,Wartung nach Zeitintervall steht bevor");
    assert!(lines[1..].iter().all(|l| l.starts_with("P.")));
}

#[test]
fn search_codes() {
    heatpump_codes()
        .args(["codes", "-f", "jsonl", "legionellen"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""code":"S.52""#))
        .stdout(predicate::str::contains("S.10").not());
}

#[test]
fn write_to_file() {
    let dir = std::env::temp_dir().join(format!("heatpump-codes-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("codes.jsonl");
    heatpump_codes()
        .args(["codes", "-f", "jsonl", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 342);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_log_filter_is_reported() {
    heatpump_codes()
        .env("HEATPUMP_CODES_LOG", "heatpump_codes=loud")
        .args(["describe", "S.10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HEATPUMP_CODES_LOG"));
}

#[cfg(unix)]
#[test]
fn non_unicode_log_filter_is_reported() {
    use std::os::unix::ffi::OsStrExt as _;
    let filter = std::ffi::OsStr::from_bytes(b"heatpump_codes=\xff");
    heatpump_codes()
        .env("HEATPUMP_CODES_LOG", filter)
        .args(["describe", "S.10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HEATPUMP_CODES_LOG"))
        .stderr(predicate::str::contains("not valid unicode"));
}
