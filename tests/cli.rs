#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("escala-cli").unwrap()
}

#[test]
fn import_generate_and_list() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("escala.json");
    let csv = dir.path().join("voluntarios.csv");
    fs::write(
        &csv,
        "id,name,gender,availability\n\
         1,João,m,domingo;quarta\n\
         2,Pedro,m,domingo;quarta\n\
         3,Maria,f,domingo;quarta\n\
         4,Ana,f,domingo;quarta\n\
         5,Clara,f,domingo;quarta\n\
         6,Lucas,m,domingo;quarta\n",
    )
    .unwrap();

    cli()
        .args(["--schedule", schedule.to_str().unwrap()])
        .args(["import-volunteers", "--csv", csv.to_str().unwrap()])
        .assert()
        .success();

    cli()
        .args(["--schedule", schedule.to_str().unwrap()])
        .args([
            "generate",
            "--start",
            "2026-09-06",
            "--weeks",
            "2",
            "--team-size",
            "4",
            "--min-male",
            "1",
            "--min-female",
            "1",
            "--days",
            "domingo,quarta",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 escalas geradas"));

    cli()
        .args(["--schedule", schedule.to_str().unwrap()])
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Culto de Domingo 10h"));
}

#[test]
fn generate_warns_and_exits_2_when_days_are_skipped() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("escala.json");
    let csv = dir.path().join("voluntarios.csv");
    fs::write(
        &csv,
        "id,name,gender,availability\n1,João,m,domingo\n2,Maria,f,domingo\n",
    )
    .unwrap();

    cli()
        .args(["--schedule", schedule.to_str().unwrap()])
        .args(["import-volunteers", "--csv", csv.to_str().unwrap()])
        .assert()
        .success();

    cli()
        .args(["--schedule", schedule.to_str().unwrap()])
        .args(["generate", "--start", "2026-09-06", "--weeks", "1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("0 escalas geradas"))
        .stderr(predicate::str::contains("pulado"));
}

#[test]
fn generate_rejects_unknown_weekday_token() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("escala.json");
    let csv = dir.path().join("voluntarios.csv");
    fs::write(&csv, "id,name,gender,availability\n1,João,m,domingo\n").unwrap();

    cli()
        .args(["--schedule", schedule.to_str().unwrap()])
        .args(["import-volunteers", "--csv", csv.to_str().unwrap()])
        .assert()
        .success();

    cli()
        .args(["--schedule", schedule.to_str().unwrap()])
        .args(["generate", "--start", "2026-09-06", "--days", "feriado"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown weekday token"));
}
