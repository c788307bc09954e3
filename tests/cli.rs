use assert_cmd::Command;

const TABLE: &str = "isoform_name,logFC,P.Value,FDR\n\
    iso1,8,0.001,0.1\n\
    iso2,-8,0.002,0.5\n\
    iso3,3,0.01,0.05\n\
    iso4,7.0001,0.0001,0.2\n";

fn volcano() -> Command {
    Command::cargo_bin("rust_volcano").unwrap()
}

#[test]
fn cli_help_smoke() {
    volcano().arg("--help").assert().success();
}

#[test]
fn cli_missing_file_path_exits_nonzero() {
    let output = volcano().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--file_path"));
}

#[test]
fn cli_nonexistent_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = volcano()
        .arg("-f")
        .arg(dir.path().join("absent.csv"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn cli_run_writes_both_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("de.csv");
    std::fs::write(&input, TABLE).unwrap();
    let out = dir.path().join("report");

    let output = volcano()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .args(["-p", "run_", "-t", "7"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Number of extracted isoforms: 2"));
    assert_eq!(
        std::fs::read_to_string(out.join("run_csv_to_bed.bed")).unwrap(),
        "iso1\niso4\n"
    );
    assert!(out.join("run_volcano_grouped.png").exists());
}

#[test]
fn cli_pvalue_only_policy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("de.csv");
    std::fs::write(&input, TABLE).unwrap();

    volcano()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .args(["--policy", "pvalue-only"])
        .assert()
        .success();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("csv_to_bed.bed")).unwrap(),
        "iso1\niso2\niso4\n"
    );
}

#[test]
fn cli_missing_column_is_named() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("de.csv");
    std::fs::write(&input, "isoform_name,logFC,P.Value\niso1,9,0.01\n").unwrap();

    let output = volcano()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing required column 'FDR'"));
}

#[test]
fn cli_undetectable_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("de.txt");
    std::fs::write(&input, "isoform_name\niso1\n").unwrap();

    let output = volcano()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Delimiter could not be detected"));
}
