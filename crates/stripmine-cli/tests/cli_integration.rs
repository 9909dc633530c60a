use std::process::Command;

/// Helper to get the saxpy binary path.
fn saxpy_bin() -> std::path::PathBuf {
    let mut path = std::path::PathBuf::from(env!("CARGO_BIN_EXE_saxpy"));
    // Fallback for test environments
    if !path.exists() {
        path = std::path::PathBuf::from("target/debug/saxpy");
    }
    path
}

fn write_vector(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

// ================================================================
// check command
// ================================================================

#[test]
fn no_subcommand_checks_fixture() {
    let output = Command::new(saxpy_bin())
        .output()
        .expect("failed to run saxpy");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pass"));
    assert!(stdout.contains("31 element(s)"));
}

#[test]
fn check_on_every_emulated_width() {
    for vlen in ["128", "256", "512", "1024"] {
        let output = Command::new(saxpy_bin())
            .args(["check", "--vlen", vlen])
            .output()
            .expect("failed to run saxpy");
        assert!(output.status.success(), "VLEN={vlen}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(&format!("VLEN={vlen}")));
    }
}

#[test]
fn check_verbose_lists_strips() {
    let output = Command::new(saxpy_bin())
        .args(["check", "--vlen", "128", "--verbose"])
        .output()
        .expect("failed to run saxpy");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // e32m8 on 128 bits covers the fixture in one strip
    assert!(stdout.contains("strip @0"));
    assert!(stdout.contains("vl=31"));
    assert!(stdout.contains("-0.432565"));
}

#[test]
fn check_yaml_vector() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vector(&dir, "v.yaml", "a: 3.0\nx: [1.0, 2.0, 3.0]\ny: [0.0, 0.5, 1.0]\n");
    let output = Command::new(saxpy_bin())
        .arg("check")
        .arg("--vector")
        .arg(&path)
        .output()
        .expect("failed to run saxpy");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 element(s)"));
}

#[test]
fn check_invalid_yaml_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vector(&dir, "bad.yaml", "{{invalid");
    let output = Command::new(saxpy_bin())
        .arg("check")
        .arg("--vector")
        .arg(&path)
        .output()
        .expect("failed to run saxpy");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
}

#[test]
fn check_length_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vector(&dir, "short.yaml", "a: 1.0\nx: [1.0, 2.0]\ny: [1.0]\n");
    let output = Command::new(saxpy_bin())
        .arg("check")
        .arg("--vector")
        .arg(&path)
        .output()
        .expect("failed to run saxpy");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Length mismatch"));
}

#[test]
fn check_zero_tolerance_reports_every_element() {
    let output = Command::new(saxpy_bin())
        .args(["check", "--tolerance", "0"])
        .output()
        .expect("failed to run saxpy");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let failures = stdout.lines().filter(|l| l.starts_with("fail [")).count();
    assert_eq!(failures, 31);
    assert!(!stdout.contains("pass ("));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("31 of 31 element(s) outside tolerance"));
}

#[test]
fn check_rejects_bad_vlen() {
    let output = Command::new(saxpy_bin())
        .args(["check", "--vlen", "96"])
        .output()
        .expect("failed to run saxpy");
    assert!(!output.status.success());
}

// ================================================================
// widths command
// ================================================================

#[test]
fn widths_lists_all_groupings() {
    let output = Command::new(saxpy_bin())
        .args(["widths", "-n", "31", "--vlen", "128"])
        .output()
        .expect("failed to run saxpy");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("e32m1: VLMAX=4 strips=8 [4x7 3]"));
    assert!(stdout.contains("e32m8 (kernel): VLMAX=32 strips=1 [31]"));
}

#[test]
fn widths_single_grouping() {
    let output = Command::new(saxpy_bin())
        .args(["widths", "-n", "10", "--vlen", "256", "--lmul", "m2"])
        .output()
        .expect("failed to run saxpy");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("e32m2: VLMAX=16 strips=1 [10]"));
    assert!(!stdout.contains("e32m1"));
}

#[test]
fn widths_zero_elements() {
    let output = Command::new(saxpy_bin())
        .args(["widths", "-n", "0", "--vlen", "128", "--lmul", "m1"])
        .output()
        .expect("failed to run saxpy");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("strips=0 []"));
}

#[test]
fn widths_rejects_count_above_limit() {
    let output = Command::new(saxpy_bin())
        .args(["widths", "-n", "16777217", "--vlen", "128"])
        .output()
        .expect("failed to run saxpy");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn widths_accepts_count_at_limit() {
    let output = Command::new(saxpy_bin())
        .args(["widths", "-n", "16777216", "--vlen", "128", "--lmul", "m8"])
        .output()
        .expect("failed to run saxpy");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("e32m8 (kernel): VLMAX=32 strips=524288 [32x524288]"));
}

// ================================================================
// info command
// ================================================================

#[test]
fn info_reports_host() {
    let output = Command::new(saxpy_bin())
        .arg("info")
        .output()
        .expect("failed to run saxpy");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("VLEN:"));
    assert!(stdout.contains("kernel:      e32m8"));
}
