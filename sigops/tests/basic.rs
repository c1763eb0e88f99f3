use std::process::Command;

fn sample(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sigops"))
        .arg("sample")
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run sigops sample")
}

fn rows(stdout: &[u8]) -> Vec<[f64; 3]> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.starts_with("[SigOps]"))
        .map(|line| {
            let values: Vec<f64> = line
                .split_whitespace()
                .map(|v| v.parse().expect("numeric column"))
                .collect();
            [values[0], values[1], values[2]]
        })
        .collect()
}

#[test]
fn sample_prints_caption_and_rows() {
    let output = sample(&["--demo", "time-shift", "--param", "shift=2", "--from", "-1", "--to", "1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[SigOps][INFO] time-shift: y(t) = x(t - 2.00)"));
    let rows = rows(&output.stdout);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][0], -1.0);
    assert_eq!(rows[4][0], 1.0);
}

#[test]
fn zero_amplitude_flattens_transformed_column() {
    let output = sample(&["--demo", "amplitude", "--param", "amplitude=0"]);
    assert!(output.status.success());
    let rows = rows(&output.stdout);
    assert_eq!(rows.len(), 41);
    assert!(rows.iter().all(|row| row[2] == 0.0));
    assert!(rows.iter().any(|row| row[1] != 0.0));
}

#[test]
fn unknown_parameter_fails() {
    let output = sample(&["--demo", "time-scaling", "--param", "shift=1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[SigOps][ERROR]"));
}
