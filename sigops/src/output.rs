pub fn print_info(message: &str) {
    println!("[SigOps][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[SigOps][ERROR]: {message}");
}

/// One `t original transformed` row.
pub fn print_sample(t: f64, original: f64, transformed: f64) {
    println!("{:.3} {:.6} {:.6}", t + 0.0, original + 0.0, transformed + 0.0);
}
