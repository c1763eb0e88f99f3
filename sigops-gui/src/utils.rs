/// Formats a parameter value for its text field: at most 6 decimals,
/// trailing zeros removed.
pub fn format_number(value: f64) -> String {
    let truncated = (value * 1_000_000.0).round() / 1_000_000.0 + 0.0;
    let mut text = format!("{:.6}", truncated);
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_zeros_removed() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn slider_steps_print_cleanly() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(0.01), "0.01");
    }
}
