//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use clubhouse_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Net Skins", 20), "Net Skins");
/// assert_eq!(truncate_string("Club Championship", 10), "Club Ch...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: &Option<T>, default: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate_string("Créme Brûlée Open", 8), "Créme...");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(&Some(72), "-"), "72");
        assert_eq!(format_optional::<i32>(&None, "-"), "-");
    }
}
