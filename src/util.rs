//! Small utility helpers for HTTP argument building and display formatting.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-free. They are used by networking and UI code.

/// Build curl command arguments for fetching a URL.
///
/// On Windows, adds `-k` flag to skip SSL certificate verification to work around
/// common SSL certificate issues (exit code 77). On other platforms, uses standard
/// SSL verification.
///
/// Inputs:
/// - `url`: The URL to fetch
/// - `extra_args`: Additional curl arguments (e.g., `["--max-time", "10"]`)
///
/// Output:
/// - Vector of curl arguments ready to pass to `Command::args()`
///
/// Details:
/// - Base arguments: `-sSLf` (silent, show errors, follow redirects, fail on HTTP errors)
/// - Windows: Adds `-k` to skip SSL verification
/// - Appends `extra_args` and `url` at the end
pub fn curl_args(url: &str, extra_args: &[&str]) -> Vec<String> {
    let mut args = vec!["-sSLf".to_string()];

    #[cfg(target_os = "windows")]
    {
        // Skip SSL certificate verification on Windows to avoid exit code 77
        args.push("-k".to_string());
    }

    // Add any extra arguments
    for arg in extra_args {
        args.push((*arg).to_string());
    }

    // URL goes last
    args.push(url.to_string());

    args
}

/// Uppercase the first character of a label, leaving the rest as-is.
///
/// The API reports categories in lowercase; the selector displays them
/// capitalized, matching the catalog's presentation.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Format a price in dollars with two decimal places, e.g. `$109.95`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Format a product rating as `3.9 (120)`, or `-` when there are no ratings.
pub fn format_rating(rate: f64, count: u64) -> String {
    if count == 0 {
        return "-".to_string();
    }
    format!("{rate:.1} ({count})")
}

/// Truncate a string to at most `max` characters, appending `…` when cut.
///
/// Operates on character boundaries, so multi-byte titles are safe.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
