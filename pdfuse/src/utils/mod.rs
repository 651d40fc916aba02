//! Small formatting helpers shared across modules.

/// Pick the singular or plural form of a noun for `count`.
///
/// Only exactly one item takes the singular form.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Format file size as human-readable string.
///
/// # Arguments
///
/// * `size` - File size in bytes
///
/// # Returns
///
/// Formatted string like "1.50 MB" or "234 bytes"
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
