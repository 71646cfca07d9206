//! Size statistics printed for every font

/// Percentage of the original size saved by subsetting.
///
/// `(1 - compressed / original) * 100`. An empty original yields `0.0`.
/// The result is negative when the "compressed" file grew.
pub fn compression_ratio(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

/// Format a byte count as mebibytes with two decimals, e.g. `"1.50 MB"`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
