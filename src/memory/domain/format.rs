//! Human-readable byte-count formatting.

/// Unit table indexed by powers of 1024.
const BYTE_UNITS: [&str; 9] = ["bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count with one decimal digit and a power-of-1024 unit.
///
/// Zero renders as `"0 bytes"`. For any other count the unit index is
/// `floor(log1024(count))`, clamped into the unit table; the top unit
/// absorbs any overflow. Taking `u64` rules out negative counts, so the
/// logarithm is always defined.
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the unit index is an exact base-2 integer computation; the displayed value is a one-decimal approximation"
)]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 bytes".to_owned();
    }
    let unit_index = ((bytes.ilog2() / 10) as usize).min(BYTE_UNITS.len() - 1);
    let unit = BYTE_UNITS.get(unit_index).copied().unwrap_or("bytes");
    let scale = 1024_f64.powi(i32::try_from(unit_index).unwrap_or(0));
    let value = bytes as f64 / scale;
    format!("{value:.1} {unit}")
}
