//! Human-readable size formatting with binary (1024-based) units.

/// Unit prefixes in ascending scale order. The table ends at "tera":
/// values too large for it simply stay in terabytes.
const UNIT_PREFIXES: [&str; 5] = ["", "kilo", "mega", "giga", "tera"];

/// Scale a byte count down by powers of 1024 and pick the matching unit.
///
/// The loop condition is a strict `>`, so a value of exactly 1024 stays in
/// the lower unit: `scale_bytes(1024)` is `(1024.0, "bytes")`, not
/// `(1.0, "kilobytes")`. Historical reports depend on this boundary.
pub fn scale_bytes(bytes: u64) -> (f64, &'static str) {
    let mut value = bytes as f64;
    let mut scale = 0;
    while value > 1024.0 && scale + 1 < UNIT_PREFIXES.len() {
        value /= 1024.0;
        scale += 1;
    }
    (value, UNIT_PREFIXES[scale])
}

/// Format a byte count as e.g. "8 kilobytes" or "8.52 megabytes".
///
/// Whole values print without decimals, everything else with exactly two.
pub fn format_bytes(bytes: u64) -> String {
    let (value, prefix) = scale_bytes(bytes);
    if value.fract() == 0.0 {
        format!("{} {prefix}bytes", value as u64)
    } else {
        format!("{value:.2} {prefix}bytes")
    }
}
