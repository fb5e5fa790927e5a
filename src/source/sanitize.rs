//! Cleanup of raw enumerator output lines.

/// Turn one raw output line into a displayable path.
///
/// Bytes are decoded as UTF-8 (invalid sequences are dropped), then
/// control characters are removed, which also strips the line terminator.
/// `/` and `.` always survive. Printable non-ASCII characters are kept,
/// unlike a byte-wise `isprint` filter, so names in any script stay
/// readable. Returns `None` if nothing is left.
pub fn sanitize(bytes: &[u8]) -> Option<String> {
    let cleaned: String = String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c == '/' || c == '.' || is_displayable(c))
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

fn is_displayable(c: char) -> bool {
    !c.is_control() && c != char::REPLACEMENT_CHARACTER
}
