//! Expected/actual divergence rendering for failed cases.

/// Renders a compact two-line diff with the first diverging byte
/// offset.
pub fn render_diff(expected: &str, actual: &str) -> String {
    let offset = first_divergence(expected, actual);
    format!("expected: {expected}\n  actual: {actual}\n  diverges at byte {offset}")
}

/// Index of the first byte at which the two renderings differ.
///
/// For a strict prefix, this is the shorter length.
fn first_divergence(expected: &str, actual: &str) -> usize {
    expected
        .bytes()
        .zip(actual.bytes())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()))
}
