/// Reverse the accumulated letters and alternate their case.
///
/// The first character after reversal is lowercase, the second uppercase, and
/// so on. An empty accumulator yields an empty string.
pub fn alternating_caps(letters: &[char]) -> String {
    letters
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, c)| {
            if idx % 2 == 0 {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
