//! Spreadsheet column letters

/// Letter name of a zero-based column position: 0 is `A`, 13 is `N`,
/// 26 is `AA`. Bijective base-26, so there is no zero digit.
pub fn column_index_to_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;

    while n > 0 {
        let digit = (n - 1) % 26;
        letters.push(b'A' + digit as u8);
        n = (n - 1) / 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Letter names of the two formula columns, e.g. `["N", "O"]`.
pub fn formula_column_letters(positions: &[usize; 2]) -> [String; 2] {
    positions.map(column_index_to_letter)
}
