/// Folds full-width ASCII variants (U+FF01..=U+FF5E) to their half-width
/// counterparts, so that "１" typed from a CJK input method reads as "1".
pub fn to_half_width(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{ff01}'..='\u{ff5e}' => char::from_u32(c as u32 - 0xfee0).unwrap_or(c),
            _ => c,
        })
        .collect()
}
