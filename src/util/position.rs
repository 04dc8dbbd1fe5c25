/// Converts a byte offset into a 1-based `(line, column)` pair.
///
/// Columns count characters, not bytes. An offset past the end of the text
/// points just after the last character; an offset inside a multi-byte
/// character is moved back to that character's start.
///
/// # Example
/// ```
/// use confex::util::position::line_col;
///
/// let source = "A := 1;\nstruct { Б = 2 }";
///
/// assert_eq!(line_col(source, 0), (1, 1));
/// assert_eq!(line_col(source, 8), (2, 1));
/// assert_eq!(line_col(source, 19), (2, 11));
/// ```
#[must_use]
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;

    (line, column)
}
