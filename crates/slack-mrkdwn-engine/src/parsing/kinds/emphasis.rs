/// Single-character emphasis delimiters. Each span opens and closes with the
/// same byte on the same line, and its content is parsed again recursively.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: u8 = b'*';
    pub const ITALIC: u8 = b'_';
    pub const STRIKE: u8 = b'~';
}
