/// Fenced code block, delimited by triple backticks on both sides.
///
/// The content may span lines and is matched non-greedily: the block closes
/// at the first fence after the opening one.
pub struct CodeBlock;

impl CodeBlock {
    pub const FENCE: &'static [u8; 3] = b"```";
}

/// Inline code span. A raw zone like [`CodeBlock`], but it never crosses a
/// newline and must not be empty.
pub struct InlineCode;

impl InlineCode {
    pub const TICK: u8 = b'`';
}
