//! # Token Kinds
//!
//! Zero-sized types that own the delimiters of each mrkdwn construct. The
//! tokenizer reads these constants; it never hardcodes `<@` or `` ``` ``.
//!
//! - **`CodeBlock`** / **`InlineCode`**: backtick fences, raw zones
//! - **`Angle`**: `<…>` links, mailto links and mentions
//! - **`Shortcode`**: `:name:` emoji candidates
//! - **`Emphasis`**: `*bold*`, `_italic_`, `~strike~`

pub mod angle;
pub mod code;
pub mod emphasis;
pub mod shortcode;

pub use angle::Angle;
pub use code::{CodeBlock, InlineCode};
pub use emphasis::Emphasis;
pub use shortcode::Shortcode;

/// Line break; never part of inline code or an emphasis span.
pub const NEWLINE: u8 = b'\n';

/// Bytes at which a run of plain text must stop because a structural rule
/// could start there.
pub fn is_special(b: u8) -> bool {
    matches!(b, b'*' | b'_' | b'~' | b'`' | b'<' | b':' | NEWLINE)
}
