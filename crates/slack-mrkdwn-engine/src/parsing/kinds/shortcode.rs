/// Emoji shortcode `:name:`.
pub struct Shortcode;

impl Shortcode {
    pub const COLON: u8 = b':';

    /// Characters allowed in a shortcode name: `[A-Za-z0-9_+-]`.
    pub fn is_name(b: u8) -> bool {
        b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'-')
    }
}
