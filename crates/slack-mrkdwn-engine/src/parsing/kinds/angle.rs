/// Angle-bracket constructs: links, `mailto:` links and mentions.
pub struct Angle;

impl Angle {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    /// Separates a target from its display text or label.
    pub const PIPE: u8 = b'|';

    pub const HTTP: &'static [u8; 7] = b"http://";
    pub const HTTPS: &'static [u8; 8] = b"https://";
    pub const MAILTO: &'static [u8; 7] = b"mailto:";

    pub const USER: &'static [u8; 2] = b"<@";
    pub const CHANNEL: &'static [u8; 2] = b"<#";
    pub const SPECIAL: &'static [u8; 2] = b"<!";

    /// Characters allowed in user IDs, channel IDs and special keywords.
    pub fn is_word(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_'
    }
}
