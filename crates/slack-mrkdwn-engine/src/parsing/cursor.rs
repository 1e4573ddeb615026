/// Byte scanner over one message, or over the inner text of an emphasis span.
///
/// `base` is where `s` starts in the whole message, so tokens found while
/// re-tokenizing inner text report positions in the whole message.
///
/// Every delimiter in mrkdwn is ASCII, and ASCII bytes never occur inside a
/// multi-byte UTF-8 sequence. Stopping on a delimiter byte therefore always
/// lands on a character boundary, which keeps [`Cursor::slice_from`] safe.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Offset of `s` within the outermost text.
    pub base: usize,
    /// Next byte to read, relative to `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Absolute position in the outermost text.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    /// Skips `n` bytes. Callers only skip over bytes they have already
    /// matched, so the cursor stays on a character boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one whole character, which may span several bytes.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes `b` if it is the next byte.
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// Consumes `pat` if the remaining input starts with it.
    pub fn eat_str(&mut self, pat: &[u8]) -> bool {
        if self.starts_with(pat) {
            self.i += pat.len();
            true
        } else {
            false
        }
    }

    /// Advances while `pred` holds for the next byte and returns what was consumed.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        &self.s[start..self.i]
    }

    /// Offset of the next occurrence of `pat` in the remaining input.
    /// `pat` must not be empty.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        self.rest()
            .as_bytes()
            .windows(pat.len())
            .position(|w| w == pat)
    }

    /// The slice between local index `from` and the current position.
    pub fn slice_from(&self, from: usize) -> &'a str {
        &self.s[from..self.i]
    }
}
