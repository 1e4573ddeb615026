use super::span::Span;

/// One entry of the flat token stream produced by the tokenizer.
///
/// `text` is the full source slice of the token (delimiters included) and
/// `span` its absolute position. Concatenating `text` over a token stream
/// reproduces the tokenized input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub text: &'a str,
    pub span: Span,
}

/// What a token is, plus the pieces of source it captured.
///
/// All fields borrow from the input; nothing is resolved against lookup
/// tables at this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Plain text that isn't part of any construct.
    Text,
    /// `*inner*`, with the offset of `inner` for recursive parsing.
    Bold(Inner<'a>),
    /// `_inner_`
    Italic(Inner<'a>),
    /// `~inner~`
    Strike(Inner<'a>),
    /// `` `code` `` content.
    Code(&'a str),
    /// ```` ```block``` ```` content, newlines preserved.
    CodeBlock(&'a str),
    /// `<url|display>`, `<url>`, `<mailto:addr|display>` or `<mailto:addr>`.
    Link { url: &'a str, display: &'a str },
    /// `<@ID>`
    UserMention { id: &'a str },
    /// `<#ID|name>` or `<#ID>`.
    ChannelMention { id: &'a str, name: Option<&'a str> },
    /// `<!keyword>` or `<!keyword|label>`; the label is ignored for display.
    SpecialMention { keyword: &'a str, label: Option<&'a str> },
    /// `:shortcode:`, whether or not the emoji table knows it.
    Emoji { shortcode: &'a str },
    Newline,
}

/// Content between an emphasis span's delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inner<'a> {
    pub text: &'a str,
    /// Absolute offset of `text`.
    pub base: usize,
}

impl Token<'_> {
    /// True for the kinds whose content is parsed again as markup.
    pub fn is_container(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Bold(_) | TokenKind::Italic(_) | TokenKind::Strike(_)
        )
    }
}
