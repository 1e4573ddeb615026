use super::{
    cursor::Cursor,
    kinds::{Angle, CodeBlock, Emphasis, InlineCode, NEWLINE, Shortcode, is_special},
    span::Span,
    token::{Inner, Token, TokenKind},
};

/// A single tokenizer rule. Returns `None` without moving the cursor when the
/// construct does not match at the current position.
type Rule = for<'a> fn(&mut Cursor<'a>) -> Option<TokenKind<'a>>;

/// Raw zones come first so nothing inside code is parsed as markup.
const RAW_RULES: [Rule; 2] = [try_code_block, try_inline_code];

/// Only tried at `<` when a `>` exists further on.
const ANGLE_RULES: [Rule; 5] = [
    try_link,
    try_mailto,
    try_user_mention,
    try_channel_mention,
    try_special_mention,
];

/// Shortcodes are tried before emphasis so `:a_b:` never opens an italic span.
const INLINE_RULES: [Rule; 5] = [try_emoji, try_bold, try_italic, try_strike, try_newline];

/// [`INLINE_RULES`] without emphasis, for spans past the nesting limit.
const LEAF_RULES: [Rule; 2] = [try_emoji, try_newline];

/// Tokenizes `s` into a flat stream covering the whole input.
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    tokenize_at(s, 0)
}

/// Tokenizes `s`, which starts at absolute offset `base` of some outer text.
///
/// # Priority
/// At each position the first matching rule wins: code block, inline code,
/// links, `mailto:` links, user, channel and special mentions, emoji
/// shortcode, bold, italic, strikethrough, newline. Anything else becomes
/// plain text up to the next byte that could start a rule.
///
/// # Guarantees
/// Every step consumes at least one character, the spans are contiguous, and
/// concatenating the token texts reproduces `s`.
pub fn tokenize_at(s: &str, base: usize) -> Vec<Token<'_>> {
    scan(s, base, &INLINE_RULES)
}

/// Like [`tokenize_at`], but bold, italic and strikethrough are never
/// recognised, so their delimiters come out as text. No token produced here
/// has inner content to parse again.
pub fn tokenize_leaves_at(s: &str, base: usize) -> Vec<Token<'_>> {
    scan(s, base, &LEAF_RULES)
}

fn scan<'s>(s: &'s str, base: usize, inline_rules: &[Rule]) -> Vec<Token<'s>> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];

    // Past the last `>` no angle-bracket construct can close, so skip the
    // scans there. Keeps runs of unclosed `<http://…` linear.
    let last_close = s.as_bytes().iter().rposition(|&b| b == Angle::CLOSE);

    while !cur.eof() {
        let start = cur.i;
        let angle_possible = last_close.is_some_and(|close| close > start);
        let kind = next_kind(&mut cur, angle_possible, inline_rules);
        out.push(Token {
            kind,
            text: cur.slice_from(start),
            span: Span::new(base + start, cur.pos()),
        });
    }

    out
}

fn next_kind<'a>(cur: &mut Cursor<'a>, angle_possible: bool, inline_rules: &[Rule]) -> TokenKind<'a> {
    for rule in RAW_RULES {
        if let Some(kind) = rule(cur) {
            return kind;
        }
    }
    if angle_possible && cur.peek() == Some(Angle::OPEN) {
        for rule in ANGLE_RULES {
            if let Some(kind) = rule(cur) {
                return kind;
            }
        }
    }
    for &rule in inline_rules {
        if let Some(kind) = rule(cur) {
            return kind;
        }
    }
    plain_text(cur)
}

/// Runs `f`, restoring the cursor if it fails.
fn attempt<'a, T>(cur: &mut Cursor<'a>, f: impl FnOnce(&mut Cursor<'a>) -> Option<T>) -> Option<T> {
    let saved = cur.clone();
    let res = f(cur);
    if res.is_none() {
        *cur = saved;
    }
    res
}

fn try_code_block<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    attempt(cur, |cur| {
        if !cur.eat_str(CodeBlock::FENCE) {
            return None;
        }
        let len = cur.find(CodeBlock::FENCE)?;
        let content = &cur.rest()[..len];
        cur.bump_n(len + CodeBlock::FENCE.len());
        Some(TokenKind::CodeBlock(content))
    })
}

fn try_inline_code<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    attempt(cur, |cur| {
        if !cur.eat(InlineCode::TICK) {
            return None;
        }
        let content = cur.eat_while(|b| b != InlineCode::TICK && b != NEWLINE);
        if content.is_empty() || !cur.eat(InlineCode::TICK) {
            return None;
        }
        Some(TokenKind::Code(content))
    })
}

/// Parses what follows a link scheme: `target|display>` or `target>`.
///
/// The display form is preferred; if it fails the bare form is tried from
/// the same position, so `<http://a|>` yields the target `a|`.
fn link_target<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, Option<&'a str>)> {
    let with_display = attempt(cur, |cur| {
        let target = cur.eat_while(|b| b != Angle::PIPE && b != Angle::CLOSE);
        if target.is_empty() || !cur.eat(Angle::PIPE) {
            return None;
        }
        let display = cur.eat_while(|b| b != Angle::CLOSE);
        if display.is_empty() || !cur.eat(Angle::CLOSE) {
            return None;
        }
        Some((target, Some(display)))
    });
    if with_display.is_some() {
        return with_display;
    }

    attempt(cur, |cur| {
        let target = cur.eat_while(|b| b != Angle::CLOSE);
        if target.is_empty() || !cur.eat(Angle::CLOSE) {
            return None;
        }
        Some((target, None))
    })
}

fn try_link<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    attempt(cur, |cur| {
        if !cur.eat(Angle::OPEN) {
            return None;
        }
        let url_start = cur.i;
        if !(cur.eat_str(Angle::HTTPS) || cur.eat_str(Angle::HTTP)) {
            return None;
        }
        let scheme_len = cur.i - url_start;
        let (target, display) = link_target(cur)?;
        let src = cur.s;
        let url = &src[url_start..url_start + scheme_len + target.len()];
        Some(TokenKind::Link {
            url,
            display: display.unwrap_or(url),
        })
    })
}

fn try_mailto<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    attempt(cur, |cur| {
        if !cur.eat(Angle::OPEN) {
            return None;
        }
        let url_start = cur.i;
        if !cur.eat_str(Angle::MAILTO) {
            return None;
        }
        let (address, display) = link_target(cur)?;
        let src = cur.s;
        let url = &src[url_start..url_start + Angle::MAILTO.len() + address.len()];
        Some(TokenKind::Link {
            url,
            display: display.unwrap_or(address),
        })
    })
}

fn try_user_mention<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    attempt(cur, |cur| {
        if !cur.eat_str(Angle::USER) {
            return None;
        }
        let id = cur.eat_while(Angle::is_word);
        if id.is_empty() || !cur.eat(Angle::CLOSE) {
            return None;
        }
        Some(TokenKind::UserMention { id })
    })
}

fn try_channel_mention<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    attempt(cur, |cur| {
        if !cur.eat_str(Angle::CHANNEL) {
            return None;
        }
        let id = cur.eat_while(Angle::is_word);
        if id.is_empty() {
            return None;
        }
        let name = if cur.eat(Angle::PIPE) {
            let name = cur.eat_while(|b| b != Angle::CLOSE);
            if name.is_empty() {
                return None;
            }
            Some(name)
        } else {
            None
        };
        cur.eat(Angle::CLOSE)
            .then_some(TokenKind::ChannelMention { id, name })
    })
}

fn try_special_mention<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    attempt(cur, |cur| {
        if !cur.eat_str(Angle::SPECIAL) {
            return None;
        }
        let keyword = cur.eat_while(Angle::is_word);
        if keyword.is_empty() {
            return None;
        }
        let label = cur
            .eat(Angle::PIPE)
            .then(|| cur.eat_while(|b| b != Angle::CLOSE));
        cur.eat(Angle::CLOSE)
            .then_some(TokenKind::SpecialMention { keyword, label })
    })
}

fn try_emoji<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    attempt(cur, |cur| {
        if !cur.eat(Shortcode::COLON) {
            return None;
        }
        let shortcode = cur.eat_while(Shortcode::is_name);
        if shortcode.is_empty() || !cur.eat(Shortcode::COLON) {
            return None;
        }
        Some(TokenKind::Emoji { shortcode })
    })
}

/// `delim inner delim` on a single line with non-empty `inner`.
fn emphasis<'a>(cur: &mut Cursor<'a>, delim: u8) -> Option<Inner<'a>> {
    attempt(cur, |cur| {
        if !cur.eat(delim) {
            return None;
        }
        let base = cur.pos();
        let text = cur.eat_while(|b| b != delim && b != NEWLINE);
        if text.is_empty() || !cur.eat(delim) {
            return None;
        }
        Some(Inner { text, base })
    })
}

fn try_bold<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    emphasis(cur, Emphasis::BOLD).map(TokenKind::Bold)
}

fn try_italic<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    emphasis(cur, Emphasis::ITALIC).map(TokenKind::Italic)
}

fn try_strike<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    emphasis(cur, Emphasis::STRIKE).map(TokenKind::Strike)
}

fn try_newline<'a>(cur: &mut Cursor<'a>) -> Option<TokenKind<'a>> {
    cur.eat(NEWLINE).then_some(TokenKind::Newline)
}

/// Fallback: text up to the next special byte, or a single character when
/// the cursor already sits on a delimiter that no rule accepted.
fn plain_text<'a>(cur: &mut Cursor<'a>) -> TokenKind<'a> {
    match cur.rest().bytes().position(is_special) {
        Some(0) => {
            cur.bump_char();
        }
        Some(n) => cur.bump_n(n),
        None => cur.bump_n(cur.rest().len()),
    }
    TokenKind::Text
}
