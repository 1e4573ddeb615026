use crate::lookup::LookupTables;

use super::{
    token::{Inner, Token, TokenKind},
    tokenizer::{tokenize_at, tokenize_leaves_at},
    types::Node,
};

/// Nesting depth at which emphasis stops being expanded.
pub const DEFAULT_MAX_DEPTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emphasis spans found at this depth or deeper are not parsed again:
    /// their delimiters stay as text and only leaf constructs inside them
    /// (mentions, links, emoji, code) are resolved. Top-level tokens are at
    /// depth 0.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Builds the node tree from the token stream, re-running the tokenizer on
/// the inner text of every emphasis span.
///
/// Inner text always excludes the span's own delimiters, so each recursive
/// call sees a strictly shorter string and recursion depth is bounded by
/// nesting depth. [`ParseOptions::max_depth`] caps it regardless.
pub struct Resolver<'t, 'a> {
    tables: &'t LookupTables<'a>,
    options: ParseOptions,
}

impl<'t, 'a> Resolver<'t, 'a> {
    pub fn new(tables: &'t LookupTables<'a>, options: ParseOptions) -> Self {
        Self { tables, options }
    }

    pub fn resolve(&self, text: &str) -> Vec<Node> {
        self.resolve_at(text, 0, 0)
    }

    fn resolve_at(&self, text: &str, base: usize, depth: usize) -> Vec<Node> {
        let mut out = vec![];

        for token in tokenize_at(text, base) {
            if token.is_container() && depth >= self.options.max_depth {
                log::debug!(
                    "nesting depth {depth} reached at {}..{}, flattening {:?}",
                    token.span.start,
                    token.span.end,
                    token.text
                );
                for leaf in tokenize_leaves_at(token.text, token.span.start) {
                    self.push_leaf(&mut out, leaf);
                }
                continue;
            }
            match token.kind {
                TokenKind::Bold(inner) => out.push(Node::Bold(self.children(inner, depth))),
                TokenKind::Italic(inner) => out.push(Node::Italic(self.children(inner, depth))),
                TokenKind::Strike(inner) => out.push(Node::Strike(self.children(inner, depth))),
                _ => self.push_leaf(&mut out, token),
            }
        }

        out
    }

    /// Resolves a token that has no inner content to parse. Emphasis handed
    /// here is kept as its source text.
    fn push_leaf(&self, out: &mut Vec<Node>, token: Token<'_>) {
        let node = match token.kind {
            TokenKind::Text | TokenKind::Bold(_) | TokenKind::Italic(_) | TokenKind::Strike(_) => {
                return push_text(out, token.text);
            }
            TokenKind::Code(content) => Node::Code(content.to_string()),
            TokenKind::CodeBlock(content) => Node::CodeBlock(content.to_string()),
            TokenKind::Link { url, display } => Node::Link {
                url: url.to_string(),
                text: display.to_string(),
            },
            TokenKind::UserMention { id } => Node::UserMention {
                id: id.to_string(),
                name: self.tables.user_name(id),
            },
            TokenKind::ChannelMention { id, name } => Node::ChannelMention {
                id: id.to_string(),
                name: self.tables.channel_name(id, name),
            },
            TokenKind::SpecialMention { keyword, .. } => Node::SpecialMention {
                keyword: keyword.to_string(),
                label: self.tables.special_label(keyword),
            },
            TokenKind::Emoji { shortcode } => Node::Emoji {
                shortcode: shortcode.to_string(),
                glyph: self.tables.emoji_glyph(shortcode),
            },
            TokenKind::Newline => Node::Newline,
        };
        out.push(node);
    }

    fn children(&self, inner: Inner<'_>, depth: usize) -> Vec<Node> {
        self.resolve_at(inner.text, inner.base, depth + 1)
    }
}

/// Appends to a trailing Text node instead of starting a new one, so a
/// degraded delimiter merges with its neighbours.
fn push_text(out: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(last)) = out.last_mut() {
        last.push_str(text);
    } else {
        out.push(Node::Text(text.to_string()));
    }
}
