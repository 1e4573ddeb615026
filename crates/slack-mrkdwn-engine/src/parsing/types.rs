use std::borrow::Cow;

/// A resolved element of the document tree.
///
/// Leaves carry final display values (lookups already applied); the three
/// emphasis kinds are containers holding their parsed content in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, including any delimiters that did not form a construct.
    Text(String),
    Bold(Vec<Node>),
    Italic(Vec<Node>),
    Strike(Vec<Node>),
    /// Inline code content, never parsed further.
    Code(String),
    /// Code block content with its newlines.
    CodeBlock(String),
    /// `url` is `http(s)://…` or `mailto:…`; `text` is what the reader sees.
    Link { url: String, text: String },
    /// `name` is the directory display name, or the raw ID when unknown.
    UserMention { id: String, name: String },
    /// `name` is the explicit name from `<#ID|name>`, the directory name, or
    /// the raw ID.
    ChannelMention { id: String, name: String },
    /// `label` is the configured label for here/channel/everyone, otherwise
    /// `@keyword`.
    SpecialMention { keyword: String, label: String },
    /// `glyph` is `None` for shortcodes missing from the emoji table.
    Emoji {
        shortcode: String,
        glyph: Option<String>,
    },
    Newline,
}

impl Node {
    /// Children of a container node, `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Bold(children) | Node::Italic(children) | Node::Strike(children) => {
                Some(children)
            }
            _ => None,
        }
    }

    /// The text an emoji leaf displays: its glyph, or `:shortcode:` verbatim
    /// when the table has no entry.
    pub fn emoji_text<'n>(shortcode: &'n str, glyph: Option<&'n str>) -> Cow<'n, str> {
        match glyph {
            Some(glyph) => Cow::Borrowed(glyph),
            None => Cow::Owned(format!(":{shortcode}:")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containers_expose_children() {
        let bold = Node::Bold(vec![Node::Text("x".into())]);
        assert_eq!(bold.children(), Some(&[Node::Text("x".into())][..]));
        assert_eq!(Node::Newline.children(), None);
        assert_eq!(Node::Code("c".into()).children(), None);
    }

    #[test]
    fn unknown_emoji_displays_its_shortcode() {
        assert_eq!(Node::emoji_text("thumbsup", Some("👍")), "👍");
        assert_eq!(Node::emoji_text("Not_Real", None), ":Not_Real:");
    }
}
