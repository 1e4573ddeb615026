use super::Renderer;
use crate::parsing::Node;

/// Flattens a tree to unstyled text, keeping resolved mention and emoji
/// values. Meant for notification bodies and list previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer {
    /// Append `(url)` after links whose display text differs from the URL.
    pub show_link_urls: bool,
}

impl PlainTextRenderer {
    pub fn new(show_link_urls: bool) -> Self {
        Self { show_link_urls }
    }
}

impl Renderer for PlainTextRenderer {
    type Output = String;

    fn render_node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text(text) | Node::Code(text) | Node::CodeBlock(text) => out.push_str(text),
            Node::Bold(children) | Node::Italic(children) | Node::Strike(children) => {
                self.render_nodes(children, out)
            }
            Node::Link { url, text } => {
                out.push_str(text);
                if self.show_link_urls && url != text {
                    out.push_str(" (");
                    out.push_str(url);
                    out.push(')');
                }
            }
            Node::UserMention { name, .. } => {
                out.push('@');
                out.push_str(name);
            }
            Node::ChannelMention { name, .. } => {
                out.push('#');
                out.push_str(name);
            }
            Node::SpecialMention { label, .. } => out.push_str(label),
            Node::Emoji { shortcode, glyph } => {
                out.push_str(&Node::emoji_text(shortcode, glyph.as_deref()))
            }
            Node::Newline => out.push('\n'),
        }
    }
}
