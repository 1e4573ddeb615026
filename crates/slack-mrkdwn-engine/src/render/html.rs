use html_escape::{encode_double_quoted_attribute, encode_text};

use super::Renderer;
use crate::parsing::Node;

/// Renders to an HTML fragment. All user text is escaped; links open in a new
/// tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn wrap(&self, tag: &str, children: &[Node], out: &mut String) {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        self.render_nodes(children, out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render_node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text(text) => out.push_str(&encode_text(text)),
            Node::Bold(children) => self.wrap("strong", children, out),
            Node::Italic(children) => self.wrap("em", children, out),
            Node::Strike(children) => self.wrap("del", children, out),
            Node::Code(code) => {
                out.push_str("<code>");
                out.push_str(&encode_text(code));
                out.push_str("</code>");
            }
            Node::CodeBlock(code) => {
                out.push_str("<pre><code>");
                out.push_str(&encode_text(code));
                out.push_str("</code></pre>");
            }
            Node::Link { url, text } => out.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                encode_double_quoted_attribute(url),
                encode_text(text)
            )),
            Node::UserMention { id, name } => out.push_str(&format!(
                r#"<span class="mention mention-user" title="User ID: {}">@{}</span>"#,
                encode_double_quoted_attribute(id),
                encode_text(name)
            )),
            Node::ChannelMention { id, name } => out.push_str(&format!(
                r#"<span class="mention mention-channel" title="Channel ID: {}">#{}</span>"#,
                encode_double_quoted_attribute(id),
                encode_text(name)
            )),
            Node::SpecialMention { label, .. } => out.push_str(&format!(
                r#"<span class="mention mention-special">{}</span>"#,
                encode_text(label)
            )),
            Node::Emoji {
                shortcode,
                glyph: Some(glyph),
            } => out.push_str(&format!(
                r#"<span class="emoji" title=":{}:">{}</span>"#,
                encode_double_quoted_attribute(shortcode),
                encode_text(glyph)
            )),
            Node::Emoji {
                shortcode,
                glyph: None,
            } => out.push_str(&encode_text(&Node::emoji_text(shortcode, None))),
            Node::Newline => out.push_str("<br>"),
        }
    }
}
