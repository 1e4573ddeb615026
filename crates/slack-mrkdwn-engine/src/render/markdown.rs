use super::Renderer;
use crate::parsing::Node;

/// Renders to CommonMark with the strikethrough extension.
///
/// Literal text is escaped so characters that were plain in the message stay
/// plain in Markdown: emphasis and link brackets, raw HTML and entities, and
/// markers that would open a heading, quote or list at the start of a line.
/// Code blocks are fenced on lines of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

const ESCAPED: &[char] = &['\\', '*', '_', '`', '~', '[', ']', '<', '>', '&'];

/// Only meaningful as the first character of a line.
const LINE_START: &[char] = &['#', '-', '+', '='];

fn push_escaped(out: &mut String, text: &str) {
    let mut rest = text;
    if out.is_empty() || out.ends_with('\n') {
        let indent = rest.len() - rest.trim_start_matches(' ').len();
        out.push_str(&rest[..indent]);
        rest = &rest[indent..];

        // `1.` and `1)` open ordered lists when followed by a space
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let after = &rest[digits..];
        if digits > 0
            && after.starts_with(['.', ')'])
            && after[1..].chars().next().is_none_or(|c| c == ' ' || c == '\t')
        {
            out.push_str(&rest[..digits]);
            out.push('\\');
            rest = &rest[digits..];
        } else if rest.starts_with(LINE_START) {
            out.push('\\');
        }
    }

    for c in rest.chars() {
        if ESCAPED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Link destinations with spaces or parentheses need the `<…>` form.
fn push_destination(out: &mut String, url: &str) {
    if url.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
        out.push('<');
        out.push_str(url);
        out.push('>');
    } else {
        out.push_str(url);
    }
}

impl MarkdownRenderer {
    fn wrap(&self, marker: &str, children: &[Node], out: &mut String) {
        out.push_str(marker);
        self.render_nodes(children, out);
        out.push_str(marker);
    }
}

impl Renderer for MarkdownRenderer {
    type Output = String;

    fn render_node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text(text) => push_escaped(out, text),
            Node::Bold(children) => self.wrap("**", children, out),
            Node::Italic(children) => self.wrap("*", children, out),
            Node::Strike(children) => self.wrap("~~", children, out),
            Node::Code(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
            Node::CodeBlock(code) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n");
                let code = code.trim_matches('\n');
                if !code.is_empty() {
                    out.push_str(code);
                    out.push('\n');
                }
                out.push_str("```\n");
            }
            Node::Link { url, text } => {
                out.push('[');
                push_escaped(out, text);
                out.push_str("](");
                push_destination(out, url);
                out.push(')');
            }
            Node::UserMention { name, .. } => {
                out.push('@');
                push_escaped(out, name);
            }
            Node::ChannelMention { name, .. } => {
                out.push('#');
                push_escaped(out, name);
            }
            Node::SpecialMention { label, .. } => push_escaped(out, label),
            Node::Emoji { shortcode, glyph } => {
                out.push_str(&Node::emoji_text(shortcode, glyph.as_deref()))
            }
            Node::Newline => out.push('\n'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupTables;
    use crate::parsing::parse;
    use insta::assert_snapshot;
    use std::collections::HashMap;

    fn markdown(text: &str) -> String {
        let users = HashMap::from([("U1".to_string(), "anna_b".to_string())]);
        let channels = HashMap::from([("C1".to_string(), "general".to_string())]);
        let tables = LookupTables::new(&users, &channels);
        MarkdownRenderer.render(&parse(text, &tables))
    }

    #[test]
    fn emphasis_maps_to_markdown_markers() {
        assert_snapshot!(
            markdown("*bold _and italic_ text* ~gone~"),
            @"**bold *and italic* text** ~~gone~~"
        );
    }

    #[test]
    fn literal_delimiters_are_escaped() {
        assert_snapshot!(markdown("2 * 3 [x] no_close"), @r"2 \* 3 \[x\] no\_close");
    }

    #[test]
    fn raw_html_is_escaped() {
        assert_snapshot!(
            markdown("<img src=x onerror=alert(1)>"),
            @r"\<img src=x onerror=alert(1)\>"
        );
    }

    #[test]
    fn entities_stay_literal() {
        assert_snapshot!(markdown("a &amp; b"), @r"a \&amp; b");
    }

    #[test]
    fn heading_marker_is_escaped() {
        assert_snapshot!(markdown("# not a heading"), @r"\# not a heading");
    }

    #[test]
    fn quote_marker_is_escaped() {
        assert_snapshot!(markdown("> not a quote"), @r"\> not a quote");
    }

    #[test]
    fn list_markers_are_escaped_at_line_start() {
        assert_snapshot!(markdown("- dash"), @r"\- dash");
        assert_snapshot!(markdown("+ plus"), @r"\+ plus");
        assert_snapshot!(markdown("12. tolv"), @r"12\. tolv");
        assert_snapshot!(markdown("3) tre"), @r"3\) tre");
    }

    #[test]
    fn block_markers_after_newline_are_escaped() {
        assert_eq!(
            markdown("rubrik\n===\n  # ja\n1.5 liter - 2 + 3 # 4"),
            "rubrik\n\\===\n  \\# ja\n1.5 liter - 2 + 3 # 4"
        );
    }

    #[test]
    fn links_and_mentions() {
        assert_snapshot!(
            markdown("<@U1> in <#C1>: <https://x.se|länk> <mailto:a@x.se>"),
            @r"@anna\_b in #general: [länk](https://x.se) [a@x.se](mailto:a@x.se)"
        );
    }

    #[test]
    fn destination_with_parentheses_uses_angle_form() {
        assert_snapshot!(
            markdown("<https://en.wikipedia.org/wiki/Rust_(language)|Rust>"),
            @"[Rust](<https://en.wikipedia.org/wiki/Rust_(language)>)"
        );
    }

    #[test]
    fn code_is_not_escaped() {
        assert_snapshot!(markdown("run `a_b *c*` :tada:"), @"run `a_b *c*` 🎉");
    }

    #[test]
    fn code_block_gets_its_own_lines() {
        let out = markdown("see ```\nfn main() {}\n``` done");
        assert_eq!(out, "see \n```\nfn main() {}\n```\n done");
    }
}
