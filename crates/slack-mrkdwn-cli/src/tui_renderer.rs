use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use slack_mrkdwn_engine::{Node, Renderer};

/// Renders a message as styled terminal text. Emphasis becomes modifiers on
/// every span inside it; newlines and code block lines start new lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TuiRenderer;

fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn push_span(out: &mut Text<'static>, span: Span<'static>) {
    match out.lines.last_mut() {
        Some(line) => line.push_span(span),
        None => out.lines.push(Line::from(span)),
    }
}

fn new_line(out: &mut Text<'static>) {
    if out.lines.is_empty() {
        out.lines.push(Line::default());
    }
    out.lines.push(Line::default());
}

impl TuiRenderer {
    fn styled(&self, children: &[Node], modifier: Modifier, out: &mut Text<'static>) {
        let inner = self.render(children);
        for (i, mut line) in inner.lines.into_iter().enumerate() {
            for span in &mut line.spans {
                span.style = span.style.add_modifier(modifier);
            }
            if i > 0 {
                new_line(out);
            }
            for span in line.spans {
                push_span(out, span);
            }
        }
    }
}

impl Renderer for TuiRenderer {
    type Output = Text<'static>;

    fn render_node(&self, node: &Node, out: &mut Text<'static>) {
        match node {
            Node::Text(text) => push_span(out, Span::raw(text.clone())),
            Node::Bold(children) => self.styled(children, Modifier::BOLD, out),
            Node::Italic(children) => self.styled(children, Modifier::ITALIC, out),
            Node::Strike(children) => self.styled(children, Modifier::CROSSED_OUT, out),
            Node::Code(code) => push_span(out, Span::styled(code.clone(), code_style())),
            Node::CodeBlock(code) => {
                for (i, line) in code.trim_matches('\n').split('\n').enumerate() {
                    if i > 0 {
                        new_line(out);
                    }
                    push_span(out, Span::styled(line.to_string(), code_style()));
                }
            }
            Node::Link { text, .. } => push_span(
                out,
                Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ),
            Node::UserMention { name, .. } => push_span(
                out,
                Span::styled(format!("@{name}"), Style::default().fg(Color::Magenta)),
            ),
            Node::ChannelMention { name, .. } => push_span(
                out,
                Span::styled(format!("#{name}"), Style::default().fg(Color::Magenta)),
            ),
            Node::SpecialMention { label, .. } => push_span(
                out,
                Span::styled(
                    label.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ),
            Node::Emoji { shortcode, glyph } => push_span(
                out,
                Span::raw(Node::emoji_text(shortcode, glyph.as_deref()).into_owned()),
            ),
            Node::Newline => new_line(out),
        }
    }
}
