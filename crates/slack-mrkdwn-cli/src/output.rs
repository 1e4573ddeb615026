use std::io::{self, Write};

use slack_mrkdwn_engine::{
    HtmlRenderer, MarkdownRenderer, Node, PlainTextRenderer, Renderer, extract_urls,
};

use crate::args::Format;
use crate::export::Entry;

/// Writes entries to `out` in one of the non-interactive formats, separated
/// by blank lines.
pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[Entry],
    format: Format,
    show_link_urls: bool,
) -> io::Result<()> {
    for entry in entries {
        let author = [Node::Text(entry.author.clone())];
        match format {
            Format::Plain | Format::Tui => {
                let body = PlainTextRenderer::new(show_link_urls).render(&entry.nodes);
                writeln!(out, "{}: {body}\n", entry.author)?;
            }
            Format::Html => writeln!(
                out,
                "<div class=\"message\"><span class=\"author\">{}</span> {}</div>\n",
                HtmlRenderer.render(&author),
                HtmlRenderer.render(&entry.nodes)
            )?,
            Format::Markdown => writeln!(
                out,
                "**{}**: {}\n",
                MarkdownRenderer.render(&author),
                MarkdownRenderer.render(&entry.nodes)
            )?,
            Format::Urls => {
                for url in extract_urls(&entry.source) {
                    writeln!(out, "{}: {url}", entry.author)?;
                }
            }
        }
    }
    Ok(())
}
