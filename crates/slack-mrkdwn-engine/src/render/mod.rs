//! # Rendering
//!
//! Adapters turning a parsed [`Node`] tree into one concrete output format.
//! The tree is never restructured: containers render their children in
//! order, wrapped in whatever the target uses for that style.
//!
//! - **`html`**: escaped HTML with anchors and mention spans
//! - **`plain`**: unstyled text for notification bodies and previews
//! - **`markdown`**: CommonMark, for surfaces that render Markdown

pub mod html;
pub mod markdown;
pub mod plain;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use plain::PlainTextRenderer;

use crate::parsing::Node;

/// Converts a node tree into an output representation.
///
/// Implementors only provide [`Renderer::render_node`]; container nodes
/// recurse into it for their children.
pub trait Renderer {
    type Output: Default;

    /// Appends the rendering of `node` to `out`.
    fn render_node(&self, node: &Node, out: &mut Self::Output);

    fn render_nodes(&self, nodes: &[Node], out: &mut Self::Output) {
        for node in nodes {
            self.render_node(node, out);
        }
    }

    fn render(&self, nodes: &[Node]) -> Self::Output {
        let mut out = Self::Output::default();
        self.render_nodes(nodes, &mut out);
        out
    }
}
