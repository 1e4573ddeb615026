//! # Parsing
//!
//! Two stages turn message text into a [`Node`] tree:
//!
//! - **`tokenizer`**: flat, lossless token stream. At each position the first
//!   matching rule wins; raw zones (code) are tried before everything else so
//!   nothing inside them is parsed as markup.
//! - **`resolver`**: builds the tree. Emphasis tokens are tokenized again on
//!   their inner text; leaves are resolved against [`LookupTables`].
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges into the parsed text
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with absolute positions
//! - **`kinds`**: zero-sized types owning each construct's delimiters
//! - **`token`**: `Token` / `TokenKind`
//! - **`types`**: `Node`, the resolved tree element
//!
//! Parsing is total: every input, including the empty string, produces a
//! tree, and delimiters that don't form a construct stay in the output as
//! text.

pub mod cursor;
pub mod kinds;
pub mod resolver;
pub mod span;
pub mod token;
pub mod tokenizer;
pub mod types;

use crate::lookup::LookupTables;

pub use resolver::{DEFAULT_MAX_DEPTH, ParseOptions, Resolver};
pub use span::Span;
pub use token::{Inner, Token, TokenKind};
pub use tokenizer::tokenize;
pub use types::Node;

/// Parses `text` into top-level nodes with the default options.
pub fn parse(text: &str, tables: &LookupTables<'_>) -> Vec<Node> {
    parse_with_options(text, tables, ParseOptions::default())
}

pub fn parse_with_options(
    text: &str,
    tables: &LookupTables<'_>,
    options: ParseOptions,
) -> Vec<Node> {
    Resolver::new(tables, options).resolve(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_gives_empty_tree() {
        assert_eq!(parse("", &LookupTables::empty()), vec![]);
    }

    #[test]
    fn options_are_passed_through() {
        let tables = LookupTables::empty();
        let flat = parse_with_options("*a*", &tables, ParseOptions { max_depth: 0 });
        assert_eq!(flat, vec![Node::Text("*a*".to_string())]);
        assert_eq!(
            parse("*a*", &tables),
            vec![Node::Bold(vec![Node::Text("a".to_string())])]
        );
    }
}
