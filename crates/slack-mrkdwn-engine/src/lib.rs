//! # slack-mrkdwn-engine
//!
//! Parses Slack mrkdwn message text into a renderer-independent tree and
//! renders it to HTML, plain text or Markdown.
//!
//! Parsing is a pure function of the text and the caller's [`LookupTables`]:
//! no I/O, no shared mutable state, and no error path. Malformed markup
//! degrades to literal text.
//!
//! ```
//! use std::collections::HashMap;
//! use slack_mrkdwn_engine::{LookupTables, PlainTextRenderer, Renderer, parse};
//!
//! let users = HashMap::from([("U1".to_string(), "Anna".to_string())]);
//! let channels = HashMap::new();
//! let tables = LookupTables::new(&users, &channels);
//!
//! let nodes = parse("<@U1> sa *bra jobbat* :thumbsup:", &tables);
//! assert_eq!(PlainTextRenderer::default().render(&nodes), "@Anna sa bra jobbat 👍");
//! ```

pub mod emoji;
pub mod format;
pub mod lookup;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use emoji::{EmojiTable, substitute_emoji};
pub use format::{BotMessage, extract_urls, is_system_message, parse_bot_message};
pub use lookup::{LookupTables, SpecialLabels};
pub use parsing::{DEFAULT_MAX_DEPTH, Node, ParseOptions, parse, parse_with_options};
pub use render::{HtmlRenderer, MarkdownRenderer, PlainTextRenderer, Renderer};
