//! # Message Format Utilities
//!
//! Helpers that work on raw message text without building a tree.
//!
//! - **`urls`**: link preview candidates
//! - **`bot`**: author prefix of relay-bot messages
//! - **`system`**: join/leave/topic notices and similar

pub mod bot;
pub mod system;
pub mod urls;

pub use bot::{BotMessage, parse_bot_message};
pub use system::{SYSTEM_SUBTYPES, is_system_message};
pub use urls::extract_urls;
