//! # Emoji
//!
//! Shortcode to glyph mapping. The builtin table is indexed once per process
//! and never mutated; workspaces with custom emoji build their own
//! [`EmojiTable`] on top of it with [`EmojiTable::with_custom`].

mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Case-insensitive shortcode lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiTable {
    glyphs: HashMap<String, String>,
}

impl EmojiTable {
    /// The builtin table, shared by every caller for the lifetime of the process.
    pub fn builtin() -> &'static EmojiTable {
        static BUILTIN: OnceLock<EmojiTable> = OnceLock::new();
        BUILTIN.get_or_init(|| table::BUILTIN.iter().copied().collect())
    }

    /// The builtin table plus `custom` entries. A custom entry with the same
    /// shortcode as a builtin one replaces it.
    pub fn with_custom<I, K, V>(custom: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::builtin().clone();
        table.extend(custom);
        table
    }

    /// Looks up a shortcode (without colons), ignoring ASCII case.
    pub fn get(&self, shortcode: &str) -> Option<&str> {
        self.glyphs
            .get(&shortcode.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Replaces every known `:shortcode:` in `text` with its glyph, leaving
    /// unknown ones verbatim. No other markup is interpreted.
    ///
    /// Glyphs never contain `:`, so running this on its own output changes
    /// nothing.
    pub fn substitute(&self, text: &str) -> String {
        shortcode_regex()
            .replace_all(text, |caps: &Captures<'_>| match self.get(&caps[1]) {
                Some(glyph) => glyph.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for EmojiTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (shortcode, glyph) in iter {
            self.glyphs
                .insert(shortcode.as_ref().to_ascii_lowercase(), glyph.into());
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for EmojiTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = EmojiTable::default();
        table.extend(iter);
        table
    }
}

/// Emoji-only substitution with the builtin table.
pub fn substitute_emoji(text: &str) -> String {
    EmojiTable::builtin().substitute(text)
}

fn shortcode_regex() -> &'static Regex {
    static SHORTCODE_REGEX: OnceLock<Regex> = OnceLock::new();
    SHORTCODE_REGEX
        .get_or_init(|| Regex::new(r":([A-Za-z0-9_+-]+):").expect("Invalid shortcode regex"))
}
