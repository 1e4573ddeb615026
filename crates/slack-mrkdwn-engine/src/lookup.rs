use std::collections::HashMap;
use std::sync::OnceLock;

use crate::emoji::EmojiTable;

/// Display labels for `<!here>`, `<!channel>` and `<!everyone>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialLabels {
    /// Everyone currently active in the channel.
    pub here: String,
    /// Everyone in the channel.
    pub channel: String,
    /// Everyone in the workspace.
    pub everyone: String,
}

impl Default for SpecialLabels {
    fn default() -> Self {
        Self {
            here: "@here".to_string(),
            channel: "@channel".to_string(),
            everyone: "@everyone".to_string(),
        }
    }
}

impl SpecialLabels {
    /// Label for a special mention keyword; unknown keywords read `@keyword`.
    pub fn label_for(&self, keyword: &str) -> String {
        match keyword {
            "here" => self.here.clone(),
            "channel" => self.channel.clone(),
            "everyone" => self.everyone.clone(),
            other => format!("@{other}"),
        }
    }
}

/// Caller-supplied snapshots used to resolve mentions and emoji.
///
/// The tables are borrowed for the duration of a parse and never modified or
/// cached by the parser.
#[derive(Debug, Clone)]
pub struct LookupTables<'a> {
    /// User ID to display name.
    pub users: &'a HashMap<String, String>,
    /// Channel ID to channel name.
    pub channels: &'a HashMap<String, String>,
    pub emoji: &'a EmojiTable,
    pub labels: SpecialLabels,
}

impl<'a> LookupTables<'a> {
    /// Tables with the builtin emoji set and default labels.
    pub fn new(users: &'a HashMap<String, String>, channels: &'a HashMap<String, String>) -> Self {
        Self {
            users,
            channels,
            emoji: EmojiTable::builtin(),
            labels: SpecialLabels::default(),
        }
    }

    /// No users or channels; every mention falls back to its raw ID.
    pub fn empty() -> Self {
        static EMPTY: OnceLock<HashMap<String, String>> = OnceLock::new();
        let empty = EMPTY.get_or_init(HashMap::new);
        Self::new(empty, empty)
    }

    pub fn with_emoji(mut self, emoji: &'a EmojiTable) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn with_labels(mut self, labels: SpecialLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Display name for a user, or the raw ID when the directory has no
    /// (non-empty) name for it.
    pub fn user_name(&self, id: &str) -> String {
        non_empty(self.users.get(id)).unwrap_or_else(|| id.to_string())
    }

    /// An explicit `<#ID|name>` name wins over the directory; the raw ID is
    /// the last resort.
    pub fn channel_name(&self, id: &str, explicit: Option<&str>) -> String {
        explicit
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| non_empty(self.channels.get(id)))
            .unwrap_or_else(|| id.to_string())
    }

    pub fn special_label(&self, keyword: &str) -> String {
        self.labels.label_for(keyword)
    }

    /// Glyph for a shortcode; `None` leaves the shortcode to be shown verbatim.
    pub fn emoji_glyph(&self, shortcode: &str) -> Option<String> {
        self.emoji.get(shortcode).map(str::to_string)
    }
}

fn non_empty(name: Option<&String>) -> Option<String> {
    name.filter(|name| !name.is_empty()).cloned()
}
