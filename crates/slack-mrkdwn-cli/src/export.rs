use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slack_mrkdwn_engine::{
    EmojiTable, LookupTables, Node, ParseOptions, SpecialLabels, is_system_message,
    parse_bot_message, parse_with_options,
};
use thiserror::Error;

/// Subtype Slack gives messages posted through integrations.
const BOT_SUBTYPE: &str = "bot_message";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to read export file at {export_path}: {source}")]
    ExportReadError {
        export_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse export file at {export_path}: {source}")]
    ExportParseError {
        export_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedMessage {
    /// Author's user ID; absent for most bot posts.
    pub user: Option<String>,
    pub subtype: Option<String>,
    pub text: String,
}

/// A channel export: the directory snapshots plus the raw messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Export {
    pub users: HashMap<String, String>,
    pub channels: HashMap<String, String>,
    pub messages: Vec<ExportedMessage>,
}

/// A message ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub author: String,
    /// Message text with any relay-bot prefix removed.
    pub source: String,
    pub nodes: Vec<Node>,
}

impl Export {
    pub fn load_from_path<P: AsRef<Path>>(export_path: P) -> Result<Self, ExportError> {
        let export_path = export_path.as_ref();
        let content = std::fs::read_to_string(export_path).map_err(|source| {
            ExportError::ExportReadError {
                export_path: export_path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| ExportError::ExportParseError {
            export_path: export_path.to_path_buf(),
            source,
        })
    }

    /// Parses every conversation message; join/leave notices and the like
    /// are left out.
    pub fn entries(
        &self,
        emoji: &EmojiTable,
        labels: &SpecialLabels,
        options: ParseOptions,
    ) -> Vec<Entry> {
        let tables = LookupTables::new(&self.users, &self.channels)
            .with_emoji(emoji)
            .with_labels(labels.clone());

        let entries: Vec<Entry> = self
            .messages
            .iter()
            .filter(|message| !is_system_message(message.subtype.as_deref(), &message.text))
            .map(|message| entry(message, &tables, options))
            .collect();

        log::debug!(
            "skipped {} system messages",
            self.messages.len() - entries.len()
        );
        entries
    }
}

fn entry(message: &ExportedMessage, tables: &LookupTables<'_>, options: ParseOptions) -> Entry {
    let relayed = message.user.is_none() || message.subtype.as_deref() == Some(BOT_SUBTYPE);
    let (relayed_author, source) = if relayed {
        let bot = parse_bot_message(&message.text);
        (bot.user_name, bot.text)
    } else {
        (None, message.text.clone())
    };

    let author = relayed_author
        .or_else(|| message.user.as_deref().map(|id| tables.user_name(id)))
        .unwrap_or_else(|| "unknown".to_string());

    Entry {
        author,
        nodes: parse_with_options(&source, tables, options),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const EXPORT: &str = r#"
[users]
U1 = "Anna"
U2 = "Bertil"

[channels]
C1 = "general"

[[messages]]
user = "U1"
text = "Hej <@U2>, se <#C1>!"

[[messages]]
user = "U2"
subtype = "channel_join"
text = "<@U2> has joined the channel"

[[messages]]
subtype = "bot_message"
text = "*Cecilia:* hälsningar från IRC"

[[messages]]
user = "U3"
text = "*viktigt*"
"#;

    fn write_export(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("export.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn entries(export: &Export) -> Vec<Entry> {
        export.entries(
            EmojiTable::builtin(),
            &SpecialLabels::default(),
            ParseOptions::default(),
        )
    }

    #[test]
    fn loads_export_file() {
        let dir = TempDir::new().unwrap();
        let export = Export::load_from_path(write_export(&dir, EXPORT)).unwrap();

        assert_eq!(export.users.get("U1").map(String::as_str), Some("Anna"));
        assert_eq!(export.messages.len(), 4);
        assert_eq!(export.messages[1].subtype.as_deref(), Some("channel_join"));
        assert_eq!(export.messages[2].user, None);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Export::load_from_path(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ExportError::ExportReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_export(&dir, "[[messages]]\nuser = \"U1\"\n");
        let err = Export::load_from_path(path).unwrap_err();
        assert!(matches!(err, ExportError::ExportParseError { .. }));
    }

    #[test]
    fn empty_file_is_an_empty_export() {
        let dir = TempDir::new().unwrap();
        let export = Export::load_from_path(write_export(&dir, "")).unwrap();
        assert_eq!(export, Export::default());
    }

    #[test]
    fn entries_skip_system_messages_and_resolve_authors() {
        let dir = TempDir::new().unwrap();
        let export = Export::load_from_path(write_export(&dir, EXPORT)).unwrap();
        let entries = entries(&export);

        let authors: Vec<&str> = entries.iter().map(|e| e.author.as_str()).collect();
        assert_eq!(authors, vec!["Anna", "Cecilia", "U3"]);

        assert_eq!(entries[1].source, "hälsningar från IRC");
        assert_eq!(
            entries[0].nodes[1],
            Node::UserMention {
                id: "U2".to_string(),
                name: "Bertil".to_string(),
            }
        );
        assert_eq!(
            entries[2].nodes,
            vec![Node::Bold(vec![Node::Text("viktigt".to_string())])]
        );
    }

    #[test]
    fn user_messages_keep_bold_prefix() {
        let export = Export {
            messages: vec![ExportedMessage {
                user: Some("U1".to_string()),
                subtype: None,
                text: "*Obs:* läs detta".to_string(),
            }],
            ..Export::default()
        };
        let entries = entries(&export);

        assert_eq!(entries[0].author, "U1");
        assert_eq!(entries[0].source, "*Obs:* läs detta");
    }

    #[test]
    fn anonymous_message_without_prefix() {
        let export = Export {
            messages: vec![ExportedMessage {
                text: "deploy klar".to_string(),
                ..ExportedMessage::default()
            }],
            ..Export::default()
        };
        assert_eq!(entries(&export)[0].author, "unknown");
    }
}
