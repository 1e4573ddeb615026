use std::sync::OnceLock;

use regex::RegexSet;

/// Message subtypes that are channel notices rather than conversation.
pub const SYSTEM_SUBTYPES: &[&str] = &[
    "channel_join",
    "channel_leave",
    "channel_topic",
    "channel_purpose",
    "channel_name",
    "channel_archive",
    "channel_unarchive",
    "group_join",
    "group_leave",
    "group_topic",
    "group_purpose",
    "group_name",
    "group_archive",
    "group_unarchive",
    "bot_add",
    "bot_remove",
    "file_share",
    "file_comment",
    "file_mention",
    "pinned_item",
    "unpinned_item",
];

const SYSTEM_PATTERNS: &[&str] = &[
    r"^<@\w+> has joined the channel$",
    r"^<@\w+> has left the channel$",
    r"^<@\w+> set the channel topic",
    r"^<@\w+> set the channel purpose",
    r"^<@\w+> added an integration",
    r"^<@\w+> removed an integration",
    r"uploaded a file:",
    r"pinned a message",
    r"unpinned a message",
];

/// True for join/leave/topic/pin notices and similar, judged by subtype or,
/// for exports that lack one, by the text.
pub fn is_system_message(subtype: Option<&str>, text: &str) -> bool {
    if subtype.is_some_and(|subtype| SYSTEM_SUBTYPES.contains(&subtype)) {
        return true;
    }
    system_patterns().is_match(text)
}

fn system_patterns() -> &'static RegexSet {
    static SYSTEM_PATTERNS_SET: OnceLock<RegexSet> = OnceLock::new();
    SYSTEM_PATTERNS_SET
        .get_or_init(|| RegexSet::new(SYSTEM_PATTERNS).expect("Invalid system message regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("channel_join"), "")]
    #[case(Some("pinned_item"), "anything")]
    #[case(None, "<@U1> has joined the channel")]
    #[case(None, "<@U1> has left the channel")]
    #[case(None, "<@U1> set the channel topic: lunch")]
    #[case(Some("bot_message"), "<@U1> added an integration to this channel")]
    #[case(None, "Anna uploaded a file: report.pdf")]
    #[case(None, "<@U2> unpinned a message")]
    fn detects_system_messages(#[case] subtype: Option<&str>, #[case] text: &str) {
        assert!(is_system_message(subtype, text));
    }

    #[rstest]
    #[case(None, "hej allihop")]
    #[case(Some("bot_message"), "*Anna:* hej")]
    #[case(Some("thread_broadcast"), "svar")]
    #[case(None, "<@U1> has joined the channel and said hi")]
    #[case(None, "welcome <@U1> has joined the channel")]
    fn keeps_conversation(#[case] subtype: Option<&str>, #[case] text: &str) {
        assert!(!is_system_message(subtype, text));
    }
}
