use std::sync::OnceLock;

use regex::Regex;

/// A message split into the author named by a relay bot and the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMessage {
    /// `None` when the text has no `*Name:*` prefix.
    pub user_name: Option<String>,
    pub text: String,
}

/// Splits messages relayed by bots in the form `*Name:* body`.
///
/// Name and body are trimmed. Text without the prefix is returned unchanged.
pub fn parse_bot_message(text: &str) -> BotMessage {
    match bot_prefix_regex().captures(text) {
        Some(caps) => BotMessage {
            user_name: Some(caps[1].trim().to_string()),
            text: caps[2].trim().to_string(),
        },
        None => BotMessage {
            user_name: None,
            text: text.to_string(),
        },
    }
}

fn bot_prefix_regex() -> &'static Regex {
    static BOT_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
    BOT_PREFIX_REGEX.get_or_init(|| {
        Regex::new(r"^\*([^:*]+):\*\s*((?s).*)$").expect("Invalid bot prefix regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("*Anna:* hej allihop", Some("Anna"), "hej allihop")]
    #[case("* Anna Berg :*   två\nrader  ", Some("Anna Berg"), "två\nrader")]
    #[case("*Anna:*", Some("Anna"), "")]
    #[case("*bold* text", None, "*bold* text")]
    #[case("hej *Anna:* nej", None, "hej *Anna:* nej")]
    #[case("*a:b:* x", None, "*a:b:* x")]
    fn splits_author_prefix(
        #[case] input: &str,
        #[case] user_name: Option<&str>,
        #[case] text: &str,
    ) {
        assert_eq!(
            parse_bot_message(input),
            BotMessage {
                user_name: user_name.map(str::to_string),
                text: text.to_string(),
            }
        );
    }
}
