use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Distinct `http(s)://` URLs in `text`, in order of first occurrence.
///
/// A URL ends at whitespace or at any of `< > [ ] |`, so the target of a
/// `<url|text>` link is found without its display text. The text is not
/// tokenized first; URLs inside code are reported too.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    url_regex()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s<>\[\]|]+").expect("Invalid URL regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("se https://a.se och https://a.se igen", &["https://a.se"])]
    #[case("no links here", &[])]
    #[case("<https://x.se/sida|länk> och <http://y.se>", &["https://x.se/sida", "http://y.se"])]
    #[case("[https://a.se] https://b.se/?q=1", &["https://a.se", "https://b.se/?q=1"])]
    #[case("https://b.se https://a.se https://b.se", &["https://b.se", "https://a.se"])]
    #[case("ftp://a.se mailto:a@x.se", &[])]
    #[case("https://å.se/väg\nnästa", &["https://å.se/väg"])]
    fn extracts_distinct_urls(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(extract_urls(text), expected);
    }
}
