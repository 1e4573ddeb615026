use std::collections::HashMap;

use pretty_assertions::assert_eq;
use slack_mrkdwn_engine::parsing::tokenize;
use slack_mrkdwn_engine::{
    EmojiTable, LookupTables, Node, ParseOptions, PlainTextRenderer, Renderer, extract_urls,
    parse, parse_with_options, substitute_emoji,
};

fn text(s: &str) -> Node {
    Node::Text(s.to_string())
}

fn users(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Re-emits emphasis markup around children so a tree built only from
/// emphasis, text and newlines can be compared with its source.
struct SourceRenderer;

impl Renderer for SourceRenderer {
    type Output = String;

    fn render_node(&self, node: &Node, out: &mut String) {
        let delim = match node {
            Node::Bold(_) => '*',
            Node::Italic(_) => '_',
            Node::Strike(_) => '~',
            Node::Text(t) => return out.push_str(t),
            Node::Newline => return out.push('\n'),
            other => panic!("unexpected node {other:?}"),
        };
        out.push(delim);
        self.render_nodes(node.children().unwrap_or_default(), out);
        out.push(delim);
    }
}

fn container_depth(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .filter_map(Node::children)
        .map(|children| 1 + container_depth(children))
        .max()
        .unwrap_or(0)
}

/// Deterministic xorshift so failures reproduce.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn string(&mut self, alphabet: &[&str], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[(self.next() % alphabet.len() as u64) as usize])
            .collect()
    }
}

#[test]
fn nesting() {
    let nodes = parse("*bold _and italic_ text*", &LookupTables::empty());
    assert_eq!(
        nodes,
        vec![Node::Bold(vec![
            text("bold "),
            Node::Italic(vec![text("and italic")]),
            text(" text"),
        ])]
    );
}

#[test]
fn unterminated_delimiter_stays_text() {
    let tables = LookupTables::empty();
    assert_eq!(parse("*no close", &tables), vec![text("*no close")]);
    assert_eq!(parse("_a\nb_", &tables), vec![text("_a"), Node::Newline, text("b_")]);
}

#[test]
fn plain_text_round_trip() {
    let input = "Hej allihop! Möte kl. 14.00 i rum 3 (B-huset), ta med kaffe & kaka > 2 st.";
    assert_eq!(parse(input, &LookupTables::empty()), vec![text(input)]);
}

/// Nothing here can start a construct.
const PLAIN_ONLY: &[&str] = &[
    "a", "Z", "0", " ", "  ", ">", "|", "@", "#", "!", "&", "-", "+", ".", "(", ")", "/", "=",
    "ä", "ö", "🎉", "👍🏽", "日本", "https//x.se",
];

#[test]
fn random_plain_text_is_one_text_leaf() {
    let mut rng = XorShift(0xD1B5_4A32_D192_ED03);
    let tables = LookupTables::empty();
    for round in 0..500 {
        let input = rng.string(PLAIN_ONLY, (round % 50) + 1);
        assert_eq!(parse(&input, &tables), vec![text(&input)], "input {input:?}");
    }
}

#[test]
fn mention_fallback_uses_raw_id() {
    let nodes = parse("<@U999>", &LookupTables::empty());
    assert_eq!(
        nodes,
        vec![Node::UserMention {
            id: "U999".to_string(),
            name: "U999".to_string(),
        }]
    );
}

#[test]
fn unknown_emoji_renders_literally() {
    let nodes = parse(":not_a_real_emoji:", &LookupTables::empty());
    assert_eq!(
        nodes,
        vec![Node::Emoji {
            shortcode: "not_a_real_emoji".to_string(),
            glyph: None,
        }]
    );
    assert_eq!(PlainTextRenderer::default().render(&nodes), ":not_a_real_emoji:");
}

#[test]
fn link_forms() {
    let tables = LookupTables::empty();
    assert_eq!(
        parse("<https://x.se|länk>", &tables),
        vec![Node::Link {
            url: "https://x.se".to_string(),
            text: "länk".to_string(),
        }]
    );
    assert_eq!(
        parse("<https://x.se>", &tables),
        vec![Node::Link {
            url: "https://x.se".to_string(),
            text: "https://x.se".to_string(),
        }]
    );
}

#[test]
fn end_to_end_message() {
    let users = users(&[("U1", "Anna")]);
    let channels = HashMap::new();
    let emoji: EmojiTable = [("thumbsup", "👍")].into_iter().collect();
    let tables = LookupTables::new(&users, &channels).with_emoji(&emoji);

    let nodes = parse(
        "<@U1> sa *bra jobbat* :thumbsup: se <https://x.se|länk>",
        &tables,
    );

    assert_eq!(
        nodes,
        vec![
            Node::UserMention {
                id: "U1".to_string(),
                name: "Anna".to_string(),
            },
            text(" sa "),
            Node::Bold(vec![text("bra jobbat")]),
            text(" "),
            Node::Emoji {
                shortcode: "thumbsup".to_string(),
                glyph: Some("👍".to_string()),
            },
            text(" se "),
            Node::Link {
                url: "https://x.se".to_string(),
                text: "länk".to_string(),
            },
        ]
    );
}

#[test]
fn url_dedup() {
    assert_eq!(
        extract_urls("se https://a.se och https://a.se igen"),
        vec!["https://a.se".to_string()]
    );
}

#[test]
fn emoji_substitution_is_idempotent() {
    let once = substitute_emoji("klart :white_check_mark: :tada: :okänd:");
    assert_eq!(once, "klart ✅ 🎉 :okänd:");
    assert_eq!(substitute_emoji(&once), once);
}

#[test]
fn shortcode_wins_over_emphasis_only_when_complete() {
    let tables = LookupTables::empty();
    assert_eq!(
        parse("*:star: bra*", &tables),
        vec![Node::Bold(vec![
            Node::Emoji {
                shortcode: "star".to_string(),
                glyph: Some("⭐".to_string()),
            },
            text(" bra"),
        ])]
    );
    assert_eq!(
        parse("_a:b_", &tables),
        vec![Node::Italic(vec![text("a:b")])]
    );
}

#[test]
fn parses_are_independent_across_threads() {
    let users = users(&[("U1", "Anna")]);
    let channels = HashMap::new();
    let tables = &LookupTables::new(&users, &channels);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| scope.spawn(move || parse(&format!("<@U1> *{i}*"), tables)))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let nodes = handle.join().unwrap();
            assert_eq!(nodes[2], Node::Bold(vec![text(&i.to_string())]));
        }
    });
}

const ALL_DELIMITERS: &[&str] = &[
    "*", "_", "~", "`", "```", "<", ">", "|", ":", "\n", "@", "#", "!", "http://", "mailto:",
    "a", " ", "ä", "🎉",
];

const EMPHASIS_ONLY: &[&str] = &["*", "_", "~", "\n", "a", " ", "ä"];

#[test]
fn random_input_tokenizes_losslessly() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    for round in 0..500 {
        let input = rng.string(ALL_DELIMITERS, (round % 60) + 1);
        let tokens = tokenize(&input);

        let mut pos = 0;
        for token in &tokens {
            assert_eq!(token.span.start, pos, "gap before {token:?} in {input:?}");
            assert!(!token.span.is_empty(), "empty token in {input:?}");
            assert_eq!(&input[token.span.start..token.span.end], token.text);
            pos = token.span.end;
        }
        assert_eq!(pos, input.len());

        let nodes = parse(&input, &LookupTables::empty());
        assert!(!nodes.is_empty());
    }
}

#[test]
fn random_emphasis_keeps_every_character() {
    let mut rng = XorShift(0x2545_F491_4F6C_DD1D);
    for round in 0..500 {
        let input = rng.string(EMPHASIS_ONLY, (round % 40) + 1);
        let max_depth = round % 4;
        let nodes = parse_with_options(&input, &LookupTables::empty(), ParseOptions { max_depth });

        assert_eq!(SourceRenderer.render(&nodes), input);
        assert!(container_depth(&nodes) <= max_depth, "too deep for {input:?}");
    }
}

#[test]
fn adversarial_runs_complete() {
    let tables = LookupTables::empty();
    for unit in ["*", "_~", ":", "<", "<http://", "```", "*_~`:<"] {
        let input = unit.repeat(20_000);
        let rendered = PlainTextRenderer::default().render(&parse(&input, &tables));
        assert!(!rendered.is_empty());
    }
}
