//! Property-based tests for the papier scanner and document builder

use papier::papier::formats::{source_slices, to_papier, to_treeviz_str};
use papier::papier::lexing::{tokenize, Token};
use papier::{build, WordKind};
use proptest::prelude::*;

const UUID_PATTERN: &str = "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

fn single_word(source: &str) -> (WordKind, String) {
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 1, "expected one token for {:?}", source);
    match &tokens[0].0 {
        Token::Word(word) => (word.kind(), word.payload().to_string()),
        other => panic!("expected a word, got {:?}", other),
    }
}

fn is_uuid_shaped(text: &str) -> bool {
    let body = text.trim_end_matches(&['.', ',', ';', ':', '!', '?'][..]);
    let groups: Vec<_> = body.split('-').collect();
    groups.len() == 5
        && groups
            .iter()
            .zip([8, 4, 4, 4, 12])
            .all(|(g, n)| g.len() == n && g.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')))
}

/// Words in canonical form: never `*` or `}` on their own.
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        "[A-Z][a-z]{0,6}[.,;:!?]",
        "#[a-zA-Z0-9][-_a-z0-9]{0,5}",
        "@[a-z][-_a-z0-9]{0,5}",
        "!![a-zA-Z][-_a-zA-Z0-9]{0,6}",
        "!\\?[a-z/#.]{1,8}",
        UUID_PATTERN.prop_map(|u| format!("!{}", u)),
        "![a-z]{1,6}",
    ]
}

fn canonical_line() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..6).prop_map(|words| words.join(" ") + "\n")
}

fn canonical_sub_document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word_strategy(), 0..4),
        prop::collection::vec("[a-z #@*{!]{0,12}", 0..4),
        prop::option::of("[A-Z]{1,4}"),
    )
        .prop_map(|(title, contents, heredoc)| {
            let (open, close) = match heredoc {
                Some(name) => (format!("!{}{{", name), format!("}}{}!", name)),
                None => ("{".to_string(), "}".to_string()),
            };
            let mut text = String::from("* ");
            if !title.is_empty() {
                text.push_str(&title.join(" "));
                text.push(' ');
            }
            text.push_str(&open);
            text.push('\n');
            for line in contents {
                text.push_str(&line);
                text.push('\n');
            }
            text.push_str(&close);
            text.push('\n');
            text
        })
}

fn canonical_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::collection::vec(canonical_line(), 1..4).prop_map(|lines| lines.concat()),
            canonical_sub_document(),
        ],
        0..6,
    )
    .prop_map(|blocks| blocks.concat())
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t]{1,3}"
}

fn line_end() -> impl Strategy<Value = String> {
    prop_oneof![Just("\n".to_string()), Just("\r\n".to_string())]
}

/// Text words, including the bare `*` and `}` that only stay text thanks to blanks.
fn text_word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => word_strategy(),
        1 => Just("*".to_string()),
        1 => Just("}".to_string()),
    ]
}

fn is_opener_or_closer(line: &str) -> bool {
    let clean = line.trim_end_matches('\n').replace('\r', "");
    clean.starts_with("* ") || clean == "}"
}

/// Well-formed documents with irregular blanks and CRLF line endings.
fn irregular_document() -> impl Strategy<Value = String> {
    let text_line = (
        "[ \t]{0,2}",
        prop::collection::vec((text_word_strategy(), separator()), 0..5),
        line_end(),
    )
        .prop_map(|(lead, words, end)| {
            let body: String = words.into_iter().map(|(w, s)| w + &s).collect();
            lead + &body + &end
        })
        .prop_filter("text lines must not open or close", |line| {
            !is_opener_or_closer(line)
        });
    let sub_document = (
        prop::collection::vec((word_strategy(), separator()), 0..3),
        prop::collection::vec(("[a-z #\t]{0,10}", line_end()), 0..3),
        line_end(),
        line_end(),
    )
        .prop_map(|(title, contents, open_end, close_end)| {
            let title: String = title.into_iter().map(|(w, s)| w + &s).collect();
            let contents: String = contents.into_iter().map(|(c, e)| c + &e).collect();
            format!("* {}{{{}{}}}{}", title, open_end, contents, close_end)
        });

    prop::collection::vec(prop_oneof![text_line, sub_document], 0..8)
        .prop_map(|blocks| blocks.concat())
}

proptest! {
    #[test]
    fn prop_no_opener_means_no_sub_document(
        lines in prop::collection::vec("[a-z#@!?.*{} \t\r]{0,16}", 0..8)
    ) {
        let lines: Vec<String> = lines
            .into_iter()
            .filter(|line| {
                let clean = line.replace('\r', "");
                !clean.starts_with("* ") && clean != "}"
            })
            .collect();
        let source = lines.join("\n");

        let doc = build(&source).expect("prose without openers always parses");
        prop_assert_eq!(doc.iter_sub_documents().count(), 0);
    }

    #[test]
    fn prop_uuid_words(uuid in UUID_PATTERN) {
        prop_assert_eq!(single_word(&format!("!{}", uuid)), (WordKind::Uuid, uuid));
    }

    #[test]
    fn prop_bang_without_uuid_is_plain(text in "[^ \t\r\n!?]{1,16}") {
        prop_assume!(!is_uuid_shaped(&text));
        let source = format!("!{}", text);
        prop_assert_eq!(single_word(&source), (WordKind::Plain, source.clone()));
    }

    #[test]
    fn prop_alias_is_a_single_alias_token(alias in "[a-zA-Z][-_a-zA-Z0-9]{0,20}") {
        prop_assert_eq!(single_word(&format!("!!{}", alias)), (WordKind::Alias, alias));
    }

    #[test]
    fn prop_block_spans_reproduce_source(source in irregular_document()) {
        let doc = build(&source).expect("generated document is well formed");
        prop_assert_eq!(source_slices(&doc, &source), source);
    }

    #[test]
    fn prop_canonical_source_round_trips(source in canonical_document()) {
        let doc = build(&source).expect("generated document is well formed");
        prop_assert_eq!(to_papier(&doc), source);
    }

    #[test]
    fn prop_rendering_is_idempotent(source in irregular_document()) {
        let doc = build(&source).expect("generated document is well formed");
        let rendered = to_papier(&doc);
        let reparsed = build(&rendered).expect("canonical rendering parses");

        prop_assert_eq!(to_papier(&reparsed), rendered);
        prop_assert_eq!(to_treeviz_str(&reparsed), to_treeviz_str(&doc));
        prop_assert_eq!(reparsed.count_by_type(), doc.count_by_type());
    }
}
