//! Word classification
//!
//! Prefixed words are recognised through an ordered candidate table. Several prefixes
//! share the leading `!`, so the table is ordered by descending prefix length first and
//! by precedence second: `!!` and `!?` are tried before `!`. Precedence only orders
//! prefixes of equal length.
//!
//! A prefix form must cover the whole word. The payload is tried first as the rest of
//! the word, then without one trailing punctuation mark, which is then attached to the
//! word. A word no rule accepts is plain text covering the same characters.

use crate::papier::ast::{ByteRange, Word, WordKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Marks that may trail a prefixed word without belonging to its payload.
pub const PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

static UUID_PAYLOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid payload pattern")
});
static ALIAS_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][-_a-zA-Z0-9]*$").expect("alias payload pattern"));
static REF_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^ \t\n]+$").expect("ref payload pattern"));
// Tags are case-insensitive; spelled out in ASCII so (?i) Unicode folding can't admit
// characters like the Kelvin sign.
static TAG_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][-_a-zA-Z0-9]*$").expect("tag payload pattern"));
static FMT_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][-_a-z0-9]*$").expect("fmt payload pattern"));

/// One prefixed word form.
pub struct PrefixRule {
    pub kind: WordKind,
    pub prefix: &'static str,
    pub precedence: u8,
    payload: &'static Lazy<Regex>,
}

impl PrefixRule {
    pub fn accepts(&self, payload: &str) -> bool {
        self.payload.is_match(payload)
    }
}

/// Candidate prefixes in match order.
pub static PREFIX_RULES: [PrefixRule; 5] = [
    PrefixRule {
        kind: WordKind::Alias,
        prefix: "!!",
        precedence: 1,
        payload: &ALIAS_PAYLOAD,
    },
    PrefixRule {
        kind: WordKind::Ref,
        prefix: "!?",
        precedence: 1,
        payload: &REF_PAYLOAD,
    },
    PrefixRule {
        kind: WordKind::Uuid,
        prefix: "!",
        precedence: 2,
        payload: &UUID_PAYLOAD,
    },
    PrefixRule {
        kind: WordKind::Tag,
        prefix: "#",
        precedence: 1,
        payload: &TAG_PAYLOAD,
    },
    PrefixRule {
        kind: WordKind::Fmt,
        prefix: "@",
        precedence: 1,
        payload: &FMT_PAYLOAD,
    },
];

/// Classify one word. `text` has carriage returns removed; `span` covers the source.
pub fn classify(text: &str, span: ByteRange) -> Word {
    for rule in PREFIX_RULES.iter().filter(|rule| text.starts_with(rule.prefix)) {
        let rest = &text[rule.prefix.len()..];
        if rule.accepts(rest) {
            return Word::new(rule.kind, rest, None, span);
        }
        if let Some((body, mark)) = split_trailing_punctuation(rest) {
            if rule.accepts(body) {
                return Word::new(rule.kind, body, Some(mark), span);
            }
        }
        log::trace!(
            "prefix {:?} rejected payload {:?}, falling back",
            rule.prefix,
            rest
        );
    }
    Word::new(WordKind::Plain, text, None, span)
}

fn split_trailing_punctuation(text: &str) -> Option<(&str, char)> {
    let mark = text.chars().next_back()?;
    PUNCTUATION
        .contains(&mark)
        .then(|| (&text[..text.len() - mark.len_utf8()], mark))
}
