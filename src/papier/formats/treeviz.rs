//! Treeviz formatter for papier documents

use crate::papier::ast::{Block, Document, Line, SubDocument, Word};

/// Label width used when no configuration says otherwise.
pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_width(doc, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with_width(doc: &Document, label_width: usize) -> String {
    let mut result = String::new();
    let blocks = doc.blocks();
    for (i, block) in blocks.iter().enumerate() {
        let is_last = i == blocks.len() - 1;
        append_block(&mut result, block, "", is_last, label_width);
    }
    result
}

fn push_node(result: &mut String, prefix: &str, is_last: bool, label: &str) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, label));
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_block(result: &mut String, block: &Block, prefix: &str, is_last: bool, width: usize) {
    match block {
        Block::Text(text) => {
            let count = text.lines().len();
            let label = format!(
                "{}: {} line{}",
                block.node_type(),
                count,
                if count == 1 { "" } else { "s" }
            );
            let new_prefix = push_node(result, prefix, is_last, &label);
            for (i, line) in text.lines().iter().enumerate() {
                append_line(result, line, &new_prefix, i == count - 1, width);
            }
        }
        Block::SubDocument(sub) => {
            let title = sub
                .title_text()
                .unwrap_or_else(|| "(untitled)".to_string());
            let label = format!("{}: {}", block.node_type(), truncate(&title, width));
            let new_prefix = push_node(result, prefix, is_last, &label);
            append_sub_document(result, sub, &new_prefix, width);
        }
    }
}

fn append_line(result: &mut String, line: &Line, prefix: &str, is_last: bool, width: usize) {
    if line.is_blank() {
        push_node(result, prefix, is_last, "Line: (blank)");
        return;
    }
    let text = line
        .words()
        .iter()
        .map(Word::literal)
        .collect::<Vec<_>>()
        .join(" ");
    let new_prefix = push_node(
        result,
        prefix,
        is_last,
        &format!("Line: {}", truncate(&text, width)),
    );
    let words = line.words();
    for (i, word) in words.iter().enumerate() {
        push_node(result, &new_prefix, i == words.len() - 1, &word_label(word, width));
    }
}

fn append_sub_document(result: &mut String, sub: &SubDocument, prefix: &str, width: usize) {
    let contents = sub.contents();
    if contents.is_empty() {
        push_node(result, prefix, true, "(empty)");
    }
    for (i, content) in contents.iter().enumerate() {
        let label = format!("Content: {}", truncate(content, width));
        push_node(result, prefix, i == contents.len() - 1, &label);
    }
}

fn word_label(word: &Word, width: usize) -> String {
    let payload = truncate(word.payload(), width);
    match word.punctuation() {
        Some(mark) => format!("{}: {} +{}", word.kind(), payload, mark),
        None => format!("{}: {}", word.kind(), payload),
    }
}
