//! Parser for the lightweight markup used in generated advice documents:
//! `###`-prefixed header lines and `**...**` emphasis spans. Everything else,
//! empty lines included, becomes a plain paragraph.

use serde::Serialize;

pub const HEADER_TOKEN: &str = "###";
pub const EMPHASIS_TOKEN: &str = "**";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Emphasis(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Paragraph { spans: Vec<Span> },
}

/// Splits the document on line breaks and parses each line independently.
/// One input line always yields exactly one block; empty lines are kept as
/// empty paragraphs rather than collapsed.
pub fn parse_advice(text: &str) -> Vec<Block> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix(HEADER_TOKEN) {
        return Block::Heading {
            text: rest.trim().to_string(),
        };
    }

    Block::Paragraph {
        spans: split_emphasis(line),
    }
}

/// Splits a line on `**...**` pairs into alternating plain and emphasised
/// spans, markers stripped, original order preserved. An unpaired trailing
/// `**` is left in the plain text.
fn split_emphasis(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;

    loop {
        let Some(start) = rest.find(EMPHASIS_TOKEN) else {
            break;
        };
        let Some(end_rel) = rest[start + EMPHASIS_TOKEN.len()..].find(EMPHASIS_TOKEN) else {
            break;
        };
        let inner_start = start + EMPHASIS_TOKEN.len();
        let inner_end = inner_start + end_rel;

        if start > 0 {
            spans.push(Span::Plain(rest[..start].to_string()));
        }
        spans.push(Span::Emphasis(rest[inner_start..inner_end].to_string()));
        rest = &rest[inner_end + EMPHASIS_TOKEN.len()..];
    }

    if !rest.is_empty() || spans.is_empty() {
        spans.push(Span::Plain(rest.to_string()));
    }

    spans
}
