//! The postprocess module augments a generated, numbered product list with Alibaba
//! search links derived from each item's keyword phrases.

use once_cell::sync::Lazy;
use regex::Regex;
use url::form_urlencoded::byte_serialize;

use crate::constants::{
    ALIBABA_FALLBACK_LABEL, ALIBABA_FALLBACK_QUERY, ALIBABA_LINKS_LABEL, ALIBABA_SEARCH_URL,
    KEYWORD_CANDIDATE_MAX_CHARS, MAX_LINKS_PER_ITEM,
};

static ITEM_HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d[).]").expect("Failed to compile ITEM_HEADER regex"));

/// Classification of a single trimmed line of generated text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineKind {
    /// A digit directly followed by `)` or `.`, e.g. `3) Moon Lamp`.
    ItemHeader,
    /// Contains "keyword" in any letter case.
    Keywords,
    Plain,
}

/// Classifies a trimmed line. Item headers win over keyword lines.
pub fn classify_line(line: &str) -> LineKind {
    if ITEM_HEADER_REGEX.is_match(line) {
        LineKind::ItemHeader
    } else if line.to_lowercase().contains("keyword") {
        LineKind::Keywords
    } else {
        LineKind::Plain
    }
}

/// Builds an Alibaba search URL for `query`, form-urlencoded.
pub fn search_link(query: &str) -> String {
    let encoded: String = byte_serialize(query.as_bytes()).collect();
    format!("{ALIBABA_SEARCH_URL}?SearchText={encoded}")
}

/// Splits a phrase list on commas and semicolons, dropping empty entries.
fn split_phrases(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split([',', ';'])
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_owned)
}

/// Short comma-separated lines under an open item are treated as keyword lists too.
fn is_keyword_candidate(line: &str) -> bool {
    line.chars().count() <= KEYWORD_CANDIDATE_MAX_CHARS
        && line.chars().any(char::is_alphabetic)
        && line.contains(',')
}

/// Accumulates output lines and the keywords of the item currently open.
#[derive(Default)]
struct LinkWriter {
    lines: Vec<String>,
    item_open: bool,
    keywords: Vec<String>,
    emitted_links: bool,
}

impl LinkWriter {
    fn push(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }

    /// Closes the open item, emitting its link block. Keywords collected while no
    /// item is open are kept for the next one.
    fn flush(&mut self) {
        if !self.item_open {
            return;
        }
        if !self.keywords.is_empty() {
            self.lines.push(ALIBABA_LINKS_LABEL.to_owned());
            for keyword in self.keywords.iter().take(MAX_LINKS_PER_ITEM) {
                self.lines.push(format!("- {}", search_link(keyword)));
            }
            self.emitted_links = true;
        }
        self.lines.push(String::new());
        self.item_open = false;
        self.keywords.clear();
    }

    fn finish(mut self) -> String {
        self.flush();
        let mut text = self.lines.join("\n").trim().to_owned();
        if !self.emitted_links {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str(&format!(
                "{ALIBABA_FALLBACK_LABEL}\n- {}",
                search_link(ALIBABA_FALLBACK_QUERY)
            ));
        }
        text
    }
}

/// Appends up to three search links after every numbered item that names keywords.
///
/// Blank lines are dropped and the remaining lines trimmed. When no item produced a
/// link block, one generic fallback block is appended, so the output always carries
/// at least one link block.
///
/// # Arguments
///
/// * `text` - Generated product list, one entry per numbered item
///
/// # Returns
///
/// The rewritten text with link blocks inserted.
pub fn append_search_links(text: &str) -> String {
    let mut writer = LinkWriter::default();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match classify_line(line) {
            LineKind::ItemHeader => {
                writer.flush();
                writer.item_open = true;
            }
            LineKind::Keywords => {
                let list = line.split_once(':').map_or(line, |(_, rest)| rest);
                writer.keywords.extend(split_phrases(list));
            }
            LineKind::Plain => {
                if writer.item_open
                    && writer.keywords.len() < MAX_LINKS_PER_ITEM
                    && is_keyword_candidate(line)
                {
                    writer.keywords.extend(split_phrases(line));
                }
            }
        }
        writer.push(line);
    }

    writer.finish()
}
