//! Line-preserving model of a Markdown frontmatter header.
//!
//! The header is kept as an ordered list of entries, each owning the raw
//! lines it was parsed from, so that rendering an unmodified header gives
//! back the input byte for byte.

use std::fmt;

/// Line that opens and closes the header block.
pub const SENTINEL: &str = "---";

const BOM: char = '\u{feff}';

/// Why a document's header could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The first line is not the sentinel.
    MissingOpening,
    /// The sentinel never appears a second time.
    Unterminated,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingOpening => write!(f, "no YAML frontmatter"),
            MalformedReason::Unterminated => write!(f, "unterminated YAML frontmatter"),
        }
    }
}

/// A top-level key line plus its continuation lines (indented values,
/// comments, blank lines). Keyless entries hold lines that precede the first
/// key, or that were split off an anchor by an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: Option<String>,
    lines: Vec<String>,
}

impl Entry {
    /// Detach the blank and comment lines that trail the entry's value.
    fn split_off_trailing(&mut self) -> Option<Entry> {
        let keep = self
            .lines
            .iter()
            .rposition(|line| !is_filler(line))
            .map_or(0, |i| i + 1);
        if keep == self.lines.len() {
            return None;
        }
        Some(Entry {
            key: None,
            lines: self.lines.split_off(keep),
        })
    }
}

/// Parsed header of a document, with the rest of the document held verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    opening: String,
    entries: Vec<Entry>,
    /// Closing sentinel line and everything after it.
    remainder: String,
}

impl Frontmatter {
    /// Split `content` into opening sentinel, header entries and remainder.
    pub fn parse(content: &str) -> Result<Self, MalformedReason> {
        let mut lines = content.split_inclusive('\n');
        let opening = lines.next().ok_or(MalformedReason::MissingOpening)?;
        if !is_sentinel(opening.strip_prefix(BOM).unwrap_or(opening)) {
            return Err(MalformedReason::MissingOpening);
        }

        let mut offset = opening.len();
        let mut entries: Vec<Entry> = Vec::new();
        for line in lines {
            if is_sentinel(line) {
                return Ok(Self {
                    opening: opening.to_string(),
                    entries,
                    remainder: content[offset..].to_string(),
                });
            }

            if let Some(key) = key_of(line) {
                entries.push(Entry {
                    key: Some(key.to_string()),
                    lines: vec![line.to_string()],
                });
            } else if let Some(entry) = entries.last_mut() {
                entry.lines.push(line.to_string());
            } else {
                entries.push(Entry {
                    key: None,
                    lines: vec![line.to_string()],
                });
            }
            offset += line.len();
        }

        Err(MalformedReason::Unterminated)
    }

    /// Whether a top-level key with this exact name exists in the header.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Top-level keys in header order.
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| e.key.as_deref())
    }

    /// Line terminator used by the document, taken from the opening sentinel.
    pub fn line_ending(&self) -> &'static str {
        if self.opening.ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Insert `key: value` right after the first entry named `anchor`: after
    /// its key line and any value lines, ahead of blank or comment lines.
    ///
    /// Returns `false` (and leaves the header untouched) when no such entry
    /// exists.
    pub fn insert_after(&mut self, anchor: &str, key: &str, value: &str) -> bool {
        let Some(idx) = self.position(anchor) else {
            return false;
        };
        let entry = self.new_entry(key, value);
        let trailing = self.entries[idx].split_off_trailing();
        self.entries.insert(idx + 1, entry);
        if let Some(trailing) = trailing {
            self.entries.insert(idx + 2, trailing);
        }
        true
    }

    /// Trim trailing whitespace off the header and append `key: value` as its
    /// last line.
    pub fn append(&mut self, key: &str, value: &str) {
        self.trim_end();
        let entry = self.new_entry(key, value);
        self.entries.push(entry);
    }

    /// Reassemble the full document text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.opening);
        for line in self.entries.iter().flat_map(|e| &e.lines) {
            out.push_str(line);
        }
        out.push_str(&self.remainder);
        out
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.key.as_deref() == Some(key))
    }

    fn new_entry(&self, key: &str, value: &str) -> Entry {
        Entry {
            key: Some(key.to_string()),
            lines: vec![format!("{key}: {value}{}", self.line_ending())],
        }
    }

    fn trim_end(&mut self) {
        let ending = self.line_ending();
        while let Some(entry) = self.entries.last_mut() {
            while entry.lines.last().is_some_and(|l| l.trim().is_empty()) {
                entry.lines.pop();
            }
            if let Some(last) = entry.lines.last_mut() {
                *last = format!("{}{ending}", last.trim_end());
                return;
            }
            self.entries.pop();
        }
    }
}

/// Whether a document whose header never closes still declares `key` as a
/// top-level key after its opening sentinel.
pub fn unterminated_contains_key(content: &str, key: &str) -> bool {
    content
        .split_inclusive('\n')
        .skip(1)
        .any(|line| key_of(line) == Some(key))
}

fn is_sentinel(line: &str) -> bool {
    line.trim_end() == SENTINEL
}

/// Blank or comment-only line.
fn is_filler(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Key of a top-level `key: value` line, if `line` is one.
fn key_of(line: &str) -> Option<&str> {
    let first = line.chars().next()?;
    if first.is_whitespace() || first == '#' || first == '-' {
        return None;
    }
    let (key, _) = line.split_once(':')?;
    let key = key.trim_end();
    let key = ['"', '\'']
        .iter()
        .find_map(|q| key.strip_prefix(*q).and_then(|k| k.strip_suffix(*q)))
        .unwrap_or(key);
    (!key.is_empty()).then_some(key)
}
