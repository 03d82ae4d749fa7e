//! View-state for the journal entry list: truncated teasers by default, one
//! entry expandable at a time.

use crate::domain::{Category, RawInput};

pub const TEASER_MAX_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

/// Identity used for expansion: the backend id when present, otherwise the
/// list position.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryKey {
    Id(String),
    Position(usize),
}

#[derive(Debug, Default)]
pub struct JournalLog {
    entries: Vec<RawInput>,
    expanded: Option<EntryKey>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum EntryView<'a> {
    Collapsed {
        date: &'a str,
        teaser: String,
    },
    Expanded {
        date: &'a str,
        fields: Vec<(&'static str, &'a str)>,
    },
}

impl JournalLog {
    pub fn new(entries: Vec<RawInput>) -> Self {
        Self {
            entries,
            expanded: None,
        }
    }

    pub fn entries(&self) -> &[RawInput] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Swaps in a freshly fetched list; any expansion is reset.
    pub fn replace(&mut self, entries: Vec<RawInput>) {
        self.entries = entries;
        self.expanded = None;
    }

    /// Expands the entry at `index`, collapsing whichever entry was expanded
    /// before. Toggling the already-expanded entry collapses it. Out-of-range
    /// indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        let Some(key) = self.key_at(index) else {
            return;
        };

        if self.expanded.as_ref() == Some(&key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        match (self.key_at(index), self.expanded.as_ref()) {
            (Some(key), Some(expanded)) => key == *expanded,
            _ => false,
        }
    }

    pub fn expanded_index(&self) -> Option<usize> {
        (0..self.entries.len()).find(|&i| self.is_expanded(i))
    }

    pub fn view(&self, index: usize) -> Option<EntryView<'_>> {
        let entry = self.entries.get(index)?;

        if self.is_expanded(index) {
            let fields = Category::ALL
                .iter()
                .map(|&c| (c.label(), entry.field(c)))
                .collect();
            Some(EntryView::Expanded {
                date: &entry.date,
                fields,
            })
        } else {
            Some(EntryView::Collapsed {
                date: &entry.date,
                teaser: teaser(entry.field(Category::Spiritual)),
            })
        }
    }

    fn key_at(&self, index: usize) -> Option<EntryKey> {
        let entry = self.entries.get(index)?;
        Some(match &entry.id {
            Some(id) => EntryKey::Id(id.clone()),
            None => EntryKey::Position(index),
        })
    }
}

/// Clips to the first `TEASER_MAX_CHARS` characters plus an ellipsis marker.
/// Counted in characters, not bytes, so multibyte text never splits.
pub fn teaser(text: &str) -> String {
    if text.chars().count() <= TEASER_MAX_CHARS {
        return text.to_string();
    }

    let mut out: String = text.chars().take(TEASER_MAX_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}
