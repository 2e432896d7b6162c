use std::collections::HashMap;

use crate::calendar::{CalendarDayKey, YearMonth, day_key, parse_entry_date};
use crate::error::DateParseError;
use crate::models::{EntryId, JournalEntry};

/// An entry left out of the index because its date could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub id: EntryId,
    pub date: String,
    pub error: DateParseError,
}

/// Journal entries grouped by calendar day, in journal order within a day.
#[derive(Debug, Default)]
pub struct EntryIndex {
    days: HashMap<CalendarDayKey, Vec<EntryId>>,
    months: HashMap<YearMonth, usize>,
    indexed: usize,
    skipped: Vec<SkippedEntry>,
}

impl EntryIndex {
    pub fn build(entries: &[JournalEntry]) -> Self {
        let mut index = EntryIndex::default();

        for entry in entries {
            match parse_entry_date(&entry.date) {
                Ok(key) => {
                    index.days.entry(key).or_default().push(entry.id);
                    *index.months.entry(key.year_month()).or_default() += 1;
                    index.indexed += 1;
                }
                Err(error) => {
                    tracing::warn!(
                        entry = %entry.id,
                        date = %entry.date,
                        %error,
                        "skipping journal entry with unreadable date"
                    );
                    index.skipped.push(SkippedEntry {
                        id: entry.id,
                        date: entry.date.clone(),
                        error,
                    });
                }
            }
        }

        tracing::debug!(
            indexed = index.indexed,
            days = index.days.len(),
            skipped = index.skipped.len(),
            "built entry index"
        );
        index
    }

    pub fn lookup(&self, year: i32, month: u32, day: u32) -> &[EntryId] {
        self.lookup_key(day_key(year, month, day))
    }

    pub fn lookup_key(&self, key: CalendarDayKey) -> &[EntryId] {
        self.days.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_in_month(&self, month: YearMonth) -> usize {
        self.months.get(&month).copied().unwrap_or(0)
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    /// Number of indexed (not skipped) entries.
    pub fn len(&self) -> usize {
        self.indexed
    }

    pub fn is_empty(&self) -> bool {
        self.indexed == 0
    }
}
