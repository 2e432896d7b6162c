use crate::calendar::YearMonth;

/// Largest run of months added on one side of the center or in one batch,
/// a hundred years. Larger requests are clamped.
pub const MAX_SPAN_MONTHS: usize = 1200;

/// What one extension did to the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extension {
    pub added: usize,
    /// Months dropped from the opposite end because of `max_months`.
    pub evicted: usize,
}

/// Contiguous, strictly increasing run of months materialized for scrolling.
///
/// Only grows by whole runs at either end. With a `max_months` cap the end
/// opposite the growth is trimmed; anything trimmed can be rebuilt with
/// [`YearMonth::shift`] from the retained boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    months: Vec<YearMonth>,
    max_months: Option<usize>,
}

impl MonthWindow {
    pub fn initialize(center: YearMonth, months_before: usize, months_after: usize) -> Self {
        let before = months_before.min(MAX_SPAN_MONTHS) as i32;
        let after = months_after.min(MAX_SPAN_MONTHS) as i32;
        let months = (-before..=after)
            .map(|delta| center.shift(delta))
            .collect();
        Self {
            months,
            max_months: None,
        }
    }

    pub fn with_max_months(mut self, max_months: Option<usize>) -> Self {
        self.max_months = max_months.map(|max| max.max(1));
        self
    }

    pub fn extend_backward(&mut self, count: usize) -> Extension {
        let count = count.min(MAX_SPAN_MONTHS);
        if count == 0 {
            return Extension::default();
        }
        let first = self.first();
        let added: Vec<YearMonth> = (1..=count as i32).rev().map(|i| first.shift(-i)).collect();
        self.months.splice(0..0, added);

        let evicted = self.overflow();
        if evicted > 0 {
            self.months.truncate(self.months.len() - evicted);
        }
        Extension {
            added: count,
            evicted,
        }
    }

    pub fn extend_forward(&mut self, count: usize) -> Extension {
        let count = count.min(MAX_SPAN_MONTHS);
        if count == 0 {
            return Extension::default();
        }
        let last = self.last();
        self.months
            .extend((1..=count as i32).map(|i| last.shift(i)));

        let evicted = self.overflow();
        if evicted > 0 {
            self.months.drain(0..evicted);
        }
        Extension {
            added: count,
            evicted,
        }
    }

    fn overflow(&self) -> usize {
        self.max_months
            .map(|max| self.months.len().saturating_sub(max))
            .unwrap_or(0)
    }

    pub fn first(&self) -> YearMonth {
        self.months[0]
    }

    pub fn last(&self) -> YearMonth {
        self.months[self.months.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = YearMonth> + '_ {
        self.months.iter().copied()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[YearMonth] {
        &self.months
    }

    pub fn position(&self, month: YearMonth) -> Option<usize> {
        let offset = month.ordinal() - self.first().ordinal();
        if offset < 0 || offset as usize >= self.months.len() {
            None
        } else {
            Some(offset as usize)
        }
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        self.position(month).is_some()
    }
}
