use crate::calendar::{CalendarDayKey, YearMonth, day_key};
use crate::entry_index::EntryIndex;
use crate::models::EntryId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridCell<'a> {
    Blank,
    Day {
        key: CalendarDayKey,
        entries: &'a [EntryId],
    },
}

/// Seven-column layout of one month: leading blanks for the weekday offset,
/// then one cell per day.
#[derive(Clone, Debug)]
pub struct MonthGrid<'a> {
    pub month: YearMonth,
    pub leading_blanks: usize,
    days: Vec<GridCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub fn build(month: YearMonth, index: &'a EntryIndex) -> Self {
        let days = (1..=month.days())
            .map(|day| {
                let key = day_key(month.year, month.month, day);
                GridCell::Day {
                    key,
                    entries: index.lookup(month.year, month.month, day),
                }
            })
            .collect();
        Self {
            month,
            leading_blanks: month.first_weekday() as usize,
            days,
        }
    }

    /// Blank cells first, then days; trailing cells of the last week are not
    /// included.
    pub fn cells(&self) -> impl Iterator<Item = GridCell<'a>> + '_ {
        std::iter::repeat_n(GridCell::Blank, self.leading_blanks).chain(self.days.iter().copied())
    }

    pub fn week_count(&self) -> usize {
        self.month.weeks()
    }

    /// Row and column of a day within the grid.
    pub fn cell_position(&self, day: u32) -> (usize, usize) {
        let slot = self.leading_blanks + day.saturating_sub(1) as usize;
        (slot / 7, slot % 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JournalEntry;

    fn entry(id: usize, date: &str) -> JournalEntry {
        JournalEntry {
            id: EntryId(id),
            date: date.to_string(),
            img_url: String::new(),
            rating: 5.0,
            categories: Vec::new(),
            description: String::new(),
        }
    }

    #[test]
    fn lays_out_blanks_then_days() {
        let index = EntryIndex::build(&[entry(0, "05/03/2024"), entry(1, "05/03/2024")]);
        let march = YearMonth { year: 2024, month: 2 };
        let grid = MonthGrid::build(march, &index);

        // March 2024 starts on a Friday.
        assert_eq!(grid.leading_blanks, 5);
        let cells: Vec<GridCell> = grid.cells().collect();
        assert_eq!(cells.len(), 5 + 31);
        assert!(cells[..5].iter().all(|c| *c == GridCell::Blank));
        assert_eq!(
            cells[5],
            GridCell::Day {
                key: day_key(2024, 2, 1),
                entries: &[]
            }
        );
        match cells[5 + 4] {
            GridCell::Day { key, entries } => {
                assert_eq!(key.day, 5);
                assert_eq!(entries, &[EntryId(0), EntryId(1)]);
            }
            GridCell::Blank => panic!("expected a day cell"),
        }
        assert_eq!(grid.week_count(), 6);
    }

    #[test]
    fn cell_position_accounts_for_offset() {
        let index = EntryIndex::default();
        let grid = MonthGrid::build(YearMonth { year: 2024, month: 2 }, &index);
        assert_eq!(grid.cell_position(1), (0, 5));
        assert_eq!(grid.cell_position(3), (1, 0));
        assert_eq!(grid.cell_position(31), (5, 0));
    }
}
