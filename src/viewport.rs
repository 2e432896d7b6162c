//! Scroll geometry: where each month block sits in the scrollable document,
//! which month is most visible, and when the window needs to grow.

use crate::calendar::YearMonth;
use crate::month_window::MonthWindow;

/// Title row plus weekday header row.
pub const MONTH_HEADER_ROWS: usize = 2;
/// Blank row separating consecutive months.
pub const MONTH_GAP_ROWS: usize = 1;

/// One rendered month, measured in rows of the scroll document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthBlock {
    pub month: YearMonth,
    pub top: usize,
    pub height: usize,
}

impl MonthBlock {
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    fn overlap(&self, viewport: Viewport) -> usize {
        let top = self.top.max(viewport.top);
        let bottom = self.bottom().min(viewport.bottom());
        bottom.saturating_sub(top)
    }
}

/// Visible slice of the scroll document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub top: usize,
    pub height: usize,
}

impl Viewport {
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

pub fn block_height(month: YearMonth, cell_height: usize) -> usize {
    MONTH_HEADER_ROWS + month.weeks() * cell_height + MONTH_GAP_ROWS
}

/// Stacks every month of the window top to bottom.
pub fn layout_blocks(window: &MonthWindow, cell_height: usize) -> Vec<MonthBlock> {
    let mut top = 0;
    window
        .iter()
        .map(|month| {
            let height = block_height(month, cell_height);
            let block = MonthBlock { month, top, height };
            top += height;
            block
        })
        .collect()
}

pub fn document_height(blocks: &[MonthBlock]) -> usize {
    blocks.last().map(MonthBlock::bottom).unwrap_or(0)
}

/// Tracks the month shown in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportTracker {
    current: YearMonth,
}

impl ViewportTracker {
    pub fn new(initial: YearMonth) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> YearMonth {
        self.current
    }

    pub fn reset(&mut self, month: YearMonth) {
        self.current = month;
    }

    /// Picks the block with the largest visible overlap; the first block wins
    /// ties. With nothing visible the previous month is kept.
    pub fn observe(&mut self, blocks: &[MonthBlock], viewport: Viewport) -> YearMonth {
        let mut best: Option<(YearMonth, usize)> = None;
        for block in blocks {
            let overlap = block.overlap(viewport);
            if overlap > best.map(|(_, o)| o).unwrap_or(0) {
                best = Some((block.month, overlap));
            }
        }
        if let Some((month, _)) = best {
            self.current = month;
        }
        self.current
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSnapshot {
    pub scroll_top: usize,
    pub client_height: usize,
    pub scroll_height: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeTriggers {
    pub backward: bool,
    pub forward: bool,
}

/// Both edges are checked independently; a short document can trigger both.
pub fn edge_triggers(snapshot: ScrollSnapshot, multiplier: usize) -> EdgeTriggers {
    let threshold = snapshot.client_height.saturating_mul(multiplier);
    let remaining_below = snapshot
        .scroll_height
        .saturating_sub(snapshot.client_height)
        .saturating_sub(snapshot.scroll_top);
    EdgeTriggers {
        backward: snapshot.scroll_top < threshold,
        forward: remaining_below < threshold,
    }
}
