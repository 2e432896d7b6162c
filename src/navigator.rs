//! Detail card navigation: which entry is open, stepping through the flat
//! journal order, and turning horizontal drags into steps.

use crate::error::NavigatorError;
use crate::models::{EntryId, JournalEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub id: EntryId,
    pub index: usize,
}

/// Result of a navigation request. Stepping past either end is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Moved(Selection),
    AtBoundary(Selection),
}

impl Step {
    pub fn selection(self) -> Selection {
        match self {
            Step::Moved(selection) | Step::AtBoundary(selection) => selection,
        }
    }
}

pub fn select(entries: &[JournalEntry], id: EntryId) -> Result<Selection, NavigatorError> {
    entries
        .iter()
        .position(|entry| entry.id == id)
        .map(|index| Selection { id, index })
        .ok_or(NavigatorError::NotFound(id))
}

pub fn next(entries: &[JournalEntry], selection: Selection) -> Step {
    match entries.get(selection.index + 1) {
        Some(entry) => Step::Moved(Selection {
            id: entry.id,
            index: selection.index + 1,
        }),
        None => Step::AtBoundary(selection),
    }
}

pub fn previous(entries: &[JournalEntry], selection: Selection) -> Step {
    match selection
        .index
        .checked_sub(1)
        .and_then(|index| entries.get(index).map(|entry| (index, entry)))
    {
        Some((index, entry)) => Step::Moved(Selection {
            id: entry.id,
            index,
        }),
        None => Step::AtBoundary(selection),
    }
}

pub fn can_next(entries: &[JournalEntry], selection: Selection) -> bool {
    selection.index + 1 < entries.len()
}

pub fn can_previous(selection: Selection) -> bool {
    selection.index > 0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GesturePhase {
    Idle,
    Dragging { origin: f64, current: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    Next,
    Previous,
    /// Drag too short; the card snaps back.
    Reset,
}

/// Horizontal drag recognizer: `Idle -> Dragging -> Idle`, resolving to a
/// step or a reset on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    phase: GesturePhase,
    threshold: f64,
}

impl SwipeGesture {
    pub fn new(threshold: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            threshold,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    pub fn press(&mut self, x: f64) {
        self.phase = GesturePhase::Dragging {
            origin: x,
            current: x,
        };
    }

    /// Returns the visual offset; ignored unless a drag is in progress.
    pub fn drag_to(&mut self, x: f64) -> f64 {
        if let GesturePhase::Dragging { current, .. } = &mut self.phase {
            *current = x;
        }
        self.offset()
    }

    pub fn offset(&self) -> f64 {
        match self.phase {
            GesturePhase::Dragging { origin, current } => current - origin,
            GesturePhase::Idle => 0.0,
        }
    }

    pub fn release(&mut self) -> SwipeOutcome {
        let delta = self.offset();
        let was_dragging = self.is_dragging();
        self.phase = GesturePhase::Idle;

        if !was_dragging || delta.abs() <= self.threshold {
            SwipeOutcome::Reset
        } else if delta < 0.0 {
            SwipeOutcome::Next
        } else {
            SwipeOutcome::Previous
        }
    }

    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

/// Open-card state plus the drag gesture that drives it.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigator {
    selection: Option<Selection>,
    gesture: SwipeGesture,
}

impl Navigator {
    pub fn new(swipe_threshold: f64) -> Self {
        Self {
            selection: None,
            gesture: SwipeGesture::new(swipe_threshold),
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    pub fn gesture(&self) -> &SwipeGesture {
        &self.gesture
    }

    pub fn gesture_mut(&mut self) -> &mut SwipeGesture {
        &mut self.gesture
    }

    /// Opens the card for `id`. On failure the card stays closed.
    pub fn open(&mut self, entries: &[JournalEntry], id: EntryId) -> Result<Selection, NavigatorError> {
        self.gesture.cancel();
        match select(entries, id) {
            Ok(selection) => {
                self.selection = Some(selection);
                Ok(selection)
            }
            Err(err) => {
                tracing::warn!(%err, "could not open entry");
                self.selection = None;
                Err(err)
            }
        }
    }

    pub fn close(&mut self) {
        self.selection = None;
        self.gesture.cancel();
    }

    pub fn step_next(&mut self, entries: &[JournalEntry]) -> Option<Step> {
        let step = next(entries, self.selection?);
        self.selection = Some(step.selection());
        Some(step)
    }

    pub fn step_previous(&mut self, entries: &[JournalEntry]) -> Option<Step> {
        let step = previous(entries, self.selection?);
        self.selection = Some(step.selection());
        Some(step)
    }

    /// Finishes a drag and applies the resulting step, if any.
    pub fn release_drag(&mut self, entries: &[JournalEntry]) -> (SwipeOutcome, Option<Step>) {
        let outcome = self.gesture.release();
        let step = match outcome {
            SwipeOutcome::Next => self.step_next(entries),
            SwipeOutcome::Previous => self.step_previous(entries),
            SwipeOutcome::Reset => None,
        };
        (outcome, step)
    }
}
