//! Selection cursor shared by every list-like page.
//!
//! # Scroll semantics
//!
//! `selected` is an absolute index into the page's rows (0 = first).
//! `offset` is the index of the first visible row. The selection is always
//! kept within the visible window; moving it past an edge scrolls.

use crate::event::{AppEvent, Direction};
use std::cell::Cell;

const PAGE_STEP: usize = 10;

#[derive(Debug)]
pub struct CursorState {
    pub selected: usize,
    pub offset: usize,
    /// Cached from the last render so `handle()` can keep the selection visible.
    last_height: Cell<usize>,
}

impl Default for CursorState {
    fn default() -> Self {
        Self { selected: 0, offset: 0, last_height: Cell::new(20) }
    }
}

impl CursorState {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Record the number of rows the list occupied on screen. Called from
    /// `render`, which always runs before the next `handle`.
    pub fn set_viewport(&self, height: usize) {
        self.last_height.set(height);
    }

    /// First visible row for a viewport of `height` rows.
    pub fn window_start(&self, height: usize) -> usize {
        let height = height.max(1);
        if self.selected < self.offset {
            self.selected
        } else if self.selected >= self.offset + height {
            self.selected + 1 - height
        } else {
            self.offset
        }
    }

    /// Handle a navigation event for a list of `len` rows.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            AppEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.selected = (self.selected + PAGE_STEP).min(len - 1);
            }
            _ => return,
        }
        self.offset = self.window_start(self.height());
        tracing::debug!(selected = self.selected, offset = self.offset, "cursor: moved");
    }
}
