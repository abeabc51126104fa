// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The six erase operations. Erasing writes default cells; stored row
//! lengths only shrink through the lazy trailing-trim in
//! `clear_to_end_of_line`.

use super::Screen;
use crate::cell::Cell;

impl Screen {
    /// Erase from the cursor to the end of the row. Trailing cells become
    /// default, so the stored row is trimmed to the cursor column.
    pub fn clear_to_end_of_line(&mut self) {
        let x = self.cursor_x;
        self.grid[self.cursor_y].truncate(x);
    }

    /// Erase from the start of the row through the cursor.
    pub fn clear_to_beginning_of_line(&mut self) {
        let x = self.cursor_x;
        let row = &mut self.grid[self.cursor_y];
        let end = (x + 1).min(row.len());
        row[..end].fill(Cell::default());
    }

    /// Erase the whole cursor row.
    pub fn clear_entire_line(&mut self) {
        self.grid[self.cursor_y].clear();
    }

    /// Erase from the cursor to the end of the screen (ED 0).
    pub fn clear_to_end_of_screen(&mut self) {
        self.clear_to_end_of_line();
        for row in &mut self.grid[self.cursor_y + 1..] {
            row.clear();
        }
    }

    /// Erase from the start of the screen through the cursor (ED 1).
    pub fn clear_to_beginning_of_screen(&mut self) {
        self.clear_to_beginning_of_line();
        for row in &mut self.grid[..self.cursor_y] {
            row.clear();
        }
    }

    /// Erase the whole screen (ED 2). Rows above the cursor are about to
    /// become unreachable, so they are handed to the scrolled-line callback
    /// first; this is what keeps transcripts of full-screen redraws
    /// complete.
    pub fn clear_entire_screen(&mut self) {
        self.emit_scrolled(0, self.cursor_y);
        self.clear_without_saving();
    }

    /// Clear the active grid without notifying the callback.
    pub(crate) fn clear_without_saving(&mut self) {
        for row in &mut self.grid {
            row.clear();
        }
        for props in &mut self.properties {
            *props = super::LineProperty::empty();
        }
    }
}
