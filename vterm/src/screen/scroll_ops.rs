// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scrolling, margins, line insertion/deletion, and the (reverse) index
//! family.
//!
//! Scrolling happens inside the inclusive `[top_margin, bottom_margin]`
//! band; rows outside stay fixed. Rows leaving the top of the band are
//! delivered to the scrolled-line callback in place, before they are
//! overwritten. Rows pushed down by `scroll_down` are not reported: they are
//! not lost, they would re-enter on the next scroll up.

use super::{LineProperty, Screen, ScreenMode};

impl Screen {
    /// Set the scroll region (both bounds inclusive, 0-based), clamping to
    /// the screen. An inverted request is ignored. The cursor homes to the
    /// top margin under origin mode, to (0, 0) otherwise.
    pub fn set_margins(&mut self, top: usize, bottom: usize) {
        let top = top.min(self.lines - 1);
        let bottom = bottom.min(self.lines - 1);
        if top > bottom {
            tracing::warn!(top, bottom, "ignoring inverted scroll margins");
            return;
        }
        self.top_margin = top;
        self.bottom_margin = bottom;
        self.cursor_x = 0;
        self.cursor_y = if self.get_mode(ScreenMode::ORIGIN) {
            top
        } else {
            0
        };
    }

    /// Scroll the region up `n` rows: rows `[top+n, bottom]` move to
    /// `[top, bottom-n]`, the outgoing top rows go to the callback, and the
    /// bottom `n` rows become empty.
    pub fn scroll_up(&mut self, n: usize) {
        let n = n.max(1).min(self.bottom_margin - self.top_margin + 1);
        let top = self.top_margin;
        let bottom = self.bottom_margin;

        self.emit_scrolled(top, top + n);

        self.grid[top..=bottom].rotate_left(n);
        self.properties[top..=bottom].rotate_left(n);
        for row in &mut self.grid[bottom + 1 - n..=bottom] {
            row.clear();
        }
        for props in &mut self.properties[bottom + 1 - n..=bottom] {
            *props = LineProperty::empty();
        }
    }

    /// Scroll the region down `n` rows; the top `n` rows become empty.
    pub fn scroll_down(&mut self, n: usize) {
        let n = n.max(1).min(self.bottom_margin - self.top_margin + 1);
        let top = self.top_margin;
        let bottom = self.bottom_margin;

        self.grid[top..=bottom].rotate_right(n);
        self.properties[top..=bottom].rotate_right(n);
        for row in &mut self.grid[top..top + n] {
            row.clear();
        }
        for props in &mut self.properties[top..top + n] {
            *props = LineProperty::empty();
        }
    }

    /// Move the cursor down one row, scrolling at the bottom margin (IND).
    pub fn index(&mut self) {
        if self.cursor_y == self.bottom_margin {
            self.scroll_up(1);
        } else if self.cursor_y < self.lines - 1 {
            self.cursor_y += 1;
        }
    }

    /// Move the cursor up one row, scrolling down at the top margin (RI).
    pub fn reverse_index(&mut self) {
        if self.cursor_y == self.top_margin {
            self.scroll_down(1);
        } else if self.cursor_y > 0 {
            self.cursor_y -= 1;
        }
    }

    /// LF behavior: index, plus a carriage return under new-line mode.
    pub fn new_line(&mut self) {
        self.index();
        if self.get_mode(ScreenMode::NEWLINE) {
            self.cursor_x = 0;
        }
    }

    /// NEL: index with an unconditional carriage return.
    pub fn next_line(&mut self) {
        self.index();
        self.cursor_x = 0;
    }

    /// Insert `n` blank rows at the cursor (IL); rows below move toward the
    /// bottom margin and fall off it. No effect outside the scroll region.
    pub fn insert_lines(&mut self, n: usize) {
        let y = self.cursor_y;
        if y < self.top_margin || y > self.bottom_margin {
            return;
        }
        let n = n.max(1).min(self.bottom_margin - y + 1);
        let bottom = self.bottom_margin;

        self.grid[y..=bottom].rotate_right(n);
        self.properties[y..=bottom].rotate_right(n);
        for row in &mut self.grid[y..y + n] {
            row.clear();
        }
        for props in &mut self.properties[y..y + n] {
            *props = LineProperty::empty();
        }
    }

    /// Delete `n` rows at the cursor (DL); rows below move up and blank rows
    /// appear at the bottom margin. No effect outside the scroll region.
    pub fn delete_lines(&mut self, n: usize) {
        let y = self.cursor_y;
        if y < self.top_margin || y > self.bottom_margin {
            return;
        }
        let n = n.max(1).min(self.bottom_margin - y + 1);
        let bottom = self.bottom_margin;

        self.grid[y..=bottom].rotate_left(n);
        self.properties[y..=bottom].rotate_left(n);
        for row in &mut self.grid[bottom + 1 - n..=bottom] {
            row.clear();
        }
        for props in &mut self.properties[bottom + 1 - n..=bottom] {
            *props = LineProperty::empty();
        }
    }
}
