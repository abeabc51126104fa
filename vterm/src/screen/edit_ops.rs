// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text insertion: `display_character` and the in-row edit operations.

use unicode_width::UnicodeWidthChar;

use super::{LineProperty, Screen, ScreenMode, TAB_WIDTH};
use crate::cell::{Cell, Rendition};

impl Screen {
    /// Place a code point at the cursor in the current attributes and
    /// advance.
    ///
    /// * Zero-width code points attach to the preceding real cell as
    ///   combining marks (through the extended-char table) and do not move
    ///   the cursor.
    /// * Double-width code points occupy two columns: a real cell followed
    ///   by a non-real padding cell. A wide character that would straddle
    ///   the right margin moves wholesale to the next row.
    /// * Advancing past the last column wraps (marking the row
    ///   [`LineProperty::WRAPPED`] and scrolling at the bottom of the scroll
    ///   region) when wrap mode is on, else the cursor stays clamped at the
    ///   last column.
    /// * Under insert mode, existing cells at and right of the cursor shift
    ///   right first; overflow past the right margin is dropped.
    pub fn display_character(&mut self, cp: u32) {
        let cp = self.charset.translate(cp);
        let Some(ch) = char::from_u32(cp) else {
            return;
        };
        let width = match UnicodeWidthChar::width(ch) {
            // Control and other non-printing code points never reach the
            // grid.
            None => return,
            Some(0) => {
                self.attach_combining_mark(cp);
                return;
            }
            Some(w) => w.min(2),
        };
        if width > self.columns {
            return;
        }

        // A wide character that would split at the right margin starts the
        // next row instead.
        if self.cursor_x + width > self.columns {
            if self.get_mode(ScreenMode::WRAP) {
                self.properties[self.cursor_y].insert(LineProperty::WRAPPED);
                self.index();
                self.cursor_x = 0;
            } else {
                self.cursor_x = self.columns - width;
            }
        }

        if self.get_mode(ScreenMode::INSERT) {
            self.insert_chars(width);
        }

        let x = self.cursor_x;
        let y = self.cursor_y;
        let cell = self.styled_cell(cp);
        let padding = Cell::padding(self.fg, self.bg, self.rendition);
        let row = &mut self.grid[y];
        if row.len() < x + width {
            row.resize(x + width, Cell::default());
        }
        row[x] = cell;
        if width == 2 {
            row[x + 1] = padding;
        }

        self.cursor_x += width;
        if self.cursor_x > self.columns - 1 {
            if self.get_mode(ScreenMode::WRAP) {
                self.properties[self.cursor_y].insert(LineProperty::WRAPPED);
                self.index();
                self.cursor_x = 0;
            } else {
                self.cursor_x = self.columns - 1;
            }
        }
    }

    /// Append a combining mark to the cell just before the cursor. The cell
    /// (or its interned sequence) is extended and re-interned; identical
    /// sequences share one table entry.
    fn attach_combining_mark(&mut self, cp: u32) {
        let (x, y) = if self.cursor_x == 0 {
            if self.cursor_y == 0 {
                return;
            }
            (self.columns - 1, self.cursor_y - 1)
        } else {
            (self.cursor_x - 1, self.cursor_y)
        };

        let Some(cell) = self.grid[y].get(x).copied() else {
            return;
        };
        if !cell.is_real {
            return;
        }

        let mut seq: Vec<u32> = if cell.is_extended() {
            self.extended_chars.get(cell.code_point).to_vec()
        } else {
            vec![cell.code_point]
        };
        seq.push(cp);
        let index = self.extended_chars_mut().intern(&seq);

        let cell = &mut self.grid[y][x];
        cell.code_point = index;
        cell.rendition.insert(Rendition::EXTENDED_CHAR);
    }

    /// Insert `n` blank cells at the cursor (ICH); cells shifted past the
    /// right margin are dropped.
    pub fn insert_chars(&mut self, n: usize) {
        let n = n.max(1);
        let x = self.cursor_x;
        let columns = self.columns;
        let row = &mut self.grid[self.cursor_y];
        if x >= row.len() {
            return;
        }
        for _ in 0..n.min(columns - x) {
            row.insert(x, Cell::default());
        }
        row.truncate(columns);
    }

    /// Delete `n` cells at the cursor (DCH); the rest of the row shifts
    /// left.
    pub fn delete_chars(&mut self, n: usize) {
        let n = n.max(1);
        let x = self.cursor_x;
        let row = &mut self.grid[self.cursor_y];
        if x >= row.len() {
            return;
        }
        let end = (x + n).min(row.len());
        row.drain(x..end);
    }

    /// Blank `n` cells at the cursor in place (ECH); no shifting.
    pub fn erase_chars(&mut self, n: usize) {
        let n = n.max(1);
        let x = self.cursor_x;
        let row = &mut self.grid[self.cursor_y];
        if x >= row.len() {
            return;
        }
        let end = (x + n).min(row.len());
        row[x..end].fill(Cell::default());
    }

    /// Advance to the next tab stop, clamped to the last column. The
    /// skipped-over columns stay unwritten, which reads back as non-real
    /// cells with code point 0.
    pub fn tab(&mut self) {
        self.cursor_x = ((self.cursor_x / TAB_WIDTH + 1) * TAB_WIDTH).min(self.columns - 1);
    }

    /// Move the cursor one column left without wrapping (BS).
    pub fn backspace(&mut self) {
        self.cursor_x = self.cursor_x.saturating_sub(1);
    }

    /// Set x to 0 (CR).
    pub fn carriage_return(&mut self) {
        self.cursor_x = 0;
    }
}
