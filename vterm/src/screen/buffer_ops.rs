// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Alternate buffer, cursor save/restore, resize, and full reset.

use super::{GridState, LineProperty, SavedCursor, Screen, ScreenLine, ScreenMode,
            MAX_SCREEN_DIM};
use crate::{VtError, cell::CharacterColor};

impl Screen {
    /// Snapshot the cursor position, graphic attributes, and character-set
    /// state.
    pub fn save_cursor(&mut self) {
        self.saved_cursor = SavedCursor {
            x: self.cursor_x,
            y: self.cursor_y,
            fg: self.fg,
            bg: self.bg,
            rendition: self.rendition,
            charset: self.charset,
        };
    }

    /// Restore the last [`save_cursor`](Self::save_cursor) snapshot,
    /// clamping the position to the current size.
    pub fn restore_cursor(&mut self) {
        let saved = self.saved_cursor;
        self.cursor_x = saved.x.min(self.columns - 1);
        self.cursor_y = saved.y.min(self.lines - 1);
        self.fg = saved.fg;
        self.bg = saved.bg;
        self.rendition = saved.rendition;
        self.charset = saved.charset;
    }

    /// Switch to the alternate buffer, allocating it on first use. The
    /// cursor, attributes, and margins carry over; only the grid and its
    /// line properties swap.
    pub fn use_alternate_buffer(&mut self) {
        if self.using_alternate {
            return;
        }
        let alternate = self.alternate.get_or_insert_with(GridState::default);
        alternate.grid.resize(self.lines, ScreenLine::new());
        alternate
            .properties
            .resize(self.lines, LineProperty::empty());
        std::mem::swap(&mut self.grid, &mut alternate.grid);
        std::mem::swap(&mut self.properties, &mut alternate.properties);
        self.using_alternate = true;
    }

    /// Switch back to the primary buffer; the primary grid reappears
    /// byte-for-byte.
    pub fn use_primary_buffer(&mut self) {
        if !self.using_alternate {
            return;
        }
        if let Some(alternate) = self.alternate.as_mut() {
            std::mem::swap(&mut self.grid, &mut alternate.grid);
            std::mem::swap(&mut self.properties, &mut alternate.properties);
        }
        self.using_alternate = false;
    }

    #[must_use]
    pub fn is_using_alternate_buffer(&self) -> bool {
        self.using_alternate
    }

    /// Reshape to `lines × columns`.
    ///
    /// Rows are truncated or padded with default cells. When the line count
    /// shrinks past the cursor row, rows leave through the top — reported to
    /// the scrolled-line callback — so the cursor-containing row survives.
    /// Margins reset to the full new screen and the cursor is clamped.
    ///
    /// # Errors
    ///
    /// [`VtError::InvalidArgument`] when either dimension is zero or exceeds
    /// [`MAX_SCREEN_DIM`]; the screen is left untouched.
    pub fn set_screen_size(&mut self, lines: usize, columns: usize) -> Result<(), VtError> {
        if lines == 0 || columns == 0 || lines > MAX_SCREEN_DIM || columns > MAX_SCREEN_DIM
        {
            return Err(VtError::InvalidArgument("screen dimensions"));
        }

        // Shrinking below the cursor row: push the excess out through the
        // top so the row under the cursor stays on screen.
        if self.cursor_y > lines - 1 {
            let outgoing = self.cursor_y - (lines - 1);
            self.emit_scrolled(0, outgoing);
            self.grid.drain(..outgoing);
            self.properties.drain(..outgoing);
            self.cursor_y -= outgoing;
            self.saved_cursor.y = self.saved_cursor.y.saturating_sub(outgoing);
        }

        self.grid.resize(lines, ScreenLine::new());
        self.properties.resize(lines, LineProperty::empty());
        for row in &mut self.grid {
            row.truncate(columns);
        }
        if let Some(alternate) = self.alternate.as_mut() {
            alternate.grid.resize(lines, ScreenLine::new());
            alternate.properties.resize(lines, LineProperty::empty());
            for row in &mut alternate.grid {
                row.truncate(columns);
            }
        }

        self.lines = lines;
        self.columns = columns;
        self.top_margin = 0;
        self.bottom_margin = lines - 1;
        self.cursor_x = self.cursor_x.min(columns - 1);
        self.cursor_y = self.cursor_y.min(lines - 1);
        self.saved_cursor.x = self.saved_cursor.x.min(columns - 1);
        self.saved_cursor.y = self.saved_cursor.y.min(lines - 1);
        Ok(())
    }

    /// Reset to the initial state (RIS): default modes, full margins, home
    /// cursor, default attributes and character sets, both grids cleared.
    pub fn reset(&mut self) {
        self.modes = ScreenMode::CURSOR | ScreenMode::WRAP;
        self.saved_modes = ScreenMode::empty();
        self.top_margin = 0;
        self.bottom_margin = self.lines - 1;
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.fg = CharacterColor::DEFAULT_FOREGROUND;
        self.bg = CharacterColor::DEFAULT_BACKGROUND;
        self.rendition = crate::Rendition::empty();
        self.charset = super::CharsetState::default();
        self.saved_cursor = SavedCursor::default();
        self.clear_without_saving();
        if let Some(alternate) = self.alternate.as_mut() {
            for row in &mut alternate.grid {
                row.clear();
            }
            for props in &mut alternate.properties {
                *props = LineProperty::empty();
            }
        }
        self.using_alternate = false;
    }

    /// DECALN screen-alignment pattern: fill every cell with `E`, home the
    /// cursor, reset the margins.
    pub fn fill_with_alignment_pattern(&mut self) {
        let e_cell = self.styled_cell(u32::from('E'));
        let columns = self.columns;
        for row in &mut self.grid {
            row.clear();
            row.resize(columns, e_cell);
        }
        self.top_margin = 0;
        self.bottom_margin = self.lines - 1;
        self.cursor_x = 0;
        self.cursor_y = 0;
    }

    /// Set or clear a line-property mark on the cursor row (`ESC # …`).
    pub fn set_line_property(&mut self, property: LineProperty, enable: bool) {
        if enable {
            self.properties[self.cursor_y].insert(property);
        } else {
            self.properties[self.cursor_y].remove(property);
        }
    }
}
