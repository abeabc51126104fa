// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement. Movement never scrolls; everything clamps silently.
//!
//! A count of 0 means 1. Vertical movement stops at the scroll-region margin
//! when the cursor starts inside the region, and at the screen edge when it
//! starts outside; absolute positioning is margin-relative under origin
//! mode.

use super::{Screen, ScreenMode};

impl Screen {
    /// Move the cursor up `n` rows (CUU).
    pub fn cursor_up(&mut self, n: usize) {
        let n = n.max(1);
        let stop = if self.cursor_y < self.top_margin() {
            0
        } else {
            self.top_margin()
        };
        self.cursor_y = self.cursor_y.saturating_sub(n).max(stop);
    }

    /// Move the cursor down `n` rows (CUD).
    pub fn cursor_down(&mut self, n: usize) {
        let n = n.max(1);
        let stop = if self.cursor_y > self.bottom_margin() {
            self.lines - 1
        } else {
            self.bottom_margin()
        };
        self.cursor_y = (self.cursor_y + n).min(stop);
    }

    /// Move the cursor left `n` columns (CUB).
    pub fn cursor_left(&mut self, n: usize) {
        let n = n.max(1);
        self.cursor_x = self.cursor_x.saturating_sub(n);
    }

    /// Move the cursor right `n` columns (CUF).
    pub fn cursor_right(&mut self, n: usize) {
        let n = n.max(1);
        self.cursor_x = (self.cursor_x + n).min(self.columns - 1);
    }

    /// Set the cursor column (0-based).
    pub fn set_cursor_x(&mut self, x: usize) {
        self.cursor_x = x.min(self.columns - 1);
    }

    /// Set the cursor row (0-based; margin-relative under origin mode).
    pub fn set_cursor_y(&mut self, y: usize) {
        self.cursor_y = if self.get_mode(ScreenMode::ORIGIN) {
            (y + self.top_margin()).clamp(self.top_margin(), self.bottom_margin())
        } else {
            y.min(self.lines - 1)
        };
    }

    /// Set row and column at once (CUP).
    pub fn set_cursor_yx(&mut self, y: usize, x: usize) {
        self.set_cursor_y(y);
        self.set_cursor_x(x);
    }

    /// Move `x` to the previous tab stop, `n` times (CBT).
    pub fn backward_tab(&mut self, n: usize) {
        let n = n.max(1);
        for _ in 0..n {
            if self.cursor_x == 0 {
                break;
            }
            self.cursor_x = (self.cursor_x - 1) / super::TAB_WIDTH * super::TAB_WIDTH;
        }
    }
}
