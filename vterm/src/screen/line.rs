// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Screen rows and their per-row property bits.

use bitflags::bitflags;

use crate::cell::Cell;

/// One screen row. Rows are *ragged*: only cells up to the last written
/// column are stored (`len() <= columns`), and reading past the stored end
/// yields the default cell. The serializers rely on this representation.
pub type ScreenLine = Vec<Cell>;

bitflags! {
    /// Per-row property bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LineProperty: u8 {
        /// The row was filled to the right margin and continues on the next
        /// row; the transcript renderer joins such rows into one logical
        /// line.
        const WRAPPED = 1 << 0;
        /// DECDWL mark (`ESC # 6`). No rendering effect here.
        const DOUBLE_WIDTH = 1 << 1;
        /// DECDHL mark (`ESC # 3` / `ESC # 4`). No rendering effect here.
        const DOUBLE_HEIGHT = 1 << 2;
    }
}

/// Cell at `x`, or the default cell past the stored end of the row.
#[must_use]
pub fn cell_at(line: &ScreenLine, x: usize) -> Cell {
    line.get(x).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reads_past_stored_end_yield_default() {
        let line: ScreenLine = vec![Cell::new(
            u32::from('x'),
            crate::CharacterColor::DEFAULT_FOREGROUND,
            crate::CharacterColor::DEFAULT_BACKGROUND,
            crate::Rendition::empty(),
        )];
        assert_eq!(cell_at(&line, 0).code_point, u32::from('x'));
        assert_eq!(cell_at(&line, 5), Cell::default());
    }
}
