// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The character cell: one column of one screen row.

use bitflags::bitflags;

use super::color::CharacterColor;

bitflags! {
    /// Graphic rendition of a cell. The flags are independent; the numeric
    /// values of the first four are also the packing the JSON renderer
    /// emits in its `r` field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Rendition: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const BLINK = 1 << 3;
        const REVERSE = 1 << 4;
        /// The cell's `code_point` field is an index into the
        /// [`ExtendedCharTable`], not a Unicode scalar.
        ///
        /// [`ExtendedCharTable`]: crate::ExtendedCharTable
        const EXTENDED_CHAR = 1 << 5;
    }
}

/// One screen cell.
///
/// `is_real` is false for the padding cell to the right of a double-width
/// character and for cells that were never written; renderers emit a single
/// space for such cells. A padding cell always sits immediately right of a
/// real double-width cell and carries code point 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode scalar, or an [`ExtendedCharTable`] index when
    /// [`Rendition::EXTENDED_CHAR`] is set.
    ///
    /// [`ExtendedCharTable`]: crate::ExtendedCharTable
    pub code_point: u32,
    pub fg: CharacterColor,
    pub bg: CharacterColor,
    pub rendition: Rendition,
    pub is_real: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            code_point: 0,
            fg: CharacterColor::DEFAULT_FOREGROUND,
            bg: CharacterColor::DEFAULT_BACKGROUND,
            rendition: Rendition::empty(),
            is_real: false,
        }
    }
}

impl Cell {
    /// A written (real) cell.
    #[must_use]
    pub fn new(
        code_point: u32,
        fg: CharacterColor,
        bg: CharacterColor,
        rendition: Rendition,
    ) -> Self {
        Self {
            code_point,
            fg,
            bg,
            rendition,
            is_real: true,
        }
    }

    /// The non-real filler placed right of a double-width character.
    #[must_use]
    pub fn padding(fg: CharacterColor, bg: CharacterColor, rendition: Rendition) -> Self {
        Self {
            code_point: 0,
            fg,
            bg,
            rendition,
            is_real: false,
        }
    }

    #[must_use]
    pub fn is_extended(&self) -> bool {
        self.rendition.contains(Rendition::EXTENDED_CHAR)
    }
}
