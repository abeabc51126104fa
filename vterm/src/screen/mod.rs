// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The screen model: a ragged cell grid with cursor, scroll region, modes,
//! saved state, an alternate buffer, and a callback for rows that scroll off.
//!
//! The grid is a sequence of rows where each row stores only the cells up to
//! the last written column; reads past the stored end yield the default
//! cell. This representation is observable through [`Screen::screen_lines`]
//! and the serializers depend on it.
//!
//! The implementation is split by concern, one file per operation family:
//!
//! ```text
//! screen/
//! ├── cursor_ops  →  relative/absolute cursor movement
//! ├── edit_ops    →  display_character, insert/delete/erase, tabs
//! ├── erase_ops   →  the six clear operations
//! ├── scroll_ops  →  margins, scrolling, line insert/delete, (reverse) index
//! └── buffer_ops  →  alternate buffer, save/restore, resize, reset
//! ```

pub mod buffer_ops;
pub mod charsets;
pub mod cursor_ops;
pub mod edit_ops;
pub mod erase_ops;
pub mod line;
pub mod scroll_ops;

use bitflags::bitflags;
pub use charsets::*;
pub use line::*;

use crate::{VtError,
            cell::{Cell, CharacterColor, ExtendedCharTable, Rendition}};

/// Hard upper bound on each screen dimension.
pub const MAX_SCREEN_DIM: usize = 4096;

/// Tab stops are fixed every `TAB_WIDTH` columns.
pub const TAB_WIDTH: usize = 8;

bitflags! {
    /// Screen mode bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ScreenMode: u8 {
        /// Cursor visible (DECTCEM). Default on.
        const CURSOR = 1 << 0;
        /// Auto-wrap at the right margin (DECAWM). Default on.
        const WRAP = 1 << 1;
        /// Cursor addressing relative to the scroll region (DECOM).
        const ORIGIN = 1 << 2;
        /// Insert rather than replace (IRM).
        const INSERT = 1 << 3;
        /// Reverse-video the entire screen (DECSCNM).
        const SCREEN = 1 << 4;
        /// LF implies CR (LNM).
        const NEWLINE = 1 << 5;
    }
}

/// Cursor snapshot taken by [`Screen::save_cursor`]: position, graphic
/// attributes, and the active character set. Omitting the character set from
/// the save set is a classic compatibility bug; it is included deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCursor {
    pub x: usize,
    pub y: usize,
    pub fg: CharacterColor,
    pub bg: CharacterColor,
    pub rendition: Rendition,
    pub charset: CharsetState,
}

impl Default for SavedCursor {
    /// A restore without a prior save restores the home position and the
    /// default attributes.
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            fg: CharacterColor::DEFAULT_FOREGROUND,
            bg: CharacterColor::DEFAULT_BACKGROUND,
            rendition: Rendition::empty(),
            charset: CharsetState::default(),
        }
    }
}

/// Borrowed view of rows about to leave the screen, handed to the
/// scrolled-line callback *before* they are overwritten. `start..end` is the
/// half-open row range being discarded; the full grid and line properties
/// are visible so a transcript writer can walk wrap continuations in both
/// directions. The borrow keeps the callback from re-entering the screen.
#[derive(Debug)]
pub struct ScrolledRows<'a> {
    pub lines: &'a [ScreenLine],
    pub properties: &'a [LineProperty],
    pub extended: &'a ExtendedCharTable,
    pub start: usize,
    pub end: usize,
}

/// Callback receiving rows that scroll off the top of the scroll region (or
/// leave the screen on shrink/clear). Invoked synchronously from within the
/// mutating operation.
pub type LineSaver = Box<dyn FnMut(ScrolledRows<'_>)>;

/// Grid state that swaps wholesale on an alternate-buffer switch.
#[derive(Debug, Default)]
struct GridState {
    grid: Vec<ScreenLine>,
    properties: Vec<LineProperty>,
}

/// A VT screen.
pub struct Screen {
    lines: usize,
    columns: usize,
    grid: Vec<ScreenLine>,
    properties: Vec<LineProperty>,

    cursor_x: usize,
    cursor_y: usize,
    top_margin: usize,
    bottom_margin: usize,

    modes: ScreenMode,
    saved_modes: ScreenMode,

    // Current graphic attributes applied by `display_character`.
    fg: CharacterColor,
    bg: CharacterColor,
    rendition: Rendition,

    charset: CharsetState,
    saved_cursor: SavedCursor,

    extended_chars: ExtendedCharTable,

    // Alternate buffer, allocated on first switch.
    alternate: Option<GridState>,
    using_alternate: bool,

    line_saver: Option<LineSaver>,
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("lines", &self.lines)
            .field("columns", &self.columns)
            .field("cursor", &(self.cursor_x, self.cursor_y))
            .field("margins", &(self.top_margin, self.bottom_margin))
            .field("modes", &self.modes)
            .field("using_alternate", &self.using_alternate)
            .finish_non_exhaustive()
    }
}

impl Screen {
    /// Create a screen of `lines × columns`.
    ///
    /// # Errors
    ///
    /// [`VtError::InvalidArgument`] when either dimension is zero or exceeds
    /// [`MAX_SCREEN_DIM`].
    pub fn new(lines: usize, columns: usize) -> Result<Self, VtError> {
        if lines == 0 || columns == 0 || lines > MAX_SCREEN_DIM || columns > MAX_SCREEN_DIM
        {
            return Err(VtError::InvalidArgument("screen dimensions"));
        }
        Ok(Self {
            lines,
            columns,
            grid: vec![ScreenLine::new(); lines],
            properties: vec![LineProperty::empty(); lines],
            cursor_x: 0,
            cursor_y: 0,
            top_margin: 0,
            bottom_margin: lines - 1,
            modes: ScreenMode::CURSOR | ScreenMode::WRAP,
            saved_modes: ScreenMode::empty(),
            fg: CharacterColor::DEFAULT_FOREGROUND,
            bg: CharacterColor::DEFAULT_BACKGROUND,
            rendition: Rendition::empty(),
            charset: CharsetState::default(),
            saved_cursor: SavedCursor::default(),
            extended_chars: ExtendedCharTable::default(),
            alternate: None,
            using_alternate: false,
            line_saver: None,
        })
    }

    /// Install the scrolled-line callback.
    pub fn set_line_saver(&mut self, saver: LineSaver) {
        self.line_saver = Some(saver);
    }

    // Accessors.

    #[must_use]
    pub fn cursor_x(&self) -> usize {
        self.cursor_x
    }

    #[must_use]
    pub fn cursor_y(&self) -> usize {
        self.cursor_y
    }

    #[must_use]
    pub fn has_cursor_visible(&self) -> bool {
        self.modes.contains(ScreenMode::CURSOR)
    }

    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn top_margin(&self) -> usize {
        self.top_margin
    }

    #[must_use]
    pub fn bottom_margin(&self) -> usize {
        self.bottom_margin
    }

    /// The ragged rows of the active buffer.
    #[must_use]
    pub fn screen_lines(&self) -> &[ScreenLine] {
        &self.grid
    }

    /// Per-row property bits of the active buffer.
    #[must_use]
    pub fn line_properties(&self) -> &[LineProperty] {
        &self.properties
    }

    #[must_use]
    pub fn extended_char_table(&self) -> &ExtendedCharTable {
        &self.extended_chars
    }

    #[must_use]
    pub fn charset(&self) -> &CharsetState {
        &self.charset
    }

    // Modes.

    #[must_use]
    pub fn get_mode(&self, mode: ScreenMode) -> bool {
        self.modes.contains(mode)
    }

    /// Set a mode bit. Origin mode homes the cursor to the top margin.
    pub fn set_mode(&mut self, mode: ScreenMode) {
        self.modes.insert(mode);
        if mode.contains(ScreenMode::ORIGIN) {
            self.cursor_x = 0;
            self.cursor_y = self.top_margin;
        }
    }

    /// Reset a mode bit. Leaving origin mode homes the cursor to (0, 0).
    pub fn reset_mode(&mut self, mode: ScreenMode) {
        self.modes.remove(mode);
        if mode.contains(ScreenMode::ORIGIN) {
            self.cursor_x = 0;
            self.cursor_y = 0;
        }
    }

    pub fn save_mode(&mut self, mode: ScreenMode) {
        self.saved_modes.remove(mode);
        self.saved_modes.insert(mode & self.modes);
    }

    pub fn restore_mode(&mut self, mode: ScreenMode) {
        if self.saved_modes.contains(mode) {
            self.set_mode(mode);
        } else {
            self.reset_mode(mode);
        }
    }

    // Graphic attributes for subsequent `display_character` calls.

    pub fn set_foreground_color(&mut self, color: CharacterColor) {
        self.fg = color;
    }

    pub fn set_background_color(&mut self, color: CharacterColor) {
        self.bg = color;
    }

    #[must_use]
    pub fn foreground_color(&self) -> CharacterColor {
        self.fg
    }

    #[must_use]
    pub fn background_color(&self) -> CharacterColor {
        self.bg
    }

    /// Set the current foreground's dim bit (SGR 2 / 22).
    pub fn set_foreground_dim(&mut self, dim: bool) {
        self.fg.set_dim(dim);
    }

    pub fn set_rendition(&mut self, flag: Rendition) {
        self.rendition.insert(flag);
    }

    pub fn reset_rendition(&mut self, flag: Rendition) {
        self.rendition.remove(flag);
    }

    pub fn reset_all_renditions(&mut self) {
        self.rendition = Rendition::empty();
        self.fg = CharacterColor::DEFAULT_FOREGROUND;
        self.bg = CharacterColor::DEFAULT_BACKGROUND;
    }

    // Character sets.

    pub fn designate_charset(&mut self, slot: usize, id: CharsetId) {
        self.charset.slots[slot & 3] = id;
    }

    /// Select the active graphic set (SI → G0, SO → G1).
    pub fn use_charset(&mut self, slot: usize) {
        self.charset.active = slot & 3;
    }

    // Internals shared by the op files.

    /// Deliver rows `[start, end)` to the scrolled-line callback, in place,
    /// before they are overwritten.
    pub(crate) fn emit_scrolled(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let Self {
            line_saver,
            grid,
            properties,
            extended_chars,
            ..
        } = self;
        if let Some(saver) = line_saver.as_mut() {
            saver(ScrolledRows {
                lines: &**grid,
                properties: &**properties,
                extended: &*extended_chars,
                start,
                end,
            });
        }
    }

    pub(crate) fn extended_chars_mut(&mut self) -> &mut ExtendedCharTable {
        &mut self.extended_chars
    }

    /// A cell written with the current attributes.
    pub(crate) fn styled_cell(&self, code_point: u32) -> Cell {
        Cell::new(code_point, self.fg, self.bg, self.rendition)
    }
}
