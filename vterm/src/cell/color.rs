// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cell colors and palette resolution.
//!
//! A [`CharacterColor`] is a tagged union of the color spaces a VT terminal
//! can address, plus an orthogonal dim bit. It resolves to a concrete 24-bit
//! [`Rgb`] only when held against a [`Palette`] — a 20-entry view holding the
//! two default colors, the eight system colors, and their ten intense
//! equivalents:
//!
//! ```text
//! index:  0      1      2..=9        10     11     12..=19
//!         ┌──────┬──────┬────────────┬──────┬──────┬────────────┐
//!         │ Dfg  │ Dbg  │ 8 system   │ Dfg+ │ Dbg+ │ 8 system+  │
//!         └──────┴──────┴────────────┴──────┴──────┴────────────┘
//!                                     ╰── intense row (+ = bright)
//! ```
//!
//! The dim bit participates in equality: two colors that differ only in dim
//! are different colors, and the renderers treat them as a style change.

/// Number of entries in the base palette row: two defaults + eight system.
pub const PALETTE_BASE_COLORS: usize = 10;

/// Total palette entries: base row plus the intense row.
pub const PALETTE_SIZE: usize = PALETTE_BASE_COLORS * 2;

/// Palette slot of the default foreground.
pub const DEFAULT_FORE_INDEX: u8 = 0;

/// Palette slot of the default background.
pub const DEFAULT_BACK_INDEX: u8 = 1;

/// A concrete 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pack as `0xRRGGBB`.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | (self.blue as u32)
    }

    /// Dim variant: each channel scaled by 2/3.
    #[must_use]
    pub const fn dimmed(self) -> Self {
        Self {
            red: (self.red as u16 * 2 / 3) as u8,
            green: (self.green as u16 * 2 / 3) as u8,
            blue: (self.blue as u16 * 2 / 3) as u8,
        }
    }
}

/// Read-only palette view handed to the renderers. The caller guarantees it
/// outlives the render call; the renderers never mutate it.
pub type Palette = [Rgb; PALETTE_SIZE];

/// Traditional VGA-ish table: soft white on dark gray defaults.
pub const VGA_PALETTE: Palette = [
    Rgb::new(0xEE, 0xEE, 0xEE), // default foreground
    Rgb::new(0x33, 0x33, 0x33), // default background
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0xB2, 0x18, 0x18), // red
    Rgb::new(0x18, 0xB2, 0x18), // green
    Rgb::new(0xB2, 0x68, 0x18), // yellow
    Rgb::new(0x18, 0x18, 0xB2), // blue
    Rgb::new(0xB2, 0x18, 0xB2), // magenta
    Rgb::new(0x18, 0xB2, 0xB2), // cyan
    Rgb::new(0xB2, 0xB2, 0xB2), // white
    // intense row
    Rgb::new(0xFF, 0xFF, 0xFF), // default foreground
    Rgb::new(0x00, 0x00, 0x00), // default background
    Rgb::new(0x68, 0x68, 0x68), // black
    Rgb::new(0xFF, 0x54, 0x54), // red
    Rgb::new(0x54, 0xFF, 0x54), // green
    Rgb::new(0xFF, 0xFF, 0x54), // yellow
    Rgb::new(0x54, 0x54, 0xFF), // blue
    Rgb::new(0xFF, 0x54, 0xFF), // magenta
    Rgb::new(0x54, 0xFF, 0xFF), // cyan
    Rgb::new(0xFF, 0xFF, 0xFF), // white
];

/// The xterm default table: white on black defaults.
pub const XTERM_PALETTE: Palette = [
    Rgb::new(0xFF, 0xFF, 0xFF), // default foreground
    Rgb::new(0x00, 0x00, 0x00), // default background
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0xCD, 0x00, 0x00), // red
    Rgb::new(0x00, 0xCD, 0x00), // green
    Rgb::new(0xCD, 0xCD, 0x00), // yellow
    Rgb::new(0x00, 0x00, 0xEE), // blue
    Rgb::new(0xCD, 0x00, 0xCD), // magenta
    Rgb::new(0x00, 0xCD, 0xCD), // cyan
    Rgb::new(0xE5, 0xE5, 0xE5), // white
    // intense row
    Rgb::new(0xFF, 0xFF, 0xFF), // default foreground
    Rgb::new(0x00, 0x00, 0x00), // default background
    Rgb::new(0x7F, 0x7F, 0x7F), // black
    Rgb::new(0xFF, 0x00, 0x00), // red
    Rgb::new(0x00, 0xFF, 0x00), // green
    Rgb::new(0xFF, 0xFF, 0x00), // yellow
    Rgb::new(0x5C, 0x5C, 0xFF), // blue
    Rgb::new(0xFF, 0x00, 0xFF), // magenta
    Rgb::new(0x00, 0xFF, 0xFF), // cyan
    Rgb::new(0xFF, 0xFF, 0xFF), // white
];

/// The color space a [`CharacterColor`] addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// No color assigned; resolves to black.
    #[default]
    Undefined,
    /// Default foreground (`index` 0) or background (`index` 1).
    Default { index: u8 },
    /// One of the eight system colors, optionally from the intense row.
    System { index: u8, intense: bool },
    /// xterm 256-color index.
    Indexed256 { index: u8 },
    /// Direct 24-bit color.
    Rgb { red: u8, green: u8, blue: u8 },
}

/// Color of a single cell: a color space plus the dim bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterColor {
    pub space: ColorSpace,
    pub dim: bool,
}

impl CharacterColor {
    /// Default foreground color of a fresh cell.
    pub const DEFAULT_FOREGROUND: Self = Self {
        space: ColorSpace::Default {
            index: DEFAULT_FORE_INDEX,
        },
        dim: false,
    };

    /// Default background color of a fresh cell.
    pub const DEFAULT_BACKGROUND: Self = Self {
        space: ColorSpace::Default {
            index: DEFAULT_BACK_INDEX,
        },
        dim: false,
    };

    #[must_use]
    pub const fn new(space: ColorSpace) -> Self {
        Self { space, dim: false }
    }

    #[must_use]
    pub const fn system(index: u8, intense: bool) -> Self {
        Self::new(ColorSpace::System {
            index: index & 7,
            intense,
        })
    }

    #[must_use]
    pub const fn indexed_256(index: u8) -> Self {
        Self::new(ColorSpace::Indexed256 { index })
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(ColorSpace::Rgb { red, green, blue })
    }

    /// Mark this color as dim. Dim is applied at resolution time but is part
    /// of the color's identity.
    pub fn set_dim(&mut self, dim: bool) {
        self.dim = dim;
    }

    /// Resolve to a concrete color against `palette`.
    #[must_use]
    pub fn resolve(&self, palette: &Palette) -> Rgb {
        let color = match self.space {
            ColorSpace::Undefined => Rgb::default(),
            ColorSpace::Default { index } => palette[usize::from(index & 1)],
            ColorSpace::System { index, intense } => {
                let row = if intense { PALETTE_BASE_COLORS } else { 0 };
                palette[row + 2 + usize::from(index & 7)]
            }
            ColorSpace::Indexed256 { index } => resolve_indexed_256(index, palette),
            ColorSpace::Rgb { red, green, blue } => Rgb::new(red, green, blue),
        };
        if self.dim { color.dimmed() } else { color }
    }
}

/// Resolve an xterm 256-color index:
/// `0..=15` system rows of the palette, `16..=231` the 6×6×6 color cube,
/// `232..=255` the gray ramp (black and white left out).
#[must_use]
pub fn resolve_indexed_256(index: u8, palette: &Palette) -> Rgb {
    let u = usize::from(index);
    if u < 8 {
        return palette[u + 2];
    }
    if u < 16 {
        return palette[u - 8 + 2 + PALETTE_BASE_COLORS];
    }
    if u < 232 {
        let cube = u - 16;
        let channel = |v: usize| -> u8 {
            if v == 0 { 0 } else { (40 * v + 55) as u8 }
        };
        return Rgb::new(
            channel(cube / 36 % 6),
            channel(cube / 6 % 6),
            channel(cube % 6),
        );
    }
    let gray = ((u - 232) * 10 + 8) as u8;
    Rgb::new(gray, gray, gray)
}
