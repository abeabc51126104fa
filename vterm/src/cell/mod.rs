// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Attributed character representation: colors, rendition flags, the cell
//! POD, and the intern pool backing multi-code-point cells.

pub mod character;
pub mod color;
pub mod extended_chars;

pub use character::*;
pub use color::*;
pub use extended_chars::*;
