// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single-character escape sequences and the control characters the
//! emulator dispatches on.
//!
//! Direct ESC sequences predate CSI: `ESC 7` saves the cursor where `ESC[s`
//! does the same with parameters. Both families are supported; the overlap
//! is intentional VT100 history.

// C0 controls.

pub const BEL: u32 = 0x07;
pub const BS: u32 = 0x08;
pub const HT: u32 = 0x09;
pub const LF: u32 = 0x0A;
pub const VT: u32 = 0x0B;
pub const FF: u32 = 0x0C;
pub const CR: u32 = 0x0D;
/// Shift Out: select G1.
pub const SO: u32 = 0x0E;
/// Shift In: select G0.
pub const SI: u32 = 0x0F;
/// Cancel: abort the sequence in progress.
pub const CAN: u32 = 0x18;
/// Substitute: abort the sequence in progress.
pub const SUB: u32 = 0x1A;
pub const ESC: u32 = 0x1B;

// C1 controls (8-bit forms).

/// Index (8-bit IND).
pub const C1_IND: u32 = 0x84;
/// Next line (8-bit NEL).
pub const C1_NEL: u32 = 0x85;
/// Reverse index (8-bit RI).
pub const C1_RI: u32 = 0x8D;
/// 8-bit CSI introducer.
pub const C1_CSI: u32 = 0x9B;
/// 8-bit OSC introducer.
pub const C1_OSC: u32 = 0x9D;

// ESC finals.

/// ESC 7: save cursor and attributes (DECSC).
pub const DECSC_SAVE_CURSOR: u32 = '7' as u32;
/// ESC 8: restore cursor and attributes (DECRC).
pub const DECRC_RESTORE_CURSOR: u32 = '8' as u32;
/// ESC D: index — cursor down, scrolling at the bottom margin (IND).
pub const IND_INDEX: u32 = 'D' as u32;
/// ESC E: next line — index plus carriage return (NEL).
pub const NEL_NEXT_LINE: u32 = 'E' as u32;
/// ESC M: reverse index — cursor up, scrolling at the top margin (RI).
pub const RI_REVERSE_INDEX: u32 = 'M' as u32;
/// ESC c: reset to initial state (RIS).
pub const RIS_RESET: u32 = 'c' as u32;
/// ESC Z: identify terminal (DECID, answered like DA).
pub const DECID_IDENTIFY: u32 = 'Z' as u32;
/// ESC =: application keypad (DECKPAM, consumed).
pub const DECKPAM_APP_KEYPAD: u32 = '=' as u32;
/// ESC >: numeric keypad (DECKPNM, consumed).
pub const DECKPNM_NUMERIC_KEYPAD: u32 = '>' as u32;
/// ESC \: string terminator (ST).
pub const ST_STRING_TERMINATOR: u32 = '\\' as u32;

// ESC # finals (DEC line attributes).

/// ESC # 3: double-height line, top half (DECDHL).
pub const DECDHL_TOP: u32 = '3' as u32;
/// ESC # 4: double-height line, bottom half (DECDHL).
pub const DECDHL_BOTTOM: u32 = '4' as u32;
/// ESC # 5: single-width line (DECSWL).
pub const DECSWL_SINGLE_WIDTH: u32 = '5' as u32;
/// ESC # 6: double-width line (DECDWL).
pub const DECDWL_DOUBLE_WIDTH: u32 = '6' as u32;
/// ESC # 8: screen alignment pattern (DECALN).
pub const DECALN_ALIGNMENT: u32 = '8' as u32;

// Character-set designators after ESC ( ) * +.

/// ASCII / Latin-1.
pub const CHARSET_ASCII: u32 = 'B' as u32;
/// United Kingdom (# → £).
pub const CHARSET_UK: u32 = 'A' as u32;
/// DEC Special Graphics (box drawing).
pub const CHARSET_DEC_GRAPHICS: u32 = '0' as u32;

// OSC framing.

/// OSC numbers that set the window title.
pub const OSC_TITLE_AND_ICON: u32 = 0;
pub const OSC_ICON: u32 = 1;
pub const OSC_TITLE: u32 = 2;
/// OSC 4: set a 256-color palette entry.
pub const OSC_SET_PALETTE: u32 = 4;
