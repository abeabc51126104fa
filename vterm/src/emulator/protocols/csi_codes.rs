// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Control Sequence Introducer (CSI) codes.
//!
//! CSI sequences follow the pattern `ESC [ parameters final_character`:
//! - optional private marker `?`
//! - zero or more decimal parameters separated by `;`
//! - a final character that selects the operation
//!
//! Examples:
//! - `ESC[2J` — clear the entire screen
//! - `ESC[1;5H` — move the cursor to row 1, column 5
//! - `ESC[31m` — red foreground
//! - `ESC[8;25;80t` — resize to 25×80

// Cursor movement.

/// CSI A: Cursor Up (CUU), n rows (default 1).
pub const CUU_CURSOR_UP: u32 = 'A' as u32;
/// CSI B: Cursor Down (CUD), n rows (default 1).
pub const CUD_CURSOR_DOWN: u32 = 'B' as u32;
/// CSI C: Cursor Forward (CUF), n columns (default 1).
pub const CUF_CURSOR_FORWARD: u32 = 'C' as u32;
/// CSI D: Cursor Backward (CUB), n columns (default 1).
pub const CUB_CURSOR_BACKWARD: u32 = 'D' as u32;
/// CSI E: Cursor Next Line (CNL): beginning of the line n rows down.
pub const CNL_CURSOR_NEXT_LINE: u32 = 'E' as u32;
/// CSI F: Cursor Previous Line (CPL): beginning of the line n rows up.
pub const CPL_CURSOR_PREV_LINE: u32 = 'F' as u32;
/// CSI G: Cursor Horizontal Absolute (CHA), 1-based column.
pub const CHA_CURSOR_COLUMN: u32 = 'G' as u32;
/// CSI H: Cursor Position (CUP), 1-based row;column (default 1;1).
pub const CUP_CURSOR_POSITION: u32 = 'H' as u32;
/// CSI f: Horizontal and Vertical Position (HVP), same as CUP.
pub const HVP_CURSOR_POSITION: u32 = 'f' as u32;
/// CSI d: Vertical Position Absolute (VPA), 1-based row.
pub const VPA_VERTICAL_POSITION: u32 = 'd' as u32;
/// CSI Z: Cursor Backward Tabulation (CBT), n tab stops.
pub const CBT_BACKWARD_TAB: u32 = 'Z' as u32;

// Erasing.

/// CSI J: Erase in Display (ED): 0 = to end, 1 = to beginning, 2 = all.
pub const ED_ERASE_DISPLAY: u32 = 'J' as u32;
/// CSI K: Erase in Line (EL): 0 = to end, 1 = to beginning, 2 = all.
pub const EL_ERASE_LINE: u32 = 'K' as u32;
/// CSI X: Erase Character (ECH), n cells blanked in place.
pub const ECH_ERASE_CHAR: u32 = 'X' as u32;

// Scrolling and margins.

/// CSI S: Scroll Up (SU), n rows (default 1).
pub const SU_SCROLL_UP: u32 = 'S' as u32;
/// CSI T: Scroll Down (SD), n rows (default 1).
pub const SD_SCROLL_DOWN: u32 = 'T' as u32;
/// CSI r: Set Top and Bottom Margins (DECSTBM), 1-based (default full).
pub const DECSTBM_SET_MARGINS: u32 = 'r' as u32;

// Line and character operations.

/// CSI L: Insert Line (IL).
pub const IL_INSERT_LINE: u32 = 'L' as u32;
/// CSI M: Delete Line (DL).
pub const DL_DELETE_LINE: u32 = 'M' as u32;
/// CSI @: Insert Character (ICH).
pub const ICH_INSERT_CHAR: u32 = '@' as u32;
/// CSI P: Delete Character (DCH).
pub const DCH_DELETE_CHAR: u32 = 'P' as u32;

// Modes, attributes, reports.

/// CSI h: Set Mode (SM); with `?`, DEC private set.
pub const SM_SET_MODE: u32 = 'h' as u32;
/// CSI l: Reset Mode (RM); with `?`, DEC private reset.
pub const RM_RESET_MODE: u32 = 'l' as u32;
/// CSI m: Select Graphic Rendition (SGR).
pub const SGR_SET_GRAPHICS: u32 = 'm' as u32;
/// CSI s: Save Cursor (SCP); with `?`, save private modes.
pub const SCP_SAVE_CURSOR: u32 = 's' as u32;
/// CSI u: Restore Cursor (RCP).
pub const RCP_RESTORE_CURSOR: u32 = 'u' as u32;
/// CSI c: Device Attributes (DA).
pub const DA_DEVICE_ATTRIBUTES: u32 = 'c' as u32;
/// CSI t: window manipulation; only op 8 (resize) is honored.
pub const WINDOW_OP: u32 = 't' as u32;

/// The `CSI t` operation selector for text-area resize.
pub const WINDOW_OP_RESIZE: u16 = 8;

/// Identity reported for DA: VT100 with advanced video option.
pub const DA_RESPONSE: &str = "\x1b[?1;2c";

// SGR parameters.

pub const SGR_RESET: u16 = 0;
pub const SGR_BOLD: u16 = 1;
pub const SGR_DIM: u16 = 2;
pub const SGR_ITALIC: u16 = 3;
pub const SGR_UNDERLINE: u16 = 4;
pub const SGR_BLINK: u16 = 5;
pub const SGR_REVERSE: u16 = 7;
pub const SGR_RESET_BOLD_DIM: u16 = 22;
pub const SGR_RESET_ITALIC: u16 = 23;
pub const SGR_RESET_UNDERLINE: u16 = 24;
pub const SGR_RESET_BLINK: u16 = 25;
pub const SGR_RESET_REVERSE: u16 = 27;
pub const SGR_FG_BLACK: u16 = 30;
pub const SGR_FG_WHITE: u16 = 37;
pub const SGR_FG_EXTENDED: u16 = 38;
pub const SGR_FG_DEFAULT: u16 = 39;
pub const SGR_BG_BLACK: u16 = 40;
pub const SGR_BG_WHITE: u16 = 47;
pub const SGR_BG_EXTENDED: u16 = 48;
pub const SGR_BG_DEFAULT: u16 = 49;
pub const SGR_FG_BRIGHT_BLACK: u16 = 90;
pub const SGR_FG_BRIGHT_WHITE: u16 = 97;
pub const SGR_BG_BRIGHT_BLACK: u16 = 100;
pub const SGR_BG_BRIGHT_WHITE: u16 = 107;

/// Sub-parameter after 38/48 selecting a 256-color index.
pub const SGR_EXTENDED_INDEXED: u16 = 5;
/// Sub-parameter after 38/48 selecting a direct RGB color.
pub const SGR_EXTENDED_RGB: u16 = 2;

// Standard (non-private) modes.

/// Insert/replace mode (IRM).
pub const MODE_INSERT: u16 = 4;
/// Line-feed/new-line mode (LNM).
pub const MODE_NEWLINE: u16 = 20;

// DEC private modes (after `CSI ?`).

/// DECCKM: application cursor keys.
pub const PRIVATE_MODE_APP_CURSOR_KEYS: u16 = 1;
/// DECSCNM: reverse-video screen.
pub const PRIVATE_MODE_REVERSE_SCREEN: u16 = 5;
/// DECOM: origin mode.
pub const PRIVATE_MODE_ORIGIN: u16 = 6;
/// DECAWM: auto-wrap.
pub const PRIVATE_MODE_AUTO_WRAP: u16 = 7;
/// DECTCEM: cursor visible.
pub const PRIVATE_MODE_CURSOR_VISIBLE: u16 = 25;
/// Alternate screen buffer (plain switch).
pub const PRIVATE_MODE_ALT_SCREEN: u16 = 47;
/// Alternate screen buffer, xterm 1047 variant.
pub const PRIVATE_MODE_ALT_SCREEN_1047: u16 = 1047;
/// Alternate screen buffer with cursor save/restore and clear-on-entry.
pub const PRIVATE_MODE_ALT_SCREEN_1049: u16 = 1049;

/// Upper bound on collected CSI parameters; extras are dropped.
pub const MAX_CSI_PARAMS: usize = 16;
