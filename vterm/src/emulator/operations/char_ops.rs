// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Character and display erase/insert/delete operations.

use super::super::{CsiParams, VtEmulator};

/// ED: erase in display. 0 = cursor to end, 1 = beginning to cursor,
/// 2 = entire screen (3, the xterm scrollback variant, is folded into 2).
pub fn erase_in_display(emulator: &mut VtEmulator, params: &CsiParams) {
    match params.nth_or(0, 0) {
        0 => emulator.screen.clear_to_end_of_screen(),
        1 => emulator.screen.clear_to_beginning_of_screen(),
        2 | 3 => emulator.screen.clear_entire_screen(),
        other => tracing::warn!(selector = other, "CSI J: unknown erase selector"),
    }
}

/// EL: erase in line. 0 = cursor to end, 1 = beginning to cursor, 2 = all.
pub fn erase_in_line(emulator: &mut VtEmulator, params: &CsiParams) {
    match params.nth_or(0, 0) {
        0 => emulator.screen.clear_to_end_of_line(),
        1 => emulator.screen.clear_to_beginning_of_line(),
        2 => emulator.screen.clear_entire_line(),
        other => tracing::warn!(selector = other, "CSI K: unknown erase selector"),
    }
}

/// ECH: blank n cells at the cursor in place.
pub fn erase_chars(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.erase_chars(params.nth_non_zero(0).into());
}

/// ICH: insert n blank cells at the cursor.
pub fn insert_chars(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.insert_chars(params.nth_non_zero(0).into());
}

/// DCH: delete n cells at the cursor.
pub fn delete_chars(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.delete_chars(params.nth_non_zero(0).into());
}
