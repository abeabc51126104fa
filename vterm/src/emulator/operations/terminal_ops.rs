// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole-terminal operations: reset, identity reports, window ops, DEC line
//! attributes.

use super::super::{CsiParams, VtEmulator,
                   protocols::csi_codes::{DA_RESPONSE, WINDOW_OP_RESIZE}};
use crate::screen::LineProperty;

/// RIS: reset the terminal to its initial state. The window title and the
/// log callback survive; everything else returns to defaults.
pub fn reset(emulator: &mut VtEmulator) {
    emulator.screen.reset();
    emulator.app_cursor_keys = false;
}

/// DA / DECID: the engine performs no I/O, so the identity response is
/// reported through the log callback instead of being written anywhere.
pub fn report_identity(emulator: &mut VtEmulator) {
    emulator.log(DA_RESPONSE);
}

/// `CSI … t` window manipulation. Only op 8 (`CSI 8 ; rows ; cols t`,
/// resize the text area) is honored; everything else is consumed.
pub fn window_op(emulator: &mut VtEmulator, params: &CsiParams) {
    match params.nth_or(0, 0) {
        WINDOW_OP_RESIZE => {
            let rows = usize::from(params.nth_or(1, 0));
            let cols = usize::from(params.nth_or(2, 0));
            if let Err(error) = emulator.screen.set_screen_size(rows, cols) {
                tracing::warn!(%error, rows, cols, "CSI 8t: resize refused");
            }
        }
        op => {
            tracing::debug!(op, "window op ignored");
        }
    }
}

/// `ESC # 3` / `ESC # 4`: mark the cursor row double-height.
pub fn mark_line_double_height(emulator: &mut VtEmulator) {
    emulator
        .screen
        .set_line_property(LineProperty::DOUBLE_HEIGHT, true);
}

/// `ESC # 6`: mark the cursor row double-width.
pub fn mark_line_double_width(emulator: &mut VtEmulator) {
    emulator
        .screen
        .set_line_property(LineProperty::DOUBLE_WIDTH, true);
}

/// `ESC # 5`: back to single width/height.
pub fn mark_line_single_width(emulator: &mut VtEmulator) {
    emulator
        .screen
        .set_line_property(LineProperty::DOUBLE_WIDTH, false);
    emulator
        .screen
        .set_line_property(LineProperty::DOUBLE_HEIGHT, false);
}
