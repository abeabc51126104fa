// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement operations.

use super::super::{CsiParams, VtEmulator};

/// CUU: move the cursor up n rows.
pub fn cursor_up(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.cursor_up(params.nth_non_zero(0).into());
}

/// CUD: move the cursor down n rows.
pub fn cursor_down(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.cursor_down(params.nth_non_zero(0).into());
}

/// CUF: move the cursor forward n columns.
pub fn cursor_forward(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.cursor_right(params.nth_non_zero(0).into());
}

/// CUB: move the cursor back n columns.
pub fn cursor_backward(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.cursor_left(params.nth_non_zero(0).into());
}

/// CNL: beginning of the line n rows down.
pub fn cursor_next_line(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.cursor_down(params.nth_non_zero(0).into());
    emulator.screen.set_cursor_x(0);
}

/// CPL: beginning of the line n rows up.
pub fn cursor_prev_line(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.cursor_up(params.nth_non_zero(0).into());
    emulator.screen.set_cursor_x(0);
}

/// CHA: absolute column, 1-based.
pub fn cursor_column(emulator: &mut VtEmulator, params: &CsiParams) {
    let column = usize::from(params.nth_non_zero(0)) - 1;
    emulator.screen.set_cursor_x(column);
}

/// CUP / HVP: absolute row and column, both 1-based (default 1;1).
pub fn cursor_position(emulator: &mut VtEmulator, params: &CsiParams) {
    let row = usize::from(params.nth_non_zero(0)) - 1;
    let column = usize::from(params.nth_non_zero(1)) - 1;
    emulator.screen.set_cursor_yx(row, column);
}

/// VPA: absolute row, 1-based; the column is preserved.
pub fn vertical_position_absolute(emulator: &mut VtEmulator, params: &CsiParams) {
    let row = usize::from(params.nth_non_zero(0)) - 1;
    emulator.screen.set_cursor_y(row);
}

/// CBT: move back n tab stops.
pub fn backward_tab(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.backward_tab(params.nth_non_zero(0).into());
}
