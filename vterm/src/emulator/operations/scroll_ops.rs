// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Explicit scrolling (SU/SD).

use super::super::{CsiParams, VtEmulator};

/// SU: scroll the region up n rows.
pub fn scroll_up(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.scroll_up(params.nth_non_zero(0).into());
}

/// SD: scroll the region down n rows.
pub fn scroll_down(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.scroll_down(params.nth_non_zero(0).into());
}
