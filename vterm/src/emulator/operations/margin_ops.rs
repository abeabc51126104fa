// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scroll-region margins.

use super::super::{CsiParams, VtEmulator};

/// DECSTBM: set the scroll region. Parameters are 1-based and inclusive;
/// the defaults select the whole screen.
pub fn set_margins(emulator: &mut VtEmulator, params: &CsiParams) {
    let lines = emulator.screen.lines() as u16;
    let top = usize::from(params.nth_non_zero(0)) - 1;
    // A missing or zero second parameter means "the last line".
    let bottom = usize::from(params.nth_opt(1).filter(|v| *v != 0).unwrap_or(lines)) - 1;
    emulator.screen.set_margins(top, bottom);
}
