// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line insertion and deletion.

use super::super::{CsiParams, VtEmulator};

/// IL: insert n blank rows at the cursor, inside the scroll region.
pub fn insert_lines(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.insert_lines(params.nth_non_zero(0).into());
}

/// DL: delete n rows at the cursor, inside the scroll region.
pub fn delete_lines(emulator: &mut VtEmulator, params: &CsiParams) {
    emulator.screen.delete_lines(params.nth_non_zero(0).into());
}
