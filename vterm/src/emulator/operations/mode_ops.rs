// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mode setting (SM/RM), standard and DEC private, plus private-mode
//! save/restore (`CSI ? Pm s` / `CSI ? Pm r`).

use super::super::{CsiParams, VtEmulator, protocols::csi_codes};
use crate::screen::ScreenMode;

/// SM (`CSI h`) and RM (`CSI l`), applied per parameter.
pub fn set_mode(emulator: &mut VtEmulator, params: &CsiParams, private: bool, enable: bool) {
    // `CSI h` with no parameters is a no-op, not "mode 0".
    for mode in params.iter() {
        if private {
            set_private_mode(emulator, mode, enable);
        } else {
            set_standard_mode(emulator, mode, enable);
        }
    }
}

fn set_standard_mode(emulator: &mut VtEmulator, mode: u16, enable: bool) {
    let screen_mode = match mode {
        csi_codes::MODE_INSERT => ScreenMode::INSERT,
        csi_codes::MODE_NEWLINE => ScreenMode::NEWLINE,
        other => {
            tracing::warn!(mode = other, enable, "unhandled standard mode");
            return;
        }
    };
    if enable {
        emulator.screen.set_mode(screen_mode);
    } else {
        emulator.screen.reset_mode(screen_mode);
    }
}

fn set_private_mode(emulator: &mut VtEmulator, mode: u16, enable: bool) {
    match mode {
        csi_codes::PRIVATE_MODE_APP_CURSOR_KEYS => {
            emulator.app_cursor_keys = enable;
        }
        csi_codes::PRIVATE_MODE_REVERSE_SCREEN => {
            apply(emulator, ScreenMode::SCREEN, enable);
        }
        csi_codes::PRIVATE_MODE_ORIGIN => apply(emulator, ScreenMode::ORIGIN, enable),
        csi_codes::PRIVATE_MODE_AUTO_WRAP => apply(emulator, ScreenMode::WRAP, enable),
        csi_codes::PRIVATE_MODE_CURSOR_VISIBLE => {
            apply(emulator, ScreenMode::CURSOR, enable);
        }
        csi_codes::PRIVATE_MODE_ALT_SCREEN | csi_codes::PRIVATE_MODE_ALT_SCREEN_1047 => {
            if enable {
                emulator.screen.use_alternate_buffer();
            } else {
                if mode == csi_codes::PRIVATE_MODE_ALT_SCREEN_1047
                    && emulator.screen.is_using_alternate_buffer()
                {
                    emulator.screen.clear_without_saving();
                }
                emulator.screen.use_primary_buffer();
            }
        }
        csi_codes::PRIVATE_MODE_ALT_SCREEN_1049 => {
            if enable {
                emulator.screen.save_cursor();
                emulator.screen.use_alternate_buffer();
                emulator.screen.clear_without_saving();
            } else {
                emulator.screen.use_primary_buffer();
                emulator.screen.restore_cursor();
            }
        }
        other => {
            tracing::warn!(mode = other, enable, "unhandled private mode");
        }
    }
}

fn apply(emulator: &mut VtEmulator, mode: ScreenMode, enable: bool) {
    if enable {
        emulator.screen.set_mode(mode);
    } else {
        emulator.screen.reset_mode(mode);
    }
}

/// `CSI ? Pm s`: save the named private modes.
pub fn save_private_modes(emulator: &mut VtEmulator, params: &CsiParams) {
    for mode in params.iter() {
        if let Some(screen_mode) = private_screen_mode(mode) {
            emulator.screen.save_mode(screen_mode);
        }
    }
}

/// `CSI ? Pm r`: restore the named private modes.
pub fn restore_private_modes(emulator: &mut VtEmulator, params: &CsiParams) {
    for mode in params.iter() {
        if let Some(screen_mode) = private_screen_mode(mode) {
            emulator.screen.restore_mode(screen_mode);
        }
    }
}

fn private_screen_mode(mode: u16) -> Option<ScreenMode> {
    match mode {
        csi_codes::PRIVATE_MODE_REVERSE_SCREEN => Some(ScreenMode::SCREEN),
        csi_codes::PRIVATE_MODE_ORIGIN => Some(ScreenMode::ORIGIN),
        csi_codes::PRIVATE_MODE_AUTO_WRAP => Some(ScreenMode::WRAP),
        csi_codes::PRIVATE_MODE_CURSOR_VISIBLE => Some(ScreenMode::CURSOR),
        other => {
            tracing::debug!(mode = other, "private mode not in the save set");
            None
        }
    }
}
