// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Select Graphic Rendition: colors and text styles for subsequent
//! characters.

use super::super::{CsiParams, VtEmulator, protocols::csi_codes};
use crate::cell::{CharacterColor, Rendition};

/// SGR (`CSI m`): walk the parameters, applying each in order. An empty
/// parameter list means reset. The 38/48 extensions consume their
/// sub-parameters (`5;N` indexed, `2;R;G;B` direct).
pub fn set_graphics_rendition(emulator: &mut VtEmulator, params: &CsiParams) {
    if params.is_empty() {
        emulator.screen.reset_all_renditions();
        return;
    }

    let values: Vec<u16> = params.iter().collect();
    let mut i = 0;
    while i < values.len() {
        let param = values[i];
        match param {
            csi_codes::SGR_FG_EXTENDED | csi_codes::SGR_BG_EXTENDED => {
                let consumed = apply_extended_color(emulator, &values[i..]);
                if consumed == 0 {
                    tracing::warn!(param, "SGR extended color: malformed sub-parameters");
                    return;
                }
                i += consumed;
            }
            _ => {
                apply_sgr_param(emulator, param);
                i += 1;
            }
        }
    }
}

fn apply_sgr_param(emulator: &mut VtEmulator, param: u16) {
    let screen = &mut emulator.screen;
    match param {
        csi_codes::SGR_RESET => screen.reset_all_renditions(),
        csi_codes::SGR_BOLD => screen.set_rendition(Rendition::BOLD),
        csi_codes::SGR_DIM => screen.set_foreground_dim(true),
        csi_codes::SGR_ITALIC => screen.set_rendition(Rendition::ITALIC),
        csi_codes::SGR_UNDERLINE => screen.set_rendition(Rendition::UNDERLINE),
        csi_codes::SGR_BLINK => screen.set_rendition(Rendition::BLINK),
        csi_codes::SGR_REVERSE => screen.set_rendition(Rendition::REVERSE),
        csi_codes::SGR_RESET_BOLD_DIM => {
            screen.reset_rendition(Rendition::BOLD);
            screen.set_foreground_dim(false);
        }
        csi_codes::SGR_RESET_ITALIC => screen.reset_rendition(Rendition::ITALIC),
        csi_codes::SGR_RESET_UNDERLINE => screen.reset_rendition(Rendition::UNDERLINE),
        csi_codes::SGR_RESET_BLINK => screen.reset_rendition(Rendition::BLINK),
        csi_codes::SGR_RESET_REVERSE => screen.reset_rendition(Rendition::REVERSE),
        csi_codes::SGR_FG_BLACK..=csi_codes::SGR_FG_WHITE => {
            let index = (param - csi_codes::SGR_FG_BLACK) as u8;
            screen.set_foreground_color(CharacterColor::system(index, false));
        }
        csi_codes::SGR_FG_DEFAULT => {
            screen.set_foreground_color(CharacterColor::DEFAULT_FOREGROUND);
        }
        csi_codes::SGR_BG_BLACK..=csi_codes::SGR_BG_WHITE => {
            let index = (param - csi_codes::SGR_BG_BLACK) as u8;
            screen.set_background_color(CharacterColor::system(index, false));
        }
        csi_codes::SGR_BG_DEFAULT => {
            screen.set_background_color(CharacterColor::DEFAULT_BACKGROUND);
        }
        csi_codes::SGR_FG_BRIGHT_BLACK..=csi_codes::SGR_FG_BRIGHT_WHITE => {
            let index = (param - csi_codes::SGR_FG_BRIGHT_BLACK) as u8;
            screen.set_foreground_color(CharacterColor::system(index, true));
        }
        csi_codes::SGR_BG_BRIGHT_BLACK..=csi_codes::SGR_BG_BRIGHT_WHITE => {
            let index = (param - csi_codes::SGR_BG_BRIGHT_BLACK) as u8;
            screen.set_background_color(CharacterColor::system(index, true));
        }
        other => {
            tracing::debug!(param = other, "unsupported SGR parameter ignored");
        }
    }
}

/// Apply `38;…` / `48;…`. Returns the number of parameters consumed, 0 on a
/// malformed tail.
fn apply_extended_color(emulator: &mut VtEmulator, tail: &[u16]) -> usize {
    let is_foreground = tail[0] == csi_codes::SGR_FG_EXTENDED;
    let (color, consumed) = match tail.get(1) {
        Some(&csi_codes::SGR_EXTENDED_INDEXED) => {
            let Some(&index) = tail.get(2) else { return 0 };
            (CharacterColor::indexed_256((index & 0xFF) as u8), 3)
        }
        Some(&csi_codes::SGR_EXTENDED_RGB) => {
            let (Some(&r), Some(&g), Some(&b)) = (tail.get(2), tail.get(3), tail.get(4))
            else {
                return 0;
            };
            (
                CharacterColor::rgb((r & 0xFF) as u8, (g & 0xFF) as u8, (b & 0xFF) as u8),
                5,
            )
        }
        _ => return 0,
    };
    if is_foreground {
        emulator.screen.set_foreground_color(color);
    } else {
        emulator.screen.set_background_color(color);
    }
    consumed
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::super::VtEmulator;
    use crate::cell::{CharacterColor, Rendition};

    fn feed(emulator: &mut VtEmulator, text: &str) {
        emulator.receive_chars(text.chars().map(u32::from));
    }

    fn last_cell(emulator: &VtEmulator) -> crate::Cell {
        let line = &emulator.screen().screen_lines()[0];
        line[line.len() - 1]
    }

    #[test]
    fn test_reset_after_color_restores_defaults() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        feed(&mut emulator, "\x1b[31m\x1b[0mX");
        let cell = last_cell(&emulator);
        assert_eq!(cell.fg, CharacterColor::DEFAULT_FOREGROUND);
        assert_eq!(cell.bg, CharacterColor::DEFAULT_BACKGROUND);
        assert_eq!(cell.rendition, Rendition::empty());
    }

    #[test]
    fn test_styles_accumulate_and_reset_individually() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        feed(&mut emulator, "\x1b[1;4;5;7ma");
        let cell = last_cell(&emulator);
        assert!(cell.rendition.contains(
            Rendition::BOLD | Rendition::UNDERLINE | Rendition::BLINK | Rendition::REVERSE
        ));

        feed(&mut emulator, "\x1b[24;25mb");
        let cell = last_cell(&emulator);
        assert!(cell.rendition.contains(Rendition::BOLD));
        assert!(!cell.rendition.contains(Rendition::UNDERLINE));
        assert!(!cell.rendition.contains(Rendition::BLINK));
    }

    #[test]
    fn test_extended_colors() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        feed(&mut emulator, "\x1b[38;5;196ma");
        assert_eq!(last_cell(&emulator).fg, CharacterColor::indexed_256(196));

        feed(&mut emulator, "\x1b[48;2;10;20;30mb");
        assert_eq!(last_cell(&emulator).bg, CharacterColor::rgb(10, 20, 30));

        // Bright system colors land in the intense row.
        feed(&mut emulator, "\x1b[97mc");
        assert_eq!(last_cell(&emulator).fg, CharacterColor::system(7, true));
    }

    #[test]
    fn test_dim_is_carried_on_the_foreground_color() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        feed(&mut emulator, "\x1b[31;2ma");
        let mut expected = CharacterColor::system(1, false);
        expected.set_dim(true);
        assert_eq!(last_cell(&emulator).fg, expected);

        feed(&mut emulator, "\x1b[22mb");
        assert_eq!(last_cell(&emulator).fg, CharacterColor::system(1, false));
    }

    #[test]
    fn test_bare_sgr_is_reset() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        feed(&mut emulator, "\x1b[33m\x1b[ma");
        assert_eq!(last_cell(&emulator).fg, CharacterColor::DEFAULT_FOREGROUND);
    }
}
