// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! State-machine properties: save/restore round-trips, alternate-buffer
//! fidelity, and the screen invariants that must hold after any operation
//! mix.

use pretty_assertions::assert_eq;

use super::{feed, render_json, row_text};
use crate::{ScreenMode, VtEmulator};

#[test]
fn test_save_restore_cursor_roundtrip_through_escape_stream() {
    let mut emulator = VtEmulator::new(10, 20).unwrap();
    feed(&mut emulator, "\x1b[5;7H\x1b[1;31m\x1b(0\x1b7");
    feed(&mut emulator, "\x1b[H\x1b[0m\x1b(Bmoved elsewhere");
    feed(&mut emulator, "\x1b8");

    let screen = emulator.screen();
    assert_eq!((screen.cursor_x(), screen.cursor_y()), (6, 4));
    // Restored attributes and charset apply to the next character:
    // DEC graphics 'q' is a horizontal line, in red bold.
    feed(&mut emulator, "q");
    let cell = emulator.screen().screen_lines()[4][6];
    assert_eq!(cell.code_point, 0x2500);
    assert_eq!(cell.fg, crate::CharacterColor::system(1, false));
    assert!(cell.rendition.contains(crate::Rendition::BOLD));
}

#[test]
fn test_csi_save_restore_matches_esc_form() {
    let mut emulator = VtEmulator::new(5, 10).unwrap();
    feed(&mut emulator, "\x1b[3;4H\x1b[s\x1b[H\x1b[u");
    assert_eq!(
        (emulator.screen().cursor_x(), emulator.screen().cursor_y()),
        (3, 2)
    );
}

#[test]
fn test_alt_buffer_1047_restores_primary_byte_for_byte() {
    let mut emulator = VtEmulator::new(4, 12).unwrap();
    feed(&mut emulator, "primary\x1b[31mred");
    let before = render_json(&emulator, b"");

    feed(&mut emulator, "\x1b[0m\x1b[?1047h\x1b[Hfull screen app\x1b[2J");
    feed(&mut emulator, "\x1b[?1047l\x1b[31m");
    // Cursor and attributes are not part of the 1047 grid swap; realign
    // them so the snapshot comparison sees the grid alone.
    feed(&mut emulator, "\x1b[1;11H");
    assert_eq!(render_json(&emulator, b""), before);
}

#[test]
fn test_alt_buffer_1049_also_restores_cursor() {
    let mut emulator = VtEmulator::new(4, 12).unwrap();
    feed(&mut emulator, "abc\x1b[2;3H");
    feed(&mut emulator, "\x1b[?1049h");
    // The alternate starts cleared.
    assert!(emulator.screen().screen_lines().iter().all(Vec::is_empty));
    feed(&mut emulator, "\x1b[4;1Halt stuff");
    feed(&mut emulator, "\x1b[?1049l");

    assert_eq!(row_text(&emulator, 0), "abc");
    assert_eq!(
        (emulator.screen().cursor_x(), emulator.screen().cursor_y()),
        (2, 1)
    );
}

#[test]
fn test_1049_reentry_clears_stale_alternate_content() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "\x1b[?1049hstale\x1b[?1049l");
    feed(&mut emulator, "\x1b[?1049h");
    assert!(emulator.screen().screen_lines().iter().all(Vec::is_empty));
}

#[test]
fn test_invariants_hold_after_an_adversarial_mix() {
    // Clamp-heavy soup: oversized moves, zero counts, margin games,
    // resizes. Nothing here may push the cursor or rows out of bounds.
    let mut emulator = VtEmulator::new(6, 8).unwrap();
    let script = concat!(
        "\x1b[999;999H",
        "\x1b[0A\x1b[0B\x1b[0C\x1b[0D",
        "wrapwrapwrapwrap",
        "\x1b[3;2r\x1b[?6h\x1b[99;99H",
        "\x1b[5S\x1b[5T\x1b[9L\x1b[9M",
        "\x1b[99P\x1b[99@\x1b[99X",
        "\x1b[8;2;3t",
        "\x1b[?6lmore text after shrink",
        "\x1b[8;6;8t",
        "tail",
    );
    feed(&mut emulator, script);

    let screen = emulator.screen();
    assert!(screen.cursor_x() < screen.columns());
    assert!(screen.cursor_y() < screen.lines());
    assert!(screen.top_margin() <= screen.bottom_margin());
    assert!(screen.bottom_margin() < screen.lines());
    for line in screen.screen_lines() {
        assert!(line.len() <= screen.columns());
    }
    assert_eq!(screen.screen_lines().len(), screen.lines());
    assert_eq!(screen.line_properties().len(), screen.lines());
}

#[test]
fn test_mode_bits_are_independent() {
    let mut emulator = VtEmulator::new(4, 10).unwrap();
    feed(&mut emulator, "\x1b[4h\x1b[20h\x1b[?5h\x1b[?7l\x1b[?25l");
    let screen = emulator.screen();
    assert!(screen.get_mode(ScreenMode::INSERT));
    assert!(screen.get_mode(ScreenMode::NEWLINE));
    assert!(screen.get_mode(ScreenMode::SCREEN));
    assert!(!screen.get_mode(ScreenMode::WRAP));
    assert!(!screen.get_mode(ScreenMode::CURSOR));
    assert!(!screen.get_mode(ScreenMode::ORIGIN));

    feed(&mut emulator, "\x1b[4l\x1b[?5l");
    let screen = emulator.screen();
    assert!(!screen.get_mode(ScreenMode::INSERT));
    assert!(screen.get_mode(ScreenMode::NEWLINE));
    assert!(!screen.get_mode(ScreenMode::SCREEN));
}

#[test]
fn test_private_mode_save_restore() {
    let mut emulator = VtEmulator::new(4, 10).unwrap();
    feed(&mut emulator, "\x1b[?7l\x1b[?7s\x1b[?7h");
    assert!(emulator.screen().get_mode(ScreenMode::WRAP));
    feed(&mut emulator, "\x1b[?7r");
    assert!(!emulator.screen().get_mode(ScreenMode::WRAP));
}

#[test]
fn test_extended_char_table_never_duplicates() {
    let mut emulator = VtEmulator::new(4, 20).unwrap();
    // Interleave identical and distinct clusters.
    feed(&mut emulator, "e\u{311}a\u{30A}e\u{311}e\u{311}\u{301}a\u{30A}");
    let table = emulator.screen().extended_char_table();
    assert_eq!(table.len(), 3);
    for i in 0..table.len() {
        for j in (i + 1)..table.len() {
            assert_ne!(table.get(i as u32), table.get(j as u32));
        }
    }
}

#[test]
fn test_newline_mode_adds_carriage_return_to_lf() {
    let mut emulator = VtEmulator::new(4, 10).unwrap();
    feed(&mut emulator, "ab\ncd");
    assert_eq!(row_text(&emulator, 1), "  cd");

    feed(&mut emulator, "\x1b[20h");
    feed(&mut emulator, "\nef");
    assert_eq!(row_text(&emulator, 2), "ef");
}
