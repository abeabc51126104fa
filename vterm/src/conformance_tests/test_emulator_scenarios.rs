// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scripted end-to-end scenarios with exact expected outputs.

use pretty_assertions::assert_eq;

use super::{feed, render_json, row_text};
use crate::{Rendition, VtEmulator};

#[test]
fn test_minimal_json_snapshot() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "ABC");
    assert_eq!(
        render_json(&emulator, b""),
        r#"{"x":3,"y":0,"lines":3,"columns":10,"title":"","style":{"r":0,"f":15658734,"b":3355443},"data":[[[{"s":"ABC"}]],[[{}]],[[{}]]]}"#
    );
}

#[test]
fn test_hidden_cursor_drops_x_and_reports_y_minus_one() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "ABC\x1b[?25l");
    let output = render_json(&emulator, b"");
    assert!(output.starts_with(r#"{"y":-1,"lines":"#), "got: {output}");
    assert!(!output.contains(r#""x":"#));
}

#[test]
fn test_resize_then_render() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "ABC");
    emulator.set_screen_size(2, 2).unwrap();
    assert_eq!(
        render_json(&emulator, b""),
        r#"{"x":1,"y":0,"lines":2,"columns":2,"title":"","style":{"r":0,"f":15658734,"b":3355443},"data":[[[{"s":"AB"}]],[[{}]]]}"#
    );
}

#[test]
fn test_extra_payload_trailer() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "ABC");
    let output = render_json(&emulator, b"\"plop\"");
    assert!(
        output.ends_with(r#""data":[[[{"s":"ABC"}]],[[{}]],[[{}]]],"extra":"plop"}"#),
        "got: {output}"
    );
}

#[test]
fn test_title_survives_into_json_and_updates() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "\x1b]2;Lib test\x07ABC");
    let output = render_json(&emulator, b"");
    assert!(output.contains(r#""title":"Lib test""#));

    feed(&mut emulator, "\x1b]0;retitled\x07");
    assert!(render_json(&emulator, b"").contains(r#""title":"retitled""#));
}

#[test]
fn test_csi_8_resize_window_op() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "\x1b[8;5;7t");
    assert_eq!(emulator.screen().lines(), 5);
    assert_eq!(emulator.screen().columns(), 7);

    // Oversized requests are refused and leave the screen untouched.
    feed(&mut emulator, "\x1b[8;100000;4t");
    assert_eq!(emulator.screen().lines(), 5);
}

#[test]
fn test_wrap_and_insert_mode_scenario() {
    // 4×8 screen: build the row "fghijklm" through insert mode, then watch
    // the next character wrap.
    let mut emulator = VtEmulator::new(4, 8).unwrap();
    feed(&mut emulator, "abc");
    feed(&mut emulator, "\x1b[B"); // down to row 1 (column preserved)
    feed(&mut emulator, "d");
    feed(&mut emulator, "\x1b[D"); // back over "d"
    feed(&mut emulator, "e"); // overwrites "d"
    feed(&mut emulator, "\x1b[G"); // column 1 (leftmost)
    feed(&mut emulator, "f");
    feed(&mut emulator, "\x1b[4h"); // insert mode
    feed(&mut emulator, "ghijklm");

    assert_eq!(row_text(&emulator, 1), "fghijklm");

    feed(&mut emulator, "n");
    assert_eq!(row_text(&emulator, 2), "n");
    assert_eq!(
        (emulator.screen().cursor_x(), emulator.screen().cursor_y()),
        (1, 2)
    );
}

#[test]
fn test_combining_mark_scenario() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "e\u{311}");

    let cell = emulator.screen().screen_lines()[0][0];
    assert!(cell.rendition.contains(Rendition::EXTENDED_CHAR));
    let table = emulator.screen().extended_char_table();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(cell.code_point), &[0x65, 0x311]);

    // Feeding the same cluster again must not add a second entry.
    feed(&mut emulator, "e\u{311}");
    assert_eq!(emulator.screen().extended_char_table().len(), 1);
}

#[test]
fn test_sgr_reset_after_color() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "\x1b[31m\x1b[0mX");
    let cell = emulator.screen().screen_lines()[0][0];
    assert_eq!(cell.fg, crate::CharacterColor::DEFAULT_FOREGROUND);
    assert_eq!(cell.bg, crate::CharacterColor::DEFAULT_BACKGROUND);
    assert_eq!(cell.rendition, Rendition::empty());
}

#[test]
fn test_scroll_region_session() {
    // A pager-style session: region on rows 2..=3 (1-based), content above
    // and below stays put while the region scrolls.
    let mut emulator = VtEmulator::new(4, 10).unwrap();
    feed(&mut emulator, "head\x1b[2;3r");
    feed(&mut emulator, "\x1b[2;1Haa\r\nbb\r\ncc\r\ndd");

    assert_eq!(row_text(&emulator, 0), "head");
    assert_eq!(row_text(&emulator, 1), "cc");
    assert_eq!(row_text(&emulator, 2), "dd");

    feed(&mut emulator, "\x1b[r\x1b[4;1Hfoot");
    assert_eq!(row_text(&emulator, 3), "foot");
    assert_eq!(emulator.screen().top_margin(), 0);
    assert_eq!(emulator.screen().bottom_margin(), 3);
}

#[test]
fn test_origin_mode_addressing_follows_margins() {
    let mut emulator = VtEmulator::new(10, 10).unwrap();
    feed(&mut emulator, "\x1b[3;8r\x1b[?6h");
    // CUP 1;1 under origin mode is the top margin.
    feed(&mut emulator, "\x1b[1;1HX");
    assert_eq!(row_text(&emulator, 2), "X");
    // Addressing past the region clamps to the bottom margin.
    feed(&mut emulator, "\x1b[99;1HY");
    assert_eq!(row_text(&emulator, 7), "Y");
}
