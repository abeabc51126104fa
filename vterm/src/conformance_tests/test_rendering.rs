// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Renderer conformance: exact bytes, well-formedness, idempotence.

use pretty_assertions::assert_eq;

use super::{feed, render_json};
use crate::{CappedSink, TranscriptPrefix, VGA_PALETTE, VecSink, VtEmulator, XTERM_PALETTE,
            ansi_render, json_render, transcript_from_ttyrec, transcript_render};

fn render_ansi(emulator: &VtEmulator) -> String {
    let mut sink = VecSink::new();
    ansi_render(
        emulator.window_title(),
        emulator.screen(),
        &VGA_PALETTE,
        &mut sink,
        b"",
    )
    .unwrap();
    String::from_utf8(sink.into_bytes()).unwrap()
}

#[test]
fn test_json_against_the_xterm_palette() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "\x1b]2;Lib test\x07ABC");
    let mut sink = VecSink::new();
    json_render(
        emulator.window_title(),
        emulator.screen(),
        &XTERM_PALETTE,
        &mut sink,
        b"",
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(sink.into_bytes()).unwrap(),
        r#"{"x":3,"y":0,"lines":3,"columns":10,"title":"Lib test","style":{"r":0,"f":16777215,"b":0},"data":[[[{"s":"ABC"}]],[[{}]],[[{}]]]}"#
    );
}

#[test]
fn test_json_runs_coalesce_on_the_masked_rendition_only() {
    // Reverse video is not part of the JSON run key: a reverse-only change
    // must not split the run.
    let mut emulator = VtEmulator::new(1, 10).unwrap();
    feed(&mut emulator, "a\x1b[7mb\x1b[27mc");
    let output = render_json(&emulator, b"");
    assert!(output.contains(r#""s":"abc""#), "got: {output}");
}

#[test]
fn test_ansi_splits_on_reverse_and_restates_style() {
    let mut emulator = VtEmulator::new(1, 10).unwrap();
    feed(&mut emulator, "a\x1b[7mb");
    // Reverse is a style change for the ANSI renderer, emitted as `;6`.
    assert_eq!(render_ansi(&emulator), "\x1b]\x07a\x1b[0;6mb\n");
}

#[test]
fn test_ansi_full_style_line() {
    let mut emulator = VtEmulator::new(1, 20).unwrap();
    feed(&mut emulator, "\x1b[1;3;4;5;31;44mstyled");
    assert_eq!(
        render_ansi(&emulator),
        "\x1b]\x07\x1b[0;1;3;4;5;38;2;178;24;24;48;2;24;24;178mstyled\n"
    );
}

#[test]
fn test_renderers_do_not_mutate_the_screen() {
    let mut emulator = VtEmulator::new(3, 12).unwrap();
    feed(&mut emulator, "x\x1b[31my\x1b[0mz\x1b]2;t\x07");

    let json_a = render_json(&emulator, b"");
    let ansi_a = render_ansi(&emulator);
    let mut transcript_a = VecSink::new();
    transcript_render(emulator.screen(), 0, 3, &mut transcript_a).unwrap();

    let json_b = render_json(&emulator, b"");
    let ansi_b = render_ansi(&emulator);
    let mut transcript_b = VecSink::new();
    transcript_render(emulator.screen(), 0, 3, &mut transcript_b).unwrap();

    assert_eq!(json_a, json_b);
    assert_eq!(ansi_a, ansi_b);
    assert_eq!(transcript_a.as_bytes(), transcript_b.as_bytes());
}

#[test]
fn test_allocation_refusal_propagates_out_of_memory() {
    let mut emulator = VtEmulator::new(3, 10).unwrap();
    feed(&mut emulator, "some content");
    let mut sink = CappedSink::with_cap(16);
    let error = json_render(
        emulator.window_title(),
        emulator.screen(),
        &VGA_PALETTE,
        &mut sink,
        b"",
    )
    .unwrap_err();
    assert_eq!(error.code(), -3);
}

#[test]
fn test_json_title_escaping() {
    let mut emulator = VtEmulator::new(1, 4).unwrap();
    feed(&mut emulator, "\x1b]2;a\"b\\c\x07");
    let output = render_json(&emulator, b"");
    assert!(output.contains(r#""title":"a\"b\\c""#), "got: {output}");
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["title"], "a\"b\\c");
}

#[test]
fn test_transcript_prefix_is_stable_per_frame_clock() {
    // One frame, fixed second: every logical line carries the same stamp.
    let mut input = Vec::new();
    input.extend_from_slice(&86_400u32.to_le_bytes()); // 1970-01-02 UTC
    input.extend_from_slice(&0u32.to_le_bytes());
    let payload = b"aa\r\nbb";
    input.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    input.extend_from_slice(payload);

    let mut sink = VecSink::new();
    transcript_from_ttyrec(&input, TranscriptPrefix::Datetime, &mut sink).unwrap();
    let text = String::from_utf8(sink.into_bytes()).unwrap();

    let stamps: Vec<&str> = text.lines().map(|l| &l[..20]).collect();
    assert_eq!(stamps.len(), 2);
    assert_eq!(stamps[0], stamps[1]);
}
