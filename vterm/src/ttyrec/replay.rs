// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The replay driver: frames → decoder → emulator → transcript.

use std::{cell::{Cell as StdCell, RefCell},
          rc::Rc};

use super::split_frame;
use crate::{BufferSink, LineSaver, SinkWriter, TranscriptPrefix, TranscriptWriter,
            Utf8Decoder, VecSink, VtEmulator, VtError, screen::ScrolledRows};

/// Screen size the replay emulator starts with; recordings that embed
/// `CSI 8 ; rows ; cols t` resize themselves.
pub const REPLAY_LINES: usize = 20;
pub const REPLAY_COLUMNS: usize = 80;

/// Replay a ttyrec byte stream and write the session transcript into
/// `sink`.
///
/// Lines scrolling off the replay screen stream out at their frame's
/// timestamp; after the last complete frame the rows still on screen (up to
/// and including the cursor row) are flushed at the final frame's
/// timestamp. Empty input produces empty output.
///
/// # Errors
///
/// * [`VtError::Malformed`] — the stream ended in a truncated frame. The
///   transcript of all complete frames has already been written to `sink`.
/// * [`VtError::OutOfMemory`] — the sink refused to grow.
pub fn transcript_from_ttyrec(
    input: &[u8],
    prefix: TranscriptPrefix,
    sink: &mut dyn BufferSink,
) -> Result<(), VtError> {
    let transcript = TranscriptWriter::new(prefix);
    let writer = Rc::new(RefCell::new(SinkWriter::new(VecSink::new())));
    let clock = Rc::new(StdCell::new(0i64));
    let failure: Rc<RefCell<Option<VtError>>> = Rc::new(RefCell::new(None));

    let saver: LineSaver = {
        let writer = Rc::clone(&writer);
        let clock = Rc::clone(&clock);
        let failure = Rc::clone(&failure);
        Box::new(move |rows: ScrolledRows<'_>| {
            let mut w = writer.borrow_mut();
            let result = transcript.write_rows(
                rows.lines,
                rows.properties,
                rows.extended,
                rows.start,
                rows.end,
                clock.get(),
                &mut w,
            );
            if let Err(error) = result {
                failure.borrow_mut().get_or_insert(error);
            }
        })
    };

    let mut emulator = VtEmulator::with_line_saver(REPLAY_LINES, REPLAY_COLUMNS, saver)?;
    let mut decoder = Utf8Decoder::new();

    let mut rest = input;
    let mut complete_frames = 0usize;
    let mut truncated = false;
    loop {
        match split_frame(rest) {
            Ok(None) => break,
            Ok(Some((header, payload, tail))) => {
                clock.set(i64::from(header.sec));
                decoder.decode(payload, |cp| emulator.receive_char(cp));
                complete_frames += 1;
                rest = tail;
            }
            Err(error) => {
                tracing::warn!(%error, after_frames = complete_frames, "ttyrec replay stopped");
                truncated = true;
                break;
            }
        }
    }
    decoder.end_decode(|cp| emulator.receive_char(cp));

    // Flush what is still on screen, at the last frame's clock.
    if complete_frames > 0 {
        let screen = emulator.screen();
        let mut w = writer.borrow_mut();
        transcript.write_rows(
            screen.screen_lines(),
            screen.line_properties(),
            screen.extended_char_table(),
            0,
            screen.cursor_y() + 1,
            clock.get(),
            &mut w,
        )?;
    }

    // The emulator owns the saver and with it the Rc clones.
    drop(emulator);

    if let Some(error) = failure.borrow_mut().take() {
        return Err(error);
    }

    let writer = Rc::try_unwrap(writer)
        .map_err(|_| VtError::InvalidArgument("replay writer still shared"))?
        .into_inner();
    let bytes = writer.finalize().into_bytes();

    let mut out = SinkWriter::new(sink);
    out.write(&bytes)?;
    out.finalize();

    if truncated {
        return Err(VtError::Malformed("truncated ttyrec frame"));
    }
    Ok(())
}
