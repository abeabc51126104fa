// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Intern pool for multi-code-point cells (base character + combining marks).
//!
//! A cell is a fixed-size POD; the rare cell that carries combining marks
//! pays one indirection instead: its `code_point` field holds an index into
//! this table and its rendition carries
//! [`EXTENDED_CHAR`](crate::Rendition::EXTENDED_CHAR). Entries are
//! append-only and deduplicated by content, so identical sequences share one
//! index and the table stays small (a few hundred entries in practice).

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// An interned code-point sequence: base character plus combining marks.
pub type ExtendedCharSeq = SmallVec<[u32; 4]>;

/// Content-addressed table of extended character sequences, owned by one
/// `Screen` and shared by both of its buffers. Grows monotonically until the
/// screen is dropped.
#[derive(Debug, Default)]
pub struct ExtendedCharTable {
    entries: Vec<ExtendedCharSeq>,
    dedup: FxHashMap<ExtendedCharSeq, u32>,
}

impl ExtendedCharTable {
    /// Intern `seq`, returning the index of the (possibly pre-existing)
    /// entry with that exact content.
    pub fn intern(&mut self, seq: &[u32]) -> u32 {
        if let Some(&index) = self.dedup.get(seq) {
            return index;
        }
        let index = self.entries.len() as u32;
        let owned: ExtendedCharSeq = SmallVec::from_slice(seq);
        self.entries.push(owned.clone());
        self.dedup.insert(owned, index);
        index
    }

    /// Sequence stored at `index`; empty for an index never handed out.
    #[must_use]
    pub fn get(&self, index: u32) -> &[u32] {
        self.entries
            .get(index as usize)
            .map_or(&[], SmallVec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
