// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI parameter collection and VT100-compliant extraction.
//!
//! Parameter handling rules:
//! - missing parameters default per command (usually to 1),
//! - a present-but-zero parameter means 1 for count-like commands,
//! - each parameter saturates at 16 bits,
//! - at most [`MAX_CSI_PARAMS`] parameters are collected; extras are
//!   dropped.
//!
//! [`MAX_CSI_PARAMS`]: super::protocols::csi_codes::MAX_CSI_PARAMS

use smallvec::SmallVec;

use super::protocols::csi_codes::MAX_CSI_PARAMS;

/// The numeric parameters of one CSI sequence.
#[derive(Debug, Clone, Default)]
pub struct CsiParams {
    values: SmallVec<[u16; MAX_CSI_PARAMS]>,
}

impl CsiParams {
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Fold a decimal digit into the parameter being collected.
    pub fn push_digit(&mut self, digit: u16) {
        if self.values.is_empty() {
            self.values.push(0);
        }
        if let Some(last) = self.values.last_mut() {
            *last = last.saturating_mul(10).saturating_add(digit);
        }
    }

    /// A `;` separator: start the next parameter.
    pub fn next_param(&mut self) {
        if self.values.is_empty() {
            self.values.push(0);
        }
        if self.values.len() < MAX_CSI_PARAMS {
            self.values.push(0);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The nth parameter, if present (0 counts as present).
    #[must_use]
    pub fn nth_opt(&self, n: usize) -> Option<u16> {
        self.values.get(n).copied()
    }

    /// The nth parameter with missing-or-zero mapped to 1.
    #[must_use]
    pub fn nth_non_zero(&self, n: usize) -> u16 {
        self.nth_opt(n).map_or(1, |v| v.max(1))
    }

    /// The nth parameter with a caller-chosen default for missing.
    #[must_use]
    pub fn nth_or(&self, n: usize, default: u16) -> u16 {
        self.nth_opt(n).unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.values.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn collect(digits: &str) -> CsiParams {
        let mut params = CsiParams::default();
        for ch in digits.chars() {
            if ch == ';' {
                params.next_param();
            } else {
                params.push_digit(ch.to_digit(10).unwrap() as u16);
            }
        }
        params
    }

    #[test]
    fn test_defaults() {
        let empty = CsiParams::default();
        assert_eq!(empty.nth_opt(0), None);
        assert_eq!(empty.nth_non_zero(0), 1);
        assert_eq!(empty.nth_or(1, 7), 7);

        // `ESC[0;5A`: zero means one, five stays five.
        let params = collect("0;5");
        assert_eq!(params.nth_non_zero(0), 1);
        assert_eq!(params.nth_non_zero(1), 5);
        assert_eq!(params.nth_opt(0), Some(0));
    }

    #[test]
    fn test_saturation_and_param_cap() {
        let params = collect("99999");
        assert_eq!(params.nth_opt(0), Some(u16::MAX));

        let mut params = CsiParams::default();
        for _ in 0..40 {
            params.push_digit(1);
            params.next_param();
        }
        assert_eq!(params.len(), MAX_CSI_PARAMS);
    }
}
