//! Optional diagnostics for kernel selection.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! explainable/debuggable kernel selection without affecting normal builds.

use traits::CrcWord;

use crate::{
  config::{self, Force},
  engine::Crc,
  params::Shift,
};

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// A forced mode was active.
  Forced,
  /// Normal auto selection.
  Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionDiag {
  pub width: u32,
  pub len: usize,
  pub shift: Shift,
  pub reflect_in: bool,
  pub reflect_out: bool,
  pub reason: SelectionReason,
  pub force: Force,
  pub selected_kernel: &'static str,
}

/// Diagnose which kernel `crc.checksum()` runs for a `len`-byte buffer.
#[must_use]
pub fn select<W: CrcWord>(crc: &Crc<W>, len: usize) -> SelectionDiag {
  let force = config::get().force;
  let params = crc.params();
  SelectionDiag {
    width: W::BITS,
    len,
    shift: params.shift,
    reflect_in: params.reflect_in,
    reflect_out: params.reflect_out,
    reason: match force {
      Force::Auto => SelectionReason::Auto,
      Force::Reference | Force::Table => SelectionReason::Forced,
    },
    force,
    selected_kernel: force.kernel_name(),
  }
}
