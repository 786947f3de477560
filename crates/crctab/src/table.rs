//! Lookup table generation.
//!
//! A CRC table maps every possible leading byte to the register remainder
//! left after shifting that byte through the polynomial eight times. One
//! table serves one `(polynomial, shift)` pair; the initial value, final XOR
//! and reflection flags play no part in it.
//!
//! | Shift | Seed for index `i` | Per-bit step |
//! |-------|--------------------|--------------|
//! | Left  | `i << (W - 8)` | top bit set: `(c << 1) ^ poly`, else `c << 1` |
//! | Right | `i` | low bit set: `(c >> 1) ^ poly`, else `c >> 1` |
//!
//! A [`Table`] remembers the parameters it was generated from and has no
//! mutating API. Rebuilding is the only way to get a different table, so a
//! fold can never observe a half-written or mismatched table.

// SAFETY: Table lookups index a `[W; 256]` with a `u8`, so every index is in
// bounds. Clippy cannot prove this, but the bound is statically guaranteed.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use traits::CrcWord;

use crate::params::Shift;

/// Compute a single table entry by shifting `index` through `polynomial`.
#[inline]
#[must_use]
pub fn table_entry<W: CrcWord>(polynomial: W, shift: Shift, index: u8) -> W {
  match shift {
    Shift::Left => {
      let mut crc = W::from_high_byte(index);
      for _ in 0..8 {
        crc = if crc.msb_set() {
          crc.shl1() ^ polynomial
        } else {
          crc.shl1()
        };
      }
      crc
    }
    Shift::Right => {
      let mut crc = W::from_low_byte(index);
      for _ in 0..8 {
        crc = if crc.lsb_set() {
          crc.shr1() ^ polynomial
        } else {
          crc.shr1()
        };
      }
      crc
    }
  }
}

/// 256-entry CRC lookup table bound to its generating parameters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Table<W> {
  entries: [W; 256],
  polynomial: W,
  shift: Shift,
}

impl<W: CrcWord> Table<W> {
  /// Build the table for `polynomial` shifting in direction `shift`.
  ///
  /// Total over every input: all arithmetic wraps at the register width.
  #[must_use]
  pub fn build(polynomial: W, shift: Shift) -> Self {
    let mut entries = [W::ZERO; 256];
    for (slot, index) in entries.iter_mut().zip(0..=u8::MAX) {
      *slot = table_entry(polynomial, shift, index);
    }
    Self {
      entries,
      polynomial,
      shift,
    }
  }

  /// Polynomial this table was generated from.
  #[inline]
  #[must_use]
  pub fn polynomial(&self) -> W {
    self.polynomial
  }

  /// Shift direction this table was generated for.
  #[inline]
  #[must_use]
  pub fn shift(&self) -> Shift {
    self.shift
  }

  /// All 256 entries, indexed by leading byte.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[W; 256] {
    &self.entries
  }

  /// Entry for leading byte `index`.
  #[inline(always)]
  #[must_use]
  pub fn get(&self, index: u8) -> W {
    self.entries[usize::from(index)]
  }
}

impl<W: CrcWord> fmt::Debug for Table<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Table")
      .field("polynomial", &format_args!("{:#x}", self.polynomial))
      .field("shift", &self.shift)
      .field("len", &self.entries.len())
      .finish()
  }
}

/// Build a lookup table. Equivalent to [`Table::build`].
#[inline]
#[must_use]
pub fn build_table<W: CrcWord>(polynomial: W, shift: Shift) -> Table<W> {
  Table::build(polynomial, shift)
}
