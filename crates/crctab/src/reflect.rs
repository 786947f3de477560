//! Bit reversal helpers.
//!
//! Reflection maps bit `i` of a `W`-bit value to bit `W - 1 - i`. Input
//! reflection always works on single bytes, independent of the CRC width;
//! output reflection works on the full register.

use traits::CrcWord;

/// Reverse the bit order of a byte.
#[inline]
#[must_use]
pub const fn reverse8(x: u8) -> u8 {
  x.reverse_bits()
}

/// Reverse the bit order of a 16-bit value.
#[inline]
#[must_use]
pub const fn reverse16(x: u16) -> u16 {
  x.reverse_bits()
}

/// Reverse the bit order of a 32-bit value.
#[inline]
#[must_use]
pub const fn reverse32(x: u32) -> u32 {
  x.reverse_bits()
}

/// Reverse the bit order of a register of any supported width.
#[inline]
#[must_use]
pub fn reflect<W: CrcWord>(x: W) -> W {
  x.reflect()
}
