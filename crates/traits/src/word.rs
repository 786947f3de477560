//! Register word abstraction for width-generic CRC algorithms.
//!
//! A CRC register is an unsigned integer of the checksum width. The table
//! builder and the fold loop only need a handful of operations on it: single
//! bit and whole byte shifts, byte extraction at either end, a top/bottom bit
//! test, bit reversal, and the carry term of the right-shift update.
//! [`CrcWord`] captures exactly that set so one algorithm can be instantiated
//! for every supported width.
//!
//! | Type | `BITS` | Typical variants |
//! |------|--------|------------------|
//! | `u8` | 8 | CRC-8/MAXIM-DOW, CRC-8/SMBUS |
//! | `u16` | 16 | CRC-16/MODBUS, CRC-16/XMODEM |
//! | `u32` | 32 | CRC-32/ISO-HDLC, CRC-32/ISCSI |
//!
//! All operations wrap modulo `2^BITS`; none of them can panic. In
//! particular, a left byte shift on an 8-bit register yields zero instead of
//! overflowing the shift amount.

use core::{
  fmt::{Debug, LowerHex, UpperHex},
  hash::Hash,
  ops::{BitXor, BitXorAssign},
};

mod sealed {
  pub trait Sealed {}
}

/// Unsigned integer usable as a CRC register.
///
/// Implemented for `u8`, `u16` and `u32`. The trait is sealed: CRC widths
/// above 32 bits are not supported.
pub trait CrcWord:
  sealed::Sealed
  + Copy
  + Eq
  + Hash
  + Debug
  + Default
  + LowerHex
  + UpperHex
  + BitXor<Output = Self>
  + BitXorAssign
  + Send
  + Sync
  + 'static
{
  /// Register width in bits.
  const BITS: u32;

  /// The all-zero register.
  const ZERO: Self;

  /// Zero-extend `byte` into the low byte of the register.
  #[must_use]
  fn from_low_byte(byte: u8) -> Self;

  /// Place `byte` in the most significant byte of the register.
  ///
  /// Identity on `u8`.
  #[must_use]
  fn from_high_byte(byte: u8) -> Self;

  /// Least significant byte.
  #[must_use]
  fn low_byte(self) -> u8;

  /// Most significant byte.
  #[must_use]
  fn high_byte(self) -> u8;

  /// Whether the most significant bit is set.
  #[must_use]
  fn msb_set(self) -> bool;

  /// Whether the least significant bit is set.
  #[must_use]
  fn lsb_set(self) -> bool;

  /// Shift left by one bit, discarding the top bit.
  #[must_use]
  fn shl1(self) -> Self;

  /// Shift right by one bit, discarding the bottom bit.
  #[must_use]
  fn shr1(self) -> Self;

  /// Shift left by one byte. Zero on `u8`.
  #[must_use]
  fn shl8(self) -> Self;

  /// Register bits XORed back in after a right-shift table lookup.
  ///
  /// `self >> 8` for 16 and 32-bit registers. An 8-bit register has no bits
  /// left after a byte shift, so the whole register is carried instead.
  #[must_use]
  fn right_carry(self) -> Self;

  /// Reverse the bit order (bit 0 ↔ bit `BITS - 1`).
  #[must_use]
  fn reflect(self) -> Self;

  /// Widen to `u64`.
  #[must_use]
  fn to_u64(self) -> u64;

  /// Narrow from `u64`, returning `None` if `value` does not fit.
  #[must_use]
  fn try_from_u64(value: u64) -> Option<Self>;
}

macro_rules! impl_crc_word {
  ($($t:ty),* $(,)?) => {$(
    impl sealed::Sealed for $t {}

    impl CrcWord for $t {
      const BITS: u32 = <$t>::BITS;
      const ZERO: Self = 0;

      #[inline(always)]
      fn from_low_byte(byte: u8) -> Self {
        <$t>::from(byte)
      }

      #[inline(always)]
      fn from_high_byte(byte: u8) -> Self {
        <$t>::from(byte) << (<$t>::BITS - 8)
      }

      #[inline(always)]
      #[allow(clippy::cast_possible_truncation)]
      fn low_byte(self) -> u8 {
        self as u8
      }

      #[inline(always)]
      #[allow(clippy::cast_possible_truncation)]
      fn high_byte(self) -> u8 {
        (self >> (<$t>::BITS - 8)) as u8
      }

      #[inline(always)]
      fn msb_set(self) -> bool {
        self & (1 << (<$t>::BITS - 1)) != 0
      }

      #[inline(always)]
      fn lsb_set(self) -> bool {
        self & 1 != 0
      }

      #[inline(always)]
      fn shl1(self) -> Self {
        self << 1
      }

      #[inline(always)]
      fn shr1(self) -> Self {
        self >> 1
      }

      #[inline(always)]
      fn shl8(self) -> Self {
        self.checked_shl(8).unwrap_or(0)
      }

      #[inline(always)]
      fn right_carry(self) -> Self {
        self.checked_shr(8).unwrap_or(self)
      }

      #[inline(always)]
      fn reflect(self) -> Self {
        self.reverse_bits()
      }

      #[inline(always)]
      fn to_u64(self) -> u64 {
        u64::from(self)
      }

      #[inline(always)]
      fn try_from_u64(value: u64) -> Option<Self> {
        <$t>::try_from(value).ok()
      }
    }
  )*};
}

impl_crc_word!(u8, u16, u32);
