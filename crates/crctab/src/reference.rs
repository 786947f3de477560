//! Bitwise reference implementation.
//!
//! This is the canonical "source of truth" for CRC computation. It processes
//! one bit at a time with no lookup table, so it directly mirrors the
//! polynomial-division definition:
//!
//! - **Left**: each (optionally reflected) byte is XORed into the top of the
//!   register, then the register is shifted left eight times, XORing in the
//!   polynomial whenever a set bit falls off the top.
//! - **Right**: the low byte of the register XOR the input byte is shifted
//!   right eight times, XORing in the polynomial whenever a set bit falls off
//!   the bottom, and the result is XORed with the register's carry term
//!   (`c >> 8`, or the whole register at 8 bits).
//!
//! Final XOR and output reflection are identical to the table kernel. The
//! table kernel must produce identical results for every input; this module is
//! the oracle for that, and can be forced at runtime through
//! [`config`](crate::config).

use traits::CrcWord;

use crate::params::{CrcParams, Shift};

/// Fold `data` one bit at a time, returning the raw register (no final XOR).
#[must_use]
pub fn update<W: CrcWord>(params: &CrcParams<W>, mut crc: W, data: &[u8]) -> W {
  let poly = params.polynomial;
  match params.shift {
    Shift::Left => {
      for &byte in data {
        crc ^= W::from_high_byte(params.input_byte(byte));
        for _ in 0..8 {
          crc = if crc.msb_set() { crc.shl1() ^ poly } else { crc.shl1() };
        }
      }
    }
    Shift::Right => {
      for &byte in data {
        let mut remainder = W::from_low_byte(crc.low_byte() ^ params.input_byte(byte));
        for _ in 0..8 {
          remainder = if remainder.lsb_set() {
            remainder.shr1() ^ poly
          } else {
            remainder.shr1()
          };
        }
        crc = remainder ^ crc.right_carry();
      }
    }
  }
  crc
}

/// Bitwise CRC of `data` under `params`.
#[must_use]
pub fn checksum<W: CrcWord>(params: &CrcParams<W>, data: &[u8]) -> W {
  params.finish(update(params, params.initial, data))
}
