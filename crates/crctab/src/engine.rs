//! Table-driven CRC engine.
//!
//! [`Crc<W>`] owns a parameter set and the lookup table generated from it.
//! The table is built once in [`Crc::new`]; afterwards the engine is
//! immutable and any number of buffers can be folded through it, from any
//! number of threads.
//!
//! # Fold
//!
//! For each input byte `b` (bit-reversed first if `reflect_in`):
//!
//! | Shift | Width | Register update |
//! |-------|-------|-----------------|
//! | Left  | 8 | `T[c ^ b]` |
//! | Left  | 16, 32 | `(c << 8) ^ T[top_byte(c) ^ b]` |
//! | Right | 8 | `T[c ^ b] ^ c` |
//! | Right | 16, 32 | `T[low_byte(c) ^ b] ^ (c >> 8)` |
//!
//! At 8 bits the right-shift update folds the whole previous register back
//! in ([`CrcWord::right_carry`]), so it is not the mirror image of the
//! left-shift update and [`CrcParams::to_right_shift`] has no 8-bit form.
//! After the last byte the register is XORed with `xor_out` and, if
//! `reflect_out`, bit-reversed.

use traits::{CrcWord, ParamsError};

use crate::{
  catalog,
  config::{self, Force},
  params::{CrcParams, CrcSpec, Shift},
  reference,
  table::Table,
};

/// CRC engine for a register of width `W`.
///
/// # Examples
///
/// ```
/// use crctab::{Crc, CrcParams};
///
/// let crc = Crc::new(CrcParams::<u32>::CRC32_ISO_HDLC);
/// assert_eq!(crc.checksum(b"123456789"), 0xCBF4_3926);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crc<W: CrcWord> {
  params: CrcParams<W>,
  table: Table<W>,
}

/// 8-bit CRC engine.
pub type Crc8 = Crc<u8>;
/// 16-bit CRC engine.
pub type Crc16 = Crc<u16>;
/// 32-bit CRC engine.
pub type Crc32 = Crc<u32>;

impl<W: CrcWord> Crc<W> {
  /// Build the lookup table for `params` and bind the two together.
  #[must_use]
  pub fn new(params: CrcParams<W>) -> Self {
    let table = Table::build(params.polynomial, params.shift);
    Self { params, table }
  }

  /// Build an engine from a width-erased catalogue descriptor.
  ///
  /// # Errors
  ///
  /// [`ParamsError::WidthMismatch`] if `spec.width` is not `W::BITS`, or
  /// [`ParamsError::ValueOutOfRange`] if a field does not fit in `W`.
  pub fn from_spec(spec: &CrcSpec) -> Result<Self, ParamsError> {
    CrcParams::try_from(spec).map(Self::new)
  }

  /// Build an engine for a catalogued algorithm.
  ///
  /// ```
  /// use crctab::Crc16;
  ///
  /// let xmodem = Crc16::from_name("CRC-16/XMODEM")?;
  /// assert_eq!(xmodem.checksum(b"123456789"), 0x31C3);
  /// # Ok::<(), traits::ParamsError>(())
  /// ```
  ///
  /// # Errors
  ///
  /// [`ParamsError::UnknownAlgorithm`] if no catalogue entry matches `name`,
  /// or any error from [`from_spec`](Self::from_spec).
  pub fn from_name(name: &str) -> Result<Self, ParamsError> {
    let spec = catalog::find(name).ok_or(ParamsError::UnknownAlgorithm)?;
    Self::from_spec(spec)
  }

  /// Parameters this engine was built from.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams<W> {
    &self.params
  }

  /// Lookup table generated from [`params`](Self::params).
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Table<W> {
    &self.table
  }

  /// Compute the CRC of `data`.
  ///
  /// An empty buffer yields `initial ^ xor_out`, reflected if `reflect_out`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> W {
    self.checksum_with(config::get().force, data)
  }

  /// Compute the CRC of `data` with the kernel `force` selects.
  #[inline]
  pub(crate) fn checksum_with(&self, force: Force, data: &[u8]) -> W {
    match force {
      Force::Reference => reference::checksum(&self.params, data),
      Force::Auto | Force::Table => self.params.finish(self.update(self.params.initial, data)),
    }
  }

  /// Name of the kernel [`checksum`](Self::checksum) runs in this process.
  #[must_use]
  pub fn backend_name() -> &'static str {
    config::get().force.kernel_name()
  }

  /// Fold `data` through the table, returning the raw register.
  #[inline]
  pub(crate) fn update(&self, mut crc: W, data: &[u8]) -> W {
    let table = &self.table;
    match self.params.shift {
      Shift::Left => {
        for &byte in data {
          let byte = self.params.input_byte(byte);
          crc = crc.shl8() ^ table.get(crc.high_byte() ^ byte);
        }
      }
      Shift::Right => {
        for &byte in data {
          let byte = self.params.input_byte(byte);
          crc = table.get(crc.low_byte() ^ byte) ^ crc.right_carry();
        }
      }
    }
    crc
  }
}
