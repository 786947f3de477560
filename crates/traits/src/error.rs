//! Error types for CRC parameter handling.
//!
//! Folding bytes through a CRC table cannot fail. Errors only arise at the
//! edges: resolving an algorithm by name, or narrowing a width-erased
//! parameter set into a concrete register width.

use core::fmt;

/// Field of a CRC parameter set, used in [`ParamsError::ValueOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamsField {
  /// Generator polynomial.
  Polynomial,
  /// Initial register value.
  Initial,
  /// Final XOR mask.
  XorOut,
}

impl ParamsField {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Polynomial => "polynomial",
      Self::Initial => "initial value",
      Self::XorOut => "final xor",
    }
  }
}

/// A CRC parameter set could not be resolved or narrowed.
///
/// # Examples
///
/// ```
/// use traits::ParamsError;
///
/// let err = ParamsError::WidthMismatch { expected: 16, found: 32 };
/// assert_eq!(err.to_string(), "crc width mismatch: expected 16 bits, found 32");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// No catalogued algorithm has the requested name.
  UnknownAlgorithm,
  /// The parameter set describes a different register width.
  WidthMismatch {
    /// Width of the register being built, in bits.
    expected: u32,
    /// Width recorded in the parameter set, in bits.
    found: u8,
  },
  /// A parameter does not fit in the register width.
  ValueOutOfRange {
    /// The offending field.
    field: ParamsField,
  },
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnknownAlgorithm => f.write_str("unknown crc algorithm"),
      Self::WidthMismatch { expected, found } => {
        write!(f, "crc width mismatch: expected {expected} bits, found {found}")
      }
      Self::ValueOutOfRange { field } => write!(f, "crc {} does not fit the register width", field.as_str()),
    }
  }
}

impl core::error::Error for ParamsError {}
