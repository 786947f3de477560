//! CRC algorithm parameters.
//!
//! Two representations are provided:
//!
//! - [`CrcParams<W>`]: the configuration the engine runs, typed by register
//!   width and carrying the shift direction.
//! - [`CrcSpec`]: a width-erased descriptor following the conventions of the
//!   [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Narrow it
//!   into `CrcParams<W>` with `TryFrom`.
//!
//! # Reflection and the final XOR
//!
//! The engine applies the final XOR *before* output reflection. The catalogue
//! model applies it after. The two orders agree whenever `xor_out` is a bit
//! palindrome (`0`, `!0`, ...), which covers nearly every published variant;
//! narrowing a [`CrcSpec`] reflects `xor_out` when `reflect_out` is set so
//! the result matches the catalogue for every descriptor.

use traits::{CrcWord, ParamsError, ParamsField};

/// Direction in which the CRC register shifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Shift {
  /// Toward the most significant bit. The polynomial is in normal form and
  /// each input byte enters at the top of the register.
  #[default]
  Left,
  /// Toward the least significant bit. The polynomial is in reflected form
  /// and each input byte enters at the bottom of the register.
  Right,
}

impl Shift {
  /// Lowercase name, `"left"` or `"right"`.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Left => "left",
      Self::Right => "right",
    }
  }
}

/// CRC configuration for a register of width `W`.
///
/// # Parameters
///
/// - `polynomial`: generator polynomial without the implicit high bit,
///   written in the bit order `shift` expects
/// - `initial`: seed for the register
/// - `xor_out`: mask applied once after all input is folded
/// - `reflect_in`: bit-reverse each input byte before folding
/// - `reflect_out`: bit-reverse the register after the final XOR
/// - `shift`: register shift direction
///
/// A `CrcParams` is a plain value. [`Crc::new`](crate::Crc::new) copies it
/// and builds the lookup table from it, so later edits to a caller's copy can
/// never desynchronize a table from the parameters it was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams<W> {
  /// Generator polynomial (without implicit high bit).
  pub polynomial: W,
  /// Initial value for the CRC register.
  pub initial: W,
  /// XOR value applied to the final register.
  pub xor_out: W,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect the register after the final XOR.
  pub reflect_out: bool,
  /// Register shift direction.
  pub shift: Shift,
}

/// 8-bit parameters.
pub type CrcParams8 = CrcParams<u8>;
/// 16-bit parameters.
pub type CrcParams16 = CrcParams<u16>;
/// 32-bit parameters.
pub type CrcParams32 = CrcParams<u32>;

impl<W: CrcWord> CrcParams<W> {
  /// Parameters with zero initial value, zero final XOR and no reflection.
  #[must_use]
  pub const fn new(polynomial: W, shift: Shift) -> Self {
    Self {
      polynomial,
      initial: W::ZERO,
      xor_out: W::ZERO,
      reflect_in: false,
      reflect_out: false,
      shift,
    }
  }

  /// Replace the initial register value.
  #[must_use]
  pub fn with_initial(self, initial: W) -> Self {
    Self { initial, ..self }
  }

  /// Replace the final XOR mask.
  #[must_use]
  pub fn with_xor_out(self, xor_out: W) -> Self {
    Self { xor_out, ..self }
  }

  /// Set input and output reflection.
  #[must_use]
  pub fn with_reflection(self, reflect_in: bool, reflect_out: bool) -> Self {
    Self {
      reflect_in,
      reflect_out,
      ..self
    }
  }

  /// Returns the polynomial in the opposite bit order.
  #[inline]
  #[must_use]
  pub fn polynomial_reflected(&self) -> W {
    self.polynomial.reflect()
  }

  /// Rewrite a reflected left-shift configuration as its right-shift twin.
  ///
  /// A left-shift CRC that reflects both input and output computes the same
  /// checksum as a right-shift CRC over unreflected bytes whose polynomial,
  /// initial value and final XOR are bit-reversed. Returns `None` unless
  /// `shift` is [`Shift::Left`] and both reflection flags are set.
  ///
  /// Always `None` for 8-bit registers: the 8-bit right-shift update
  /// `T[c ^ b] ^ c` carries the whole register forward and has no left-shift
  /// equivalent.
  ///
  /// ```
  /// use crctab::{Crc, CrcParams, Shift};
  ///
  /// let left = CrcParams::<u16>::CRC16_MODBUS;
  /// let right = left.to_right_shift().unwrap();
  /// assert_eq!(right.polynomial, 0xA001);
  /// assert_eq!(right.shift, Shift::Right);
  /// assert_eq!(Crc::new(right).checksum(b"123456789"), 0x4B37);
  /// ```
  #[must_use]
  pub fn to_right_shift(&self) -> Option<Self> {
    if W::BITS == 8 || self.shift != Shift::Left || !self.reflect_in || !self.reflect_out {
      return None;
    }
    Some(Self {
      polynomial: self.polynomial.reflect(),
      initial: self.initial.reflect(),
      xor_out: self.xor_out.reflect(),
      reflect_in: false,
      reflect_out: false,
      shift: Shift::Right,
    })
  }

  /// Apply input reflection to one byte.
  #[inline(always)]
  pub(crate) fn input_byte(&self, byte: u8) -> u8 {
    if self.reflect_in { byte.reverse_bits() } else { byte }
  }

  /// Final XOR, then output reflection.
  #[inline(always)]
  pub(crate) fn finish(&self, register: W) -> W {
    let crc = register ^ self.xor_out;
    if self.reflect_out { crc.reflect() } else { crc }
  }
}

impl CrcParams<u8> {
  /// CRC-8/MAXIM-DOW: 1-Wire, iButton.
  pub const CRC8_MAXIM: Self = Self {
    polynomial: 0x31,
    initial: 0x00,
    xor_out: 0x00,
    reflect_in: true,
    reflect_out: true,
    shift: Shift::Left,
  };
}

impl CrcParams<u16> {
  /// CRC-16/MODBUS: Modbus RTU framing.
  pub const CRC16_MODBUS: Self = Self {
    polynomial: 0x8005,
    initial: 0xFFFF,
    xor_out: 0x0000,
    reflect_in: true,
    reflect_out: true,
    shift: Shift::Left,
  };
}

impl CrcParams<u32> {
  /// CRC-32/ISO-HDLC: Ethernet, gzip, zip, PNG.
  pub const CRC32_ISO_HDLC: Self = Self {
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    shift: Shift::Left,
  };
}

/// Width-erased CRC descriptor in CRC Catalogue form.
///
/// Descriptors always describe the left-shift (MSB-first) model: the
/// polynomial is in normal form, and `xor_out` is applied after output
/// reflection. `check` is the CRC of the ASCII string `"123456789"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcSpec {
  /// Canonical catalogue name, e.g. `"CRC-16/MODBUS"`.
  pub name: &'static str,
  /// Alternative names the algorithm is known by.
  pub aliases: &'static [&'static str],
  /// Width in bits (8, 16 or 32).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect the final register before the XOR.
  pub reflect_out: bool,
  /// XOR value applied to the final CRC.
  pub xor_out: u64,
  /// Checksum of `b"123456789"`.
  pub check: u64,
}

impl CrcSpec {
  /// Whether `name` is this descriptor's name or one of its aliases
  /// (ASCII case-insensitive).
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    let name = name.trim();
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }
}

impl<W: CrcWord> TryFrom<&CrcSpec> for CrcParams<W> {
  type Error = ParamsError;

  fn try_from(spec: &CrcSpec) -> Result<Self, Self::Error> {
    if u32::from(spec.width) != W::BITS {
      return Err(ParamsError::WidthMismatch {
        expected: W::BITS,
        found: spec.width,
      });
    }

    let narrow = |value: u64, field: ParamsField| W::try_from_u64(value).ok_or(ParamsError::ValueOutOfRange { field });

    let polynomial = narrow(spec.polynomial, ParamsField::Polynomial)?;
    let initial = narrow(spec.initial, ParamsField::Initial)?;
    let xor_out = narrow(spec.xor_out, ParamsField::XorOut)?;

    Ok(Self {
      polynomial,
      initial,
      xor_out: if spec.reflect_out { xor_out.reflect() } else { xor_out },
      reflect_in: spec.reflect_in,
      reflect_out: spec.reflect_out,
      shift: Shift::Left,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLE: CrcSpec = CrcSpec {
    name: "CRC-16/SAMPLE",
    aliases: &["SAMPLE16"],
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    check: 0x29B1,
  };

  #[test]
  fn new_defaults() {
    let p = CrcParams::new(0x07u8, Shift::Left);
    assert_eq!(p.initial, 0);
    assert_eq!(p.xor_out, 0);
    assert!(!p.reflect_in);
    assert!(!p.reflect_out);
  }

  #[test]
  fn builder_methods() {
    let p = CrcParams::new(0x8005u16, Shift::Left)
      .with_initial(0xFFFF)
      .with_reflection(true, true);
    assert_eq!(p, CrcParams::<u16>::CRC16_MODBUS);
  }

  #[test]
  fn polynomial_reflected() {
    assert_eq!(CrcParams::<u8>::CRC8_MAXIM.polynomial_reflected(), 0x8C);
    assert_eq!(CrcParams::<u16>::CRC16_MODBUS.polynomial_reflected(), 0xA001);
    assert_eq!(CrcParams::<u32>::CRC32_ISO_HDLC.polynomial_reflected(), 0xEDB8_8320);
  }

  #[test]
  fn to_right_shift_reflects_everything() {
    let right = CrcParams::<u32>::CRC32_ISO_HDLC.to_right_shift().unwrap();
    assert_eq!(right.polynomial, 0xEDB8_8320);
    assert_eq!(right.initial, 0xFFFF_FFFF);
    assert_eq!(right.xor_out, 0xFFFF_FFFF);
    assert!(!right.reflect_in);
    assert!(!right.reflect_out);
    assert_eq!(right.shift, Shift::Right);
  }

  #[test]
  fn to_right_shift_requires_symmetric_reflection() {
    let unreflected = CrcParams::new(0x1021u16, Shift::Left);
    assert_eq!(unreflected.to_right_shift(), None);

    let half = unreflected.with_reflection(true, false);
    assert_eq!(half.to_right_shift(), None);

    let right = CrcParams::new(0xA001u16, Shift::Right).with_reflection(true, true);
    assert_eq!(right.to_right_shift(), None);
  }

  #[test]
  fn to_right_shift_has_no_8bit_form() {
    assert_eq!(CrcParams::<u8>::CRC8_MAXIM.to_right_shift(), None);
    assert!(CrcParams::<u16>::CRC16_MODBUS.to_right_shift().is_some());
  }

  #[test]
  fn finish_order_is_xor_then_reflect() {
    let p = CrcParams::new(0x07u8, Shift::Left)
      .with_xor_out(0x0F)
      .with_reflection(false, true);
    assert_eq!(p.finish(0x00), 0xF0);
  }

  #[test]
  fn spec_narrowing() {
    let p: CrcParams<u16> = CrcParams::try_from(&SAMPLE).unwrap();
    assert_eq!(p.polynomial, 0x1021);
    assert_eq!(p.initial, 0xFFFF);
    assert_eq!(p.shift, Shift::Left);
  }

  #[test]
  fn spec_narrowing_rejects_wrong_width() {
    let err = CrcParams::<u32>::try_from(&SAMPLE).unwrap_err();
    assert_eq!(err, ParamsError::WidthMismatch { expected: 32, found: 16 });

    let err = CrcParams::<u8>::try_from(&SAMPLE).unwrap_err();
    assert_eq!(err, ParamsError::WidthMismatch { expected: 8, found: 16 });
  }

  #[test]
  fn spec_narrowing_rejects_oversized_fields() {
    let spec = CrcSpec {
      polynomial: 0x1_1021,
      ..SAMPLE
    };
    assert_eq!(
      CrcParams::<u16>::try_from(&spec).unwrap_err(),
      ParamsError::ValueOutOfRange {
        field: ParamsField::Polynomial
      }
    );

    let spec = CrcSpec {
      initial: 0x1_0000,
      ..SAMPLE
    };
    assert_eq!(
      CrcParams::<u16>::try_from(&spec).unwrap_err(),
      ParamsError::ValueOutOfRange {
        field: ParamsField::Initial
      }
    );

    let spec = CrcSpec {
      xor_out: u64::MAX,
      ..SAMPLE
    };
    assert_eq!(
      CrcParams::<u16>::try_from(&spec).unwrap_err(),
      ParamsError::ValueOutOfRange {
        field: ParamsField::XorOut
      }
    );
  }

  #[test]
  fn spec_narrowing_moves_xor_across_reflection() {
    let spec = CrcSpec {
      reflect_in: true,
      reflect_out: true,
      xor_out: 0x0001,
      ..SAMPLE
    };
    let p = CrcParams::<u16>::try_from(&spec).unwrap();
    assert_eq!(p.xor_out, 0x8000);
  }

  #[test]
  fn spec_name_matching() {
    assert!(SAMPLE.matches("CRC-16/SAMPLE"));
    assert!(SAMPLE.matches("crc-16/sample"));
    assert!(SAMPLE.matches("  sample16 "));
    assert!(!SAMPLE.matches("CRC-16"));
  }
}
