//! Property-based tests for the CRC engine.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation and
//! the `crc` crate as an independent implementation.

use crctab::{Crc, Crc8, Crc16, Crc32, CrcParams, Shift, build_table, catalog, reverse8, reverse16, reverse32};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

// Reflection

proptest! {
  #[test]
  fn reverse16_involution(x in any::<u16>()) {
    prop_assert_eq!(reverse16(reverse16(x)), x);
  }

  #[test]
  fn reverse32_involution(x in any::<u32>()) {
    prop_assert_eq!(reverse32(reverse32(x)), x);
  }

  #[test]
  fn reverse32_splits_into_bytes(x in any::<u32>()) {
    let [a, b, c, d] = x.to_be_bytes();
    let expected = u32::from_le_bytes([reverse8(a), reverse8(b), reverse8(c), reverse8(d)]);
    prop_assert_eq!(reverse32(x), expected);
  }
}

// Left/right equivalence

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn crc8_right_carries_whole_register(poly in any::<u8>(), init in any::<u8>(), xor in any::<u8>(), data in arb_data()) {
    let params = CrcParams::new(poly, Shift::Right).with_initial(init).with_xor_out(xor);
    let table = build_table(poly, Shift::Right);
    let mut c = init;
    for &b in &data {
      c = table.get(c ^ b) ^ c;
    }
    prop_assert_eq!(Crc::new(params).checksum(&data), c ^ xor);

    let left = params.with_reflection(true, true);
    prop_assert_eq!(CrcParams { shift: Shift::Left, ..left }.to_right_shift(), None);
  }

  #[test]
  fn crc16_right_shift_twin(poly in any::<u16>(), init in any::<u16>(), xor in any::<u16>(), data in arb_data()) {
    let left = CrcParams::new(poly, Shift::Left).with_initial(init).with_xor_out(xor).with_reflection(true, true);
    let right = left.to_right_shift().unwrap();
    prop_assert_eq!(Crc::new(left).checksum(&data), Crc::new(right).checksum(&data));
  }

  #[test]
  fn crc32_right_shift_twin(poly in any::<u32>(), init in any::<u32>(), xor in any::<u32>(), data in arb_data()) {
    let left = CrcParams::new(poly, Shift::Left).with_initial(init).with_xor_out(xor).with_reflection(true, true);
    let right = left.to_right_shift().unwrap();
    prop_assert_eq!(Crc::new(left).checksum(&data), Crc::new(right).checksum(&data));
  }
}

// Cross-validation against the `crc` crate

proptest! {
  #[test]
  fn crc8_catalogue_matches_crc_crate(data in arb_data()) {
    let pairs: [(&crctab::CrcSpec, crc::Crc<u8>); 3] = [
      (&catalog::CRC_8_MAXIM_DOW, crc::Crc::<u8>::new(&crc::CRC_8_MAXIM_DOW)),
      (&catalog::CRC_8_SMBUS, crc::Crc::<u8>::new(&crc::CRC_8_SMBUS)),
      (&catalog::CRC_8_ROHC, crc::Crc::<u8>::new(&crc::CRC_8_ROHC)),
    ];
    for (spec, reference) in &pairs {
      let ours = Crc8::from_spec(spec).unwrap();
      prop_assert_eq!(ours.checksum(&data), reference.checksum(&data), "{}", spec.name);
    }
  }

  #[test]
  fn crc16_catalogue_matches_crc_crate(data in arb_data()) {
    let pairs: [(&crctab::CrcSpec, crc::Crc<u16>); 6] = [
      (&catalog::CRC_16_MODBUS, crc::Crc::<u16>::new(&crc::CRC_16_MODBUS)),
      (&catalog::CRC_16_ARC, crc::Crc::<u16>::new(&crc::CRC_16_ARC)),
      (&catalog::CRC_16_XMODEM, crc::Crc::<u16>::new(&crc::CRC_16_XMODEM)),
      (&catalog::CRC_16_IBM_3740, crc::Crc::<u16>::new(&crc::CRC_16_IBM_3740)),
      (&catalog::CRC_16_KERMIT, crc::Crc::<u16>::new(&crc::CRC_16_KERMIT)),
      (&catalog::CRC_16_IBM_SDLC, crc::Crc::<u16>::new(&crc::CRC_16_IBM_SDLC)),
    ];
    for (spec, reference) in &pairs {
      let ours = Crc16::from_spec(spec).unwrap();
      prop_assert_eq!(ours.checksum(&data), reference.checksum(&data), "{}", spec.name);
    }
  }

  #[test]
  fn crc32_catalogue_matches_crc_crate(data in arb_data()) {
    let pairs: [(&crctab::CrcSpec, crc::Crc<u32>); 5] = [
      (&catalog::CRC_32_ISO_HDLC, crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC)),
      (&catalog::CRC_32_ISCSI, crc::Crc::<u32>::new(&crc::CRC_32_ISCSI)),
      (&catalog::CRC_32_BZIP2, crc::Crc::<u32>::new(&crc::CRC_32_BZIP2)),
      (&catalog::CRC_32_MPEG_2, crc::Crc::<u32>::new(&crc::CRC_32_MPEG_2)),
      (&catalog::CRC_32_CKSUM, crc::Crc::<u32>::new(&crc::CRC_32_CKSUM)),
    ];
    for (spec, reference) in &pairs {
      let ours = Crc32::from_spec(spec).unwrap();
      prop_assert_eq!(ours.checksum(&data), reference.checksum(&data), "{}", spec.name);
    }
  }

  #[test]
  fn custom_reflected_xor_matches_crc_crate(data in arb_data(), xor in any::<u16>()) {
    // Non-palindromic final XOR exercises the xor-then-reflect ordering.
    let algorithm: &'static crc::Algorithm<u16> = Box::leak(Box::new(crc::Algorithm {
      width: 16,
      poly: 0x1021,
      init: 0x0000,
      refin: true,
      refout: true,
      xorout: xor,
      check: 0,
      residue: 0,
    }));
    let spec = crctab::CrcSpec {
      name: "custom",
      aliases: &[],
      width: 16,
      polynomial: 0x1021,
      initial: 0,
      reflect_in: true,
      reflect_out: true,
      xor_out: u64::from(xor),
      check: 0,
    };
    let reference = crc::Crc::<u16>::new(algorithm);
    prop_assert_eq!(Crc16::from_spec(&spec).unwrap().checksum(&data), reference.checksum(&data));
  }
}

// Determinism

proptest! {
  #[test]
  fn fresh_engines_agree(data in arb_data()) {
    let a = Crc::new(CrcParams::<u32>::CRC32_ISO_HDLC);
    let b = Crc::new(CrcParams::<u32>::CRC32_ISO_HDLC);
    let first = a.checksum(&data);
    prop_assert_eq!(a.checksum(&data), first);
    prop_assert_eq!(b.checksum(&data), first);
  }
}
