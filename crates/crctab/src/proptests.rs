extern crate std;

use std::vec::Vec;

use crc_fast::CrcAlgorithm;
use proptest::{arbitrary::Arbitrary, prelude::*};

use crate::{Crc, CrcParams, CrcWord, Shift, catalog, reference};

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  proptest::collection::vec(any::<u8>(), 0..=4096)
}

fn arb_shift() -> impl Strategy<Value = Shift> {
  prop_oneof![Just(Shift::Left), Just(Shift::Right)]
}

fn arb_params<W: CrcWord + Arbitrary>() -> impl Strategy<Value = CrcParams<W>> {
  (any::<W>(), any::<W>(), any::<W>(), any::<bool>(), any::<bool>(), arb_shift()).prop_map(
    |(polynomial, initial, xor_out, reflect_in, reflect_out, shift)| CrcParams {
      polynomial,
      initial,
      xor_out,
      reflect_in,
      reflect_out,
      shift,
    },
  )
}

fn table_kernel<W: CrcWord>(params: CrcParams<W>, data: &[u8]) -> W {
  let crc = Crc::new(params);
  params.finish(crc.update(params.initial, data))
}

proptest! {
  // ─────────────────────────────────────────────────────────────────────────────
  // Table kernel vs bitwise reference, arbitrary parameters
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc8_table_matches_reference(params in arb_params::<u8>(), data in arb_data()) {
    prop_assert_eq!(table_kernel(params, &data), reference::checksum(&params, &data));
  }

  #[test]
  fn crc16_table_matches_reference(params in arb_params::<u16>(), data in arb_data()) {
    prop_assert_eq!(table_kernel(params, &data), reference::checksum(&params, &data));
  }

  #[test]
  fn crc32_table_matches_reference(params in arb_params::<u32>(), data in arb_data()) {
    prop_assert_eq!(table_kernel(params, &data), reference::checksum(&params, &data));
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_iso_hdlc_matches_crc_fast(data in arb_data()) {
    let ours = table_kernel(CrcParams::<u32>::CRC32_ISO_HDLC, &data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc32_iscsi_matches_crc_fast(data in arb_data()) {
    let crc = Crc::<u32>::from_spec(&catalog::CRC_32_ISCSI).unwrap();
    let ours = crc.params().finish(crc.update(crc.params().initial, &data));
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc32_bzip2_matches_crc_fast(data in arb_data()) {
    let crc = Crc::<u32>::from_spec(&catalog::CRC_32_BZIP2).unwrap();
    let ours = crc.params().finish(crc.update(crc.params().initial, &data));
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Bzip2, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc32_right_shift_matches_crc_fast(data in arb_data()) {
    let right = CrcParams::<u32>::CRC32_ISO_HDLC.to_right_shift().unwrap();
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(table_kernel(right, &data), reference);
  }
}
