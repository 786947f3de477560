//! Differential fuzzing against the `crc` crate.
//!
//! Every catalogued algorithm is computed by both implementations, and by the
//! right-shift twin where one exists.

#![no_main]

use crctab::{Crc, Crc8, Crc16, Crc32, CrcSpec, CrcWord, catalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  for spec in catalog::ALL {
    match spec.width {
      8 => check(Crc8::from_spec(spec).unwrap(), spec, data, crc8_reference(spec, data)),
      16 => check(Crc16::from_spec(spec).unwrap(), spec, data, crc16_reference(spec, data)),
      32 => check(Crc32::from_spec(spec).unwrap(), spec, data, crc32_reference(spec, data)),
      _ => unreachable!(),
    }
  }
});

fn check<W: CrcWord>(crc: Crc<W>, spec: &CrcSpec, data: &[u8], reference: u64) {
  let ours = crc.checksum(data);
  assert_eq!(
    ours.to_u64(),
    reference,
    "{} differential mismatch: ours={:#x}, reference={:#x}, len={}",
    spec.name,
    ours,
    reference,
    data.len()
  );

  if let Some(right) = crc.params().to_right_shift() {
    assert_eq!(Crc::new(right).checksum(data), ours, "{} right-shift mismatch", spec.name);
  }
}

fn crc8_reference(spec: &CrcSpec, data: &[u8]) -> u64 {
  let algorithm = match spec.name {
    "CRC-8/MAXIM-DOW" => &crc::CRC_8_MAXIM_DOW,
    "CRC-8/SMBUS" => &crc::CRC_8_SMBUS,
    "CRC-8/ROHC" => &crc::CRC_8_ROHC,
    other => panic!("no reference for {other}"),
  };
  u64::from(crc::Crc::<u8>::new(algorithm).checksum(data))
}

fn crc16_reference(spec: &CrcSpec, data: &[u8]) -> u64 {
  let algorithm = match spec.name {
    "CRC-16/MODBUS" => &crc::CRC_16_MODBUS,
    "CRC-16/ARC" => &crc::CRC_16_ARC,
    "CRC-16/XMODEM" => &crc::CRC_16_XMODEM,
    "CRC-16/IBM-3740" => &crc::CRC_16_IBM_3740,
    "CRC-16/KERMIT" => &crc::CRC_16_KERMIT,
    "CRC-16/IBM-SDLC" => &crc::CRC_16_IBM_SDLC,
    other => panic!("no reference for {other}"),
  };
  u64::from(crc::Crc::<u16>::new(algorithm).checksum(data))
}

fn crc32_reference(spec: &CrcSpec, data: &[u8]) -> u64 {
  let algorithm = match spec.name {
    "CRC-32/ISO-HDLC" => &crc::CRC_32_ISO_HDLC,
    "CRC-32/ISCSI" => &crc::CRC_32_ISCSI,
    "CRC-32/BZIP2" => &crc::CRC_32_BZIP2,
    "CRC-32/MPEG-2" => &crc::CRC_32_MPEG_2,
    "CRC-32/CKSUM" => &crc::CRC_32_CKSUM,
    other => panic!("no reference for {other}"),
  };
  u64::from(crc::Crc::<u32>::new(algorithm).checksum(data))
}
