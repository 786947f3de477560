//! Catalogue of named CRC algorithms.
//!
//! Parameters and check values follow the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Every entry
//! is a left-shift (MSB-first) descriptor; see [`CrcSpec`].
//!
//! | Name | Poly | Init | Refl | XorOut | Check |
//! |------|------|------|------|--------|-------|
//! | CRC-8/MAXIM-DOW | 0x31 | 0x00 | yes | 0x00 | 0xA1 |
//! | CRC-8/SMBUS | 0x07 | 0x00 | no | 0x00 | 0xF4 |
//! | CRC-8/ROHC | 0x07 | 0xFF | yes | 0x00 | 0xD0 |
//! | CRC-16/MODBUS | 0x8005 | 0xFFFF | yes | 0x0000 | 0x4B37 |
//! | CRC-16/ARC | 0x8005 | 0x0000 | yes | 0x0000 | 0xBB3D |
//! | CRC-16/XMODEM | 0x1021 | 0x0000 | no | 0x0000 | 0x31C3 |
//! | CRC-16/IBM-3740 | 0x1021 | 0xFFFF | no | 0x0000 | 0x29B1 |
//! | CRC-16/KERMIT | 0x1021 | 0x0000 | yes | 0x0000 | 0x2189 |
//! | CRC-16/IBM-SDLC | 0x1021 | 0xFFFF | yes | 0xFFFF | 0x906E |
//! | CRC-32/ISO-HDLC | 0x04C11DB7 | 0xFFFFFFFF | yes | 0xFFFFFFFF | 0xCBF43926 |
//! | CRC-32/ISCSI | 0x1EDC6F41 | 0xFFFFFFFF | yes | 0xFFFFFFFF | 0xE3069283 |
//! | CRC-32/BZIP2 | 0x04C11DB7 | 0xFFFFFFFF | no | 0xFFFFFFFF | 0xFC891918 |
//! | CRC-32/MPEG-2 | 0x04C11DB7 | 0xFFFFFFFF | no | 0x00000000 | 0x0376E6E7 |
//! | CRC-32/CKSUM | 0x04C11DB7 | 0x00000000 | no | 0xFFFFFFFF | 0x765E7680 |

use crate::params::CrcSpec;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-8
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-8/MAXIM-DOW - 1-Wire, iButton, DS18B20
pub const CRC_8_MAXIM_DOW: CrcSpec = CrcSpec {
  name: "CRC-8/MAXIM-DOW",
  aliases: &["CRC-8/MAXIM", "DOW-CRC"],
  width: 8,
  polynomial: 0x31,
  initial: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0xA1,
};

/// CRC-8/SMBUS - SMBus packet error checking
pub const CRC_8_SMBUS: CrcSpec = CrcSpec {
  name: "CRC-8/SMBUS",
  aliases: &["CRC-8"],
  width: 8,
  polynomial: 0x07,
  initial: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xF4,
};

/// CRC-8/ROHC - Robust Header Compression (RFC 3095)
pub const CRC_8_ROHC: CrcSpec = CrcSpec {
  name: "CRC-8/ROHC",
  aliases: &[],
  width: 8,
  polynomial: 0x07,
  initial: 0xFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0xD0,
};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/MODBUS - Modbus RTU
pub const CRC_16_MODBUS: CrcSpec = CrcSpec {
  name: "CRC-16/MODBUS",
  aliases: &["MODBUS"],
  width: 16,
  polynomial: 0x8005,
  initial: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x4B37,
};

/// CRC-16/ARC - ARC archiver, LHA, legacy IBM protocols
pub const CRC_16_ARC: CrcSpec = CrcSpec {
  name: "CRC-16/ARC",
  aliases: &["ARC", "CRC-16", "CRC-16/LHA", "CRC-IBM"],
  width: 16,
  polynomial: 0x8005,
  initial: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0xBB3D,
};

/// CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth LE
pub const CRC_16_XMODEM: CrcSpec = CrcSpec {
  name: "CRC-16/XMODEM",
  aliases: &["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB", "XMODEM", "ZMODEM"],
  width: 16,
  polynomial: 0x1021,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x31C3,
};

/// CRC-16/IBM-3740 - IBM 3740 floppy, also known as CCITT-FALSE
pub const CRC_16_IBM_3740: CrcSpec = CrcSpec {
  name: "CRC-16/IBM-3740",
  aliases: &["CRC-16/AUTOSAR", "CRC-16/CCITT-FALSE"],
  width: 16,
  polynomial: 0x1021,
  initial: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x29B1,
};

/// CRC-16/KERMIT - Kermit protocol, also known as CCITT (true)
pub const CRC_16_KERMIT: CrcSpec = CrcSpec {
  name: "CRC-16/KERMIT",
  aliases: &["CRC-16/BLUETOOTH", "CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB", "KERMIT"],
  width: 16,
  polynomial: 0x1021,
  initial: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x2189,
};

/// CRC-16/IBM-SDLC - HDLC, X.25, PPP FCS-16
pub const CRC_16_IBM_SDLC: CrcSpec = CrcSpec {
  name: "CRC-16/IBM-SDLC",
  aliases: &["CRC-16/ISO-HDLC", "CRC-16/ISO-IEC-14443-3-B", "CRC-16/X-25", "CRC-B", "X-25"],
  width: 16,
  polynomial: 0x1021,
  initial: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0x906E,
};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG
pub const CRC_32_ISO_HDLC: CrcSpec = CrcSpec {
  name: "CRC-32/ISO-HDLC",
  aliases: &["CRC-32", "CRC-32/ADCCP", "CRC-32/V-42", "CRC-32/XZ", "PKZIP"],
  width: 32,
  polynomial: 0x04C1_1DB7,
  initial: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0xCBF4_3926,
};

/// CRC-32/ISCSI - iSCSI, SCTP, ext4, Btrfs (Castagnoli)
pub const CRC_32_ISCSI: CrcSpec = CrcSpec {
  name: "CRC-32/ISCSI",
  aliases: &["CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN", "CRC-32C"],
  width: 32,
  polynomial: 0x1EDC_6F41,
  initial: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0xE306_9283,
};

/// CRC-32/BZIP2 - bzip2, AAL5
pub const CRC_32_BZIP2: CrcSpec = CrcSpec {
  name: "CRC-32/BZIP2",
  aliases: &["B-CRC-32", "CRC-32/AAL5", "CRC-32/DECT-B"],
  width: 32,
  polynomial: 0x04C1_1DB7,
  initial: 0xFFFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF_FFFF,
  check: 0xFC89_1918,
};

/// CRC-32/MPEG-2 - MPEG transport streams
pub const CRC_32_MPEG_2: CrcSpec = CrcSpec {
  name: "CRC-32/MPEG-2",
  aliases: &[],
  width: 32,
  polynomial: 0x04C1_1DB7,
  initial: 0xFFFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000,
  check: 0x0376_E6E7,
};

/// CRC-32/CKSUM - POSIX `cksum` (without the length suffix)
pub const CRC_32_CKSUM: CrcSpec = CrcSpec {
  name: "CRC-32/CKSUM",
  aliases: &["CKSUM", "CRC-32/POSIX"],
  width: 32,
  polynomial: 0x04C1_1DB7,
  initial: 0x0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF_FFFF,
  check: 0x765E_7680,
};

/// Every catalogued algorithm, grouped by width.
pub const ALL: &[CrcSpec] = &[
  CRC_8_MAXIM_DOW,
  CRC_8_SMBUS,
  CRC_8_ROHC,
  CRC_16_MODBUS,
  CRC_16_ARC,
  CRC_16_XMODEM,
  CRC_16_IBM_3740,
  CRC_16_KERMIT,
  CRC_16_IBM_SDLC,
  CRC_32_ISO_HDLC,
  CRC_32_ISCSI,
  CRC_32_BZIP2,
  CRC_32_MPEG_2,
  CRC_32_CKSUM,
];

/// Look up an algorithm by name or alias (ASCII case-insensitive).
///
/// ```
/// let spec = crctab::catalog::find("crc-16/ccitt-false").unwrap();
/// assert_eq!(spec.name, "CRC-16/IBM-3740");
/// assert_eq!(spec.check, 0x29B1);
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static CrcSpec> {
  ALL.iter().find(|spec| spec.matches(name))
}

/// Iterate over the catalogued algorithms of one width.
pub fn with_width(width: u8) -> impl Iterator<Item = &'static CrcSpec> {
  ALL.iter().filter(move |spec| spec.width == width)
}
