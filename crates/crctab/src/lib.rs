//! Table-driven, parameterized CRC checksums for 8, 16 and 32-bit registers.
//!
//! One generic algorithm covers every CRC variant of these widths. A variant
//! is described by its polynomial, initial value, final XOR, input/output
//! reflection and register shift direction ([`CrcParams`]). The engine
//! ([`Crc`]) builds a 256-entry lookup table from the polynomial and shift
//! direction once, then folds byte buffers through it.
//!
//! # Supported Widths
//!
//! | Engine | Register | Example variants |
//! |--------|----------|------------------|
//! | [`Crc8`] | `u8` | CRC-8/MAXIM-DOW, CRC-8/SMBUS, CRC-8/ROHC |
//! | [`Crc16`] | `u16` | CRC-16/MODBUS, CRC-16/XMODEM, CRC-16/IBM-SDLC |
//! | [`Crc32`] | `u32` | CRC-32/ISO-HDLC, CRC-32/ISCSI, CRC-32/BZIP2 |
//!
//! See [`catalog`] for the full list of named algorithms.
//!
//! # Example
//!
//! ```rust
//! use crctab::{Crc, Crc16, CrcParams, Shift};
//!
//! let data = b"123456789";
//!
//! // Built-in parameter sets
//! let crc32 = Crc::new(CrcParams::<u32>::CRC32_ISO_HDLC);
//! assert_eq!(crc32.checksum(data), 0xCBF4_3926);
//!
//! // Custom parameters: CRC-16/MODBUS computed right-shift
//! let modbus_right = Crc::new(CrcParams::new(0xA001u16, Shift::Right).with_initial(0xFFFF));
//! assert_eq!(modbus_right.checksum(data), 0x4B37);
//!
//! // Catalogue lookup
//! let modbus = Crc16::from_name("CRC-16/MODBUS")?;
//! assert_eq!(modbus.checksum(data), 0x4B37);
//! # Ok::<(), traits::ParamsError>(())
//! ```
//!
//! # Table Binding
//!
//! A [`Table`] is only produced by [`Table::build`] and has no mutating API.
//! [`Crc`] keeps its table and parameters private, so the polynomial and shift
//! direction a fold uses are always the ones its table was generated from,
//! and sharing an engine across threads is plain `&Crc<W>` borrowing.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crctab = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the `CRCTAB_FORCE` override in [`config`] is unavailable and
//! the table kernel is always used.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod catalog;
pub mod config;
#[cfg(feature = "diag")]
pub mod diag;
mod engine;
mod params;
pub mod reference;
mod reflect;
mod table;

#[cfg(test)]
mod proptests;

pub use config::{Config, Force};
pub use engine::{Crc, Crc8, Crc16, Crc32};
pub use params::{CrcParams, CrcParams8, CrcParams16, CrcParams32, CrcSpec, Shift};
pub use reflect::{reflect, reverse8, reverse16, reverse32};
pub use table::{Table, build_table, table_entry};
// Re-export core traits for convenience
pub use traits::{CrcWord, ParamsError, ParamsField};
