//! Core traits for crctab.
//!
//! This crate provides the foundational abstractions the CRC implementations
//! are generic over. It is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`CrcWord`] | Register word (`u8`, `u16`, `u32`) the table builder and fold loop operate on |
//! | [`ParamsError`] | Failure to resolve or narrow a CRC parameter set |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod word;

pub use error::{ParamsError, ParamsField};
pub use word::CrcWord;
