//! Basic usage: built-in parameters, custom parameters and catalogue lookup.
//!
//! Run with: `cargo run --example basic -p crctab`

use crctab::{Crc, Crc8, Crc16, Crc32, CrcParams, ParamsError, Shift, catalog};

fn main() -> Result<(), ParamsError> {
  println!("=== crctab Basic Examples ===\n");

  builtin_examples();
  custom_examples();
  catalogue_examples()?;

  Ok(())
}

/// Built-in parameter sets.
fn builtin_examples() {
  println!("--- Built-in Parameters ---\n");

  let data = b"123456789";

  // CRC-8/MAXIM-DOW - 1-Wire
  let crc8 = Crc::new(CrcParams::<u8>::CRC8_MAXIM).checksum(data);
  println!("CRC-8/MAXIM-DOW:  0x{crc8:02X}");
  assert_eq!(crc8, 0xA1);

  // CRC-16/MODBUS - Modbus RTU
  let crc16 = Crc::new(CrcParams::<u16>::CRC16_MODBUS).checksum(data);
  println!("CRC-16/MODBUS:    0x{crc16:04X}");
  assert_eq!(crc16, 0x4B37);

  // CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG
  let crc32 = Crc::new(CrcParams::<u32>::CRC32_ISO_HDLC).checksum(data);
  println!("CRC-32/ISO-HDLC:  0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  println!();
}

/// Hand-built parameters, including the right-shift form.
fn custom_examples() {
  println!("--- Custom Parameters ---\n");

  let data = b"123456789";

  // MODBUS computed right-shift with the reflected polynomial.
  let modbus_right = Crc::new(CrcParams::new(0xA001u16, Shift::Right).with_initial(0xFFFF));
  println!("MODBUS (right):   0x{:04X}", modbus_right.checksum(data));

  // Same thing, derived from the left-shift parameters.
  let derived = CrcParams::<u16>::CRC16_MODBUS.to_right_shift();
  if let Some(params) = derived {
    println!("MODBUS (derived): 0x{:04X}", Crc::new(params).checksum(data));
  }

  // Unreflected CCITT polynomial, zero seed.
  let xmodem = Crc::new(CrcParams::new(0x1021u16, Shift::Left));
  println!("XMODEM:           0x{:04X}", xmodem.checksum(data));

  let table = xmodem.table();
  println!("XMODEM table:     {table:?}, T[1] = 0x{:04X}", table.get(1));

  println!();
}

/// Lookup by catalogue name or alias.
fn catalogue_examples() -> Result<(), ParamsError> {
  println!("--- Catalogue ---\n");

  let data = b"123456789";

  for spec in catalog::ALL {
    let crc = match spec.width {
      8 => u64::from(Crc8::from_spec(spec)?.checksum(data)),
      16 => u64::from(Crc16::from_spec(spec)?.checksum(data)),
      32 => u64::from(Crc32::from_spec(spec)?.checksum(data)),
      _ => continue,
    };
    let status = if crc == spec.check { "ok" } else { "MISMATCH" };
    println!("{:<18} 0x{crc:08X}  {status}", spec.name);
  }

  let castagnoli = Crc32::from_name("crc-32c")?;
  println!("\ncrc-32c by alias: 0x{:08X}", castagnoli.checksum(data));

  match Crc16::from_name("CRC-16/UNKNOWN") {
    Ok(_) => println!("unexpected match"),
    Err(err) => println!("lookup error:     {err}"),
  }

  Ok(())
}
