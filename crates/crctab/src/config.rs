//! Runtime configuration (kernel override).
//!
//! The table kernel is always the default. For auditing and differential
//! debugging the bitwise reference kernel can be forced process-wide:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCTAB_FORCE` | `auto`, `table` (`portable`), `reference` (`bitwise`) |
//!
//! The environment is read once (requires the `std` feature) and cached for
//! the lifetime of the process. Unknown or empty values fall back to `auto`.
//! Without `std` the configuration is always `auto`.

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Force {
  /// Use the default selector (table kernel).
  #[default]
  Auto,
  /// Force the bitwise reference kernel (slow, obviously correct).
  Reference,
  /// Force the 256-entry table kernel.
  Table,
}

impl Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Table => "table",
    }
  }

  /// Parse an override value (ASCII case-insensitive, surrounding whitespace
  /// ignored). Returns `None` for empty or unrecognized input.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") {
      return Some(Self::Table);
    }

    None
  }

  /// Name of the kernel this mode runs.
  #[must_use]
  pub const fn kernel_name(self) -> &'static str {
    match self {
      Self::Reference => "reference/bitwise",
      Self::Auto | Self::Table => "portable/table",
    }
  }
}

/// Process-wide configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Config {
  /// Requested force mode.
  pub force: Force,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Config {
  let force = std::env::var("CRCTAB_FORCE")
    .ok()
    .and_then(|value| Force::parse(&value))
    .unwrap_or_default();
  Config { force }
}

/// Cached process-wide configuration.
#[inline]
#[must_use]
pub fn get() -> Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Config> = OnceLock::new();
    *CACHED.get_or_init(read_env_overrides)
  }

  #[cfg(not(feature = "std"))]
  {
    Config::default()
  }
}
