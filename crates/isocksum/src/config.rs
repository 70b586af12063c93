//! Runtime configuration (kernel tunables + overrides).
//!
//! All kernels produce identical results; configuration only chooses which
//! one runs. Overrides are read from the environment once per process:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `ISOCKSUM_FORCE` | `auto`, `reference`, `bytewise`, `unroll4` |
//! | `ISOCKSUM_THRESHOLD_BYTEWISE_TO_UNROLL4` | minimum length (octets) for the unrolled kernel |
//!
//! Without the `std` feature the defaults are used.

/// Default minimum length for the unrolled kernel.
pub const DEFAULT_BYTEWISE_TO_UNROLL4: usize = 64;

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IsoForce {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the closed-form reference implementation (slow, obviously correct).
  Reference,
  /// Force the octet-at-a-time RFC 1008 loop.
  Bytewise,
  /// Force the four-octets-per-step kernel.
  Unroll4,
}

impl IsoForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Bytewise => "bytewise",
      Self::Unroll4 => "unroll4",
    }
  }

  /// Parse a force mode, accepting the same aliases as `ISOCKSUM_FORCE`.
  ///
  /// Returns `None` for empty or unrecognized values.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference") {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("bytewise")
      || value.eq_ignore_ascii_case("scalar")
      || value.eq_ignore_ascii_case("portable")
    {
      return Some(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("unroll4")
      || value.eq_ignore_ascii_case("unroll-4")
      || value.eq_ignore_ascii_case("unrolled")
    {
      return Some(Self::Unroll4);
    }

    None
  }
}

/// Kernel selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsoTunables {
  /// Minimum `len` in octets to use the unrolled kernel (otherwise bytewise).
  pub bytewise_to_unroll4: usize,
}

impl Default for IsoTunables {
  fn default() -> Self {
    Self {
      bytewise_to_unroll4: DEFAULT_BYTEWISE_TO_UNROLL4,
    }
  }
}

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IsoConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: IsoForce,
  /// Force mode actually applied; `diag` reports it next to the request.
  pub effective_force: IsoForce,
  /// Tunables used by the selector.
  pub tunables: IsoTunables,
}

/// Raw overrides before they are applied to the defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
  pub force: IsoForce,
  pub bytewise_to_unroll4: Option<usize>,
}

/// Parse a length threshold. Empty or non-numeric values are ignored.
#[must_use]
pub fn parse_threshold(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    std::env::var(name).ok()
  }

  Overrides {
    force: var("ISOCKSUM_FORCE")
      .and_then(|v| IsoForce::parse(&v))
      .unwrap_or(IsoForce::Auto),
    bytewise_to_unroll4: var("ISOCKSUM_THRESHOLD_BYTEWISE_TO_UNROLL4").and_then(|v| parse_threshold(&v)),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Apply `ov` to the defaults.
#[inline]
#[must_use]
pub fn from_overrides(ov: Overrides) -> IsoConfig {
  let mut tunables = IsoTunables::default();
  if let Some(v) = ov.bytewise_to_unroll4 {
    tunables.bytewise_to_unroll4 = v.max(1);
  }

  IsoConfig {
    requested_force: ov.force,
    effective_force: ov.force,
    tunables,
  }
}

/// Cached process-wide configuration.
#[inline]
#[must_use]
pub fn get() -> IsoConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<IsoConfig> = OnceLock::new();
    *CACHED.get_or_init(|| from_overrides(overrides()))
  }

  #[cfg(not(feature = "std"))]
  {
    from_overrides(overrides())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn force_aliases() {
    assert_eq!(IsoForce::parse("auto"), Some(IsoForce::Auto));
    assert_eq!(IsoForce::parse(" Reference "), Some(IsoForce::Reference));
    assert_eq!(IsoForce::parse("SCALAR"), Some(IsoForce::Bytewise));
    assert_eq!(IsoForce::parse("portable"), Some(IsoForce::Bytewise));
    assert_eq!(IsoForce::parse("unroll-4"), Some(IsoForce::Unroll4));
    assert_eq!(IsoForce::parse("unrolled"), Some(IsoForce::Unroll4));
    assert_eq!(IsoForce::parse(""), None);
    assert_eq!(IsoForce::parse("simd"), None);
  }

  #[test]
  fn force_round_trips_through_as_str() {
    for force in [IsoForce::Auto, IsoForce::Reference, IsoForce::Bytewise, IsoForce::Unroll4] {
      assert_eq!(IsoForce::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn threshold_parsing() {
    assert_eq!(parse_threshold("128"), Some(128));
    assert_eq!(parse_threshold(" 7 "), Some(7));
    assert_eq!(parse_threshold(""), None);
    assert_eq!(parse_threshold("-1"), None);
    assert_eq!(parse_threshold("lots"), None);
  }

  #[test]
  fn defaults_without_overrides() {
    let cfg = from_overrides(Overrides::default());
    assert_eq!(cfg.requested_force, IsoForce::Auto);
    assert_eq!(cfg.effective_force, IsoForce::Auto);
    assert_eq!(cfg.tunables.bytewise_to_unroll4, DEFAULT_BYTEWISE_TO_UNROLL4);
  }

  #[test]
  fn zero_threshold_clamps_to_one() {
    let cfg = from_overrides(Overrides {
      force: IsoForce::Unroll4,
      bytewise_to_unroll4: Some(0),
    });
    assert_eq!(cfg.tunables.bytewise_to_unroll4, 1);
    assert_eq!(cfg.effective_force, IsoForce::Unroll4);
  }
}
