//! Per-isotope decay output

// external crates
use serde::Serialize;

/// Decay summary for a single radioactive isotope
///
/// The `alpha` and `beta` fractions always sum to 1, up to rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayRecord {
    /// Display symbol, e.g. `U-238`
    pub symbol: String,
    /// Number of protons (Z)
    pub protons: u8,
    /// Mass number (A)
    pub mass: u16,
    /// Half-life (s)
    pub half_life: f64,
    /// Fraction decaying by alpha emission
    pub alpha: f64,
    /// Fraction decaying by beta emission
    pub beta: f64,
}
