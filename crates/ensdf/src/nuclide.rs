//! Nuclide and level data structures

// standard library
use std::collections::BTreeMap;
use std::format as f;

// external crates
use serde::{Deserialize, Serialize};

// internal modules
use crate::element::ElementIndex;
use crate::error::Result;
use crate::units::Quantity;

/// Raw decay branch label to branch probability, e.g. `"B-" => 100 %`
pub type DecayRatio = BTreeMap<String, Quantity>;

/// Anything that can report a half-life and a set of decay branches
///
/// This is the only view of a level that the decay pipeline relies on, so any
/// provider representation can be plugged in by implementing it.
pub trait EnergyLevel {
    /// Half-life of the level, which may be undefined
    fn half_life(&self) -> Quantity;

    /// Decay branch probabilities keyed by raw branch label
    fn decay_ratio(&self) -> &DecayRatio;
}

/// Anything identified by a proton and mass number with ordered levels
pub trait Isotope {
    /// Level type provided
    type Level: EnergyLevel;

    /// Number of protons (Z)
    fn protons(&self) -> u8;

    /// Mass number (A, total nucleons)
    fn mass(&self) -> u16;

    /// Levels in provider order, ground state first
    fn levels(&self) -> &[Self::Level];

    /// Identity of the isotope
    fn id(&self) -> IsotopeId {
        IsotopeId::new(self.protons(), self.mass())
    }
}

/// Proton and mass number pair uniquely identifying a nuclide
///
/// The display symbol is `<Element>-<mass>`:
///
/// ```rust
/// # use isochart_ensdf::{ElementIndex, IsotopeId};
/// let index = ElementIndex::from_symbols([(1, "H"), (92, "U")]);
/// let id = IsotopeId::new(92, 238);
/// assert_eq!(id.symbol(&index).unwrap(), "U-238");
///
/// // Nothing known with 118 protons in this index
/// assert!(IsotopeId::new(118, 294).symbol(&index).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsotopeId {
    /// Number of protons (Z)
    pub protons: u8,
    /// Mass number (A)
    pub mass: u16,
}

impl IsotopeId {
    /// New identity from proton and mass numbers
    pub fn new(protons: u8, mass: u16) -> Self {
        Self { protons, mass }
    }

    /// Display symbol for the isotope, e.g. `U-238`
    pub fn symbol(&self, index: &ElementIndex) -> Result<String> {
        Ok(f!("{}-{}", index.symbol(self.protons)?, self.mass))
    }
}

impl std::fmt::Display for IsotopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "A={}, Z={}", self.mass, self.protons)
    }
}

/// A single energy level of a nuclide
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Level {
    /// Excitation energy of the level (keV)
    pub energy: Quantity,
    /// Half-life of the level
    pub half_life: Quantity,
    /// Decay branch probabilities keyed by raw label
    pub decay_ratio: DecayRatio,
}

impl EnergyLevel for Level {
    fn half_life(&self) -> Quantity {
        self.half_life
    }

    fn decay_ratio(&self) -> &DecayRatio {
        &self.decay_ratio
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let branches = self
            .decay_ratio
            .iter()
            .map(|(label, p)| f!("{label}={p}"))
            .collect::<Vec<String>>()
            .join(", ");

        write!(
            f,
            "Level {}, half-life {} [{branches}]",
            self.energy, self.half_life
        )
    }
}

/// Nuclide with the full list of adopted levels
///
/// ```rust
/// # use isochart_ensdf::{Isotope, Level, Nuclide, Quantity, Unit};
/// let mut level = Level::default();
/// level.half_life = Quantity::new(12.32, Some(Unit::Year));
/// level
///     .decay_ratio
///     .insert("B-".to_string(), Quantity::new(100.0, Some(Unit::Percent)));
///
/// let tritium = Nuclide {
///     protons: 1,
///     mass: 3,
///     levels: vec![level],
/// };
///
/// assert_eq!(tritium.neutrons(), 2);
/// assert_eq!(tritium.levels().len(), 1);
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Nuclide {
    /// Number of protons (Z)
    pub protons: u8,
    /// Mass number (A)
    pub mass: u16,
    /// Levels in provider order
    #[serde(default)]
    pub levels: Vec<Level>,
}

impl Nuclide {
    /// Number of neutrons (N = A - Z)
    pub fn neutrons(&self) -> u16 {
        self.mass.saturating_sub(self.protons as u16)
    }
}

impl Isotope for Nuclide {
    type Level = Level;

    fn protons(&self) -> u8 {
        self.protons
    }

    fn mass(&self) -> u16 {
        self.mass
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }
}
