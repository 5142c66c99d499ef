//! Aggregation of raw decay branches into alpha and beta

// external crates
use isochart_ensdf::{DecayRatio, Unit};
use serde::Serialize;

// internal modules
use crate::error::{Error, Result};

/// Raw branch labels counted as alpha decay
pub const ALPHA_ALIASES: &[&str] = &["A"];

/// Raw branch labels counted as beta decay
///
/// Beta-minus, beta-minus with delayed neutron emission, and electron capture
/// with positron emission are all treated as one channel.
pub const BETA_ALIASES: &[&str] = &["B-", "B-N", "EC+%B+"];

/// The two decay channels tracked
///
/// ```rust
/// # use isochart_decay::Category;
/// assert!(Category::Alpha.aliases().contains(&"A"));
/// assert!(Category::Beta.aliases().contains(&"B-N"));
/// assert!(!Category::Beta.aliases().contains(&"IT"));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Emission of a helium nucleus
    Alpha,
    /// Electron or positron emission and close variants
    Beta,
}

impl Category {
    /// Raw branch labels belonging to the category
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Category::Alpha => ALPHA_ALIASES,
            Category::Beta => BETA_ALIASES,
        }
    }

    /// Total probability of the category in a decay ratio mapping
    pub fn aggregate(&self, decay_ratio: &DecayRatio) -> Result<f64> {
        aggregate(decay_ratio, self.aliases())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::Alpha => write!(f, "alpha"),
            Category::Beta => write!(f, "beta"),
        }
    }
}

/// Sum the probability of every alias present in the mapping, as a fraction
///
/// Absent aliases contribute nothing, and neither do values that were never
/// measured (`NaN`). A value in a unit that is not a probability fails.
///
/// ```rust
/// # use isochart_decay::aggregate;
/// # use isochart_ensdf::{DecayRatio, Quantity, Unit};
/// let mut ratio = DecayRatio::new();
/// ratio.insert("B-".into(), Quantity::new(45.0, Some(Unit::Percent)));
/// ratio.insert("EC+%B+".into(), Quantity::new(2.0, Some(Unit::Percent)));
/// ratio.insert("IT".into(), Quantity::new(53.0, Some(Unit::Percent)));
///
/// let beta = aggregate(&ratio, &["B-", "B-N", "EC+%B+"]).unwrap();
/// assert!((beta - 0.47).abs() < 1e-12);
/// ```
pub fn aggregate(decay_ratio: &DecayRatio, aliases: &[&str]) -> Result<f64> {
    let mut total = 0.0;

    for alias in aliases {
        let Some(quantity) = decay_ratio.get(*alias) else {
            continue;
        };

        let value = match quantity.unit {
            // plain numbers are taken to be fractions already
            None => quantity.value,
            Some(_) => {
                quantity
                    .cast_to(Unit::Fraction)
                    .map_err(|source| Error::BranchNotProbability {
                        label: alias.to_string(),
                        source,
                    })?
            }
        };

        if !value.is_nan() {
            total += value;
        }
    }

    Ok(total)
}

/// Alpha and beta fractions for a single level
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Branching {
    /// Fraction decaying by alpha emission
    pub alpha: f64,
    /// Fraction decaying by beta emission
    pub beta: f64,
}

impl Branching {
    /// New branching from explicit fractions
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Aggregate both categories from a decay ratio mapping
    pub fn from_ratio(decay_ratio: &DecayRatio) -> Result<Self> {
        Ok(Self {
            alpha: Category::Alpha.aggregate(decay_ratio)?,
            beta: Category::Beta.aggregate(decay_ratio)?,
        })
    }

    /// Combined alpha and beta fraction
    pub fn total(&self) -> f64 {
        self.alpha + self.beta
    }

    /// True if neither channel reaches the minimum fraction
    ///
    /// Both comparisons are strict, so a channel sitting exactly on the
    /// minimum counts as present.
    pub fn is_negligible(&self, minimum: f64) -> bool {
        self.alpha < minimum && self.beta < minimum
    }
}

impl std::fmt::Display for Branching {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "alpha={}, beta={}", self.alpha, self.beta)
    }
}
