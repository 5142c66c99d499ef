//! Physical units and quantities attached to level data

// standard library
use std::format as f;

// external crates
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// internal modules
use crate::error::{Error, Result};

/// Number of seconds in a year, using the tropical year of 365.2422 days
const YEAR: f64 = 365.2422 * 86_400.0;

/// Physical dimension of a [Unit]
///
/// Conversions are only possible between units sharing a dimension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Base unit is the second
    Time,
    /// Base unit is the electron-volt, used for level widths
    Energy,
    /// Base unit is a plain fraction
    Probability,
}

/// Units that may be attached to a level half-life or a decay ratio
///
/// The `FromStr` trait accepts both the IAEA style (`ms`, `keV`) and the
/// upper case ENSDF style (`MS`, `KEV`) of symbol.
///
/// ```rust
/// # use isochart_ensdf::Unit;
/// # use std::str::FromStr;
/// assert_eq!(Unit::from_str("ms").unwrap(), Unit::Millisecond);
/// assert_eq!(Unit::from_str("KEV").unwrap(), Unit::KiloElectronVolt);
/// assert_eq!(Unit::from_str("%").unwrap(), Unit::Percent);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Attosecond,
    Femtosecond,
    Picosecond,
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Year,
    Kiloyear,
    Megayear,
    Gigayear,
    ElectronVolt,
    KiloElectronVolt,
    MegaElectronVolt,
    Percent,
    Fraction,
}

impl Unit {
    /// Symbol used when writing the unit out
    pub fn symbol(&self) -> &str {
        match self {
            Unit::Attosecond => "as",
            Unit::Femtosecond => "fs",
            Unit::Picosecond => "ps",
            Unit::Nanosecond => "ns",
            Unit::Microsecond => "us",
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Year => "y",
            Unit::Kiloyear => "ky",
            Unit::Megayear => "My",
            Unit::Gigayear => "Gy",
            Unit::ElectronVolt => "eV",
            Unit::KiloElectronVolt => "keV",
            Unit::MegaElectronVolt => "MeV",
            Unit::Percent => "%",
            Unit::Fraction => "",
        }
    }

    /// Dimension of the unit
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::ElectronVolt | Unit::KiloElectronVolt | Unit::MegaElectronVolt => {
                Dimension::Energy
            }
            Unit::Percent | Unit::Fraction => Dimension::Probability,
            _ => Dimension::Time,
        }
    }

    /// Multiplier taking a value in this unit to the base unit of its dimension
    ///
    /// ```rust
    /// # use isochart_ensdf::Unit;
    /// assert_eq!(Unit::Hour.scale(), 3600.0);
    /// assert_eq!(Unit::Percent.scale(), 0.01);
    /// ```
    pub fn scale(&self) -> f64 {
        match self {
            Unit::Attosecond => 1e-18,
            Unit::Femtosecond => 1e-15,
            Unit::Picosecond => 1e-12,
            Unit::Nanosecond => 1e-9,
            Unit::Microsecond => 1e-6,
            Unit::Millisecond => 1e-3,
            Unit::Second => 1.0,
            Unit::Minute => 60.0,
            Unit::Hour => 3600.0,
            Unit::Day => 86_400.0,
            Unit::Year => YEAR,
            Unit::Kiloyear => 1e3 * YEAR,
            Unit::Megayear => 1e6 * YEAR,
            Unit::Gigayear => 1e9 * YEAR,
            Unit::ElectronVolt => 1.0,
            Unit::KiloElectronVolt => 1e3,
            Unit::MegaElectronVolt => 1e6,
            Unit::Percent => 0.01,
            Unit::Fraction => 1.0,
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "as" => Ok(Unit::Attosecond),
            "fs" => Ok(Unit::Femtosecond),
            "ps" => Ok(Unit::Picosecond),
            "ns" => Ok(Unit::Nanosecond),
            "us" | "µs" => Ok(Unit::Microsecond),
            "ms" => Ok(Unit::Millisecond),
            "s" => Ok(Unit::Second),
            "m" | "min" => Ok(Unit::Minute),
            "h" => Ok(Unit::Hour),
            "d" => Ok(Unit::Day),
            "y" => Ok(Unit::Year),
            "ky" => Ok(Unit::Kiloyear),
            "my" => Ok(Unit::Megayear),
            "gy" => Ok(Unit::Gigayear),
            "ev" => Ok(Unit::ElectronVolt),
            "kev" => Ok(Unit::KiloElectronVolt),
            "mev" => Ok(Unit::MegaElectronVolt),
            "%" => Ok(Unit::Percent),
            "" => Ok(Unit::Fraction),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<String> for Unit {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

/// A measured value with an optional physical unit
///
/// Values that were never measured are stored as `NaN` rather than wrapped in
/// an [Option], which keeps arithmetic on the common path simple. These are
/// written out as `null`.
///
/// ```rust
/// # use isochart_ensdf::{Quantity, Unit};
/// let half_life = Quantity::new(2.5, Some(Unit::Minute));
/// assert_eq!(half_life.cast_to(Unit::Second).unwrap(), 150.0);
///
/// // Energy widths can not be expressed as a time
/// let width = Quantity::new(2.5, Some(Unit::KiloElectronVolt));
/// assert!(width.cast_to(Unit::Second).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Measured value, `NaN` if not known
    #[serde(serialize_with = "nan_as_null", deserialize_with = "null_as_nan")]
    pub value: f64,
    /// Unit of the value, if one was given
    pub unit: Option<Unit>,
}

impl Default for Quantity {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Quantity {
    /// New quantity from a value and unit
    pub fn new(value: f64, unit: Option<Unit>) -> Self {
        Self { value, unit }
    }

    /// Quantity with no value and no unit
    pub fn unknown() -> Self {
        Self {
            value: f64::NAN,
            unit: None,
        }
    }

    /// True if both a numeric value and a unit are present
    pub fn is_defined(&self) -> bool {
        !self.value.is_nan() && self.unit.is_some()
    }

    /// Express the value in another unit of the same dimension
    ///
    /// A `NaN` value converts to `NaN`. Fails if there is no unit to convert
    /// from, or if the units do not share a [Dimension].
    pub fn cast_to(&self, target: Unit) -> Result<f64> {
        let unit = self.unit.ok_or(Error::MissingUnit)?;

        if unit.dimension() != target.dimension() {
            return Err(Error::IncompatibleUnits {
                from: unit,
                from_dim: unit.dimension(),
                to: target,
                to_dim: target.dimension(),
            });
        }

        Ok(self.value * unit.scale() / target.scale())
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let value = if self.value.is_nan() {
            "none".to_string()
        } else {
            f!("{}", self.value)
        };

        match self.unit {
            Some(unit) if unit != Unit::Fraction => write!(f, "{value} {unit}"),
            _ => write!(f, "{value}"),
        }
    }
}

fn nan_as_null<S>(value: &f64, serializer: S) -> core::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = if value.is_nan() { None } else { Some(*value) };
    value.serialize(serializer)
}

fn null_as_nan<'de, D>(deserializer: D) -> core::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensdf_and_iaea_symbols_agree() {
        for (upper, lower) in [("Y", "y"), ("MS", "ms"), ("MEV", "MeV"), ("M", "m")] {
            assert_eq!(upper.parse::<Unit>().unwrap(), lower.parse::<Unit>().unwrap());
        }
        assert!("furlong".parse::<Unit>().is_err());
    }

    #[test]
    fn percent_to_fraction() {
        let branch = Quantity::new(45.0, Some(Unit::Percent));
        assert!((branch.cast_to(Unit::Fraction).unwrap() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn missing_unit_does_not_cast() {
        let q = Quantity::new(1.0, None);
        assert!(matches!(q.cast_to(Unit::Second), Err(Error::MissingUnit)));
        assert!(!q.is_defined());
    }

    #[test]
    fn nan_is_written_as_null() {
        let q = Quantity::unknown();
        assert_eq!(
            serde_json::to_string(&q).unwrap(),
            r#"{"value":null,"unit":null}"#
        );

        let back: Quantity = serde_json::from_str(r#"{"value":null,"unit":"y"}"#).unwrap();
        assert!(back.value.is_nan());
        assert_eq!(back.unit, Some(Unit::Year));
    }
}
