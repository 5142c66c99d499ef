// standard library
use std::collections::BTreeMap;
use std::format as f;

// external crates
use isochart_decay::DecayRecord;
use isochart_ensdf::{split_symbol, ElementIndex};
use log::{debug, info};
use serde::{Deserialize, Serialize};

// internal modules
use crate::abundance::AbundanceTable;
use crate::error::{Error, Result};

/// Final record for an isotope in the dataset
///
/// Decay fields are only present for radioactive isotopes with a usable
/// level. `half_life` is always written, as `null` where unknown, while
/// `alpha` and `beta` are left out entirely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IsotopeRecord {
    /// Display symbol, e.g. `U-238`
    pub sym: String,
    /// Number of protons (Z)
    pub protons: u8,
    /// Mass number (A)
    pub mass: u16,
    /// Half-life (s)
    pub half_life: Option<f64>,
    /// Fraction decaying by alpha emission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    /// Fraction decaying by beta emission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    /// Natural abundance as a fraction
    pub abundance: f64,
}

impl From<DecayRecord> for IsotopeRecord {
    fn from(record: DecayRecord) -> Self {
        Self {
            sym: record.symbol,
            protons: record.protons,
            mass: record.mass,
            half_life: Some(record.half_life),
            alpha: Some(record.alpha),
            beta: Some(record.beta),
            abundance: 0.0,
        }
    }
}

/// Combine decay records with natural abundances
///
/// - Every decay record is kept, with an abundance of 0 unless the table says
///   otherwise
/// - Table entries without a decay record become stub records with no decay
///   data, as long as they have an abundance value
/// - Table entries with neither are dropped
///
/// Fails if a table key is not an isotope symbol, if two keys name the same
/// isotope (`O-16` and `o16`), or if a stub refers to an element missing from
/// the `index`.
///
/// ```rust
/// # use std::collections::BTreeMap;
/// # use isochart_dataset::{merge, AbundanceTable};
/// # use isochart_ensdf::ElementIndex;
/// let table = AbundanceTable::from_json_str(r#"{ "O-16": 99.76, "Tc-98": null }"#).unwrap();
/// let index = ElementIndex::from_symbols([(8, "O"), (43, "Tc")]);
///
/// let merged = merge(BTreeMap::new(), &table, &index).unwrap();
///
/// let oxygen = &merged["O-16"];
/// assert_eq!(oxygen.protons, 8);
/// assert_eq!(oxygen.half_life, None);
/// assert!((oxygen.abundance - 0.9976).abs() < 1e-12);
///
/// assert!(!merged.contains_key("Tc-98"));
/// ```
pub fn merge(
    records: BTreeMap<String, DecayRecord>,
    abundances: &AbundanceTable,
    index: &ElementIndex,
) -> Result<BTreeMap<String, IsotopeRecord>> {
    let mut merged: BTreeMap<String, IsotopeRecord> = records
        .into_iter()
        .map(|(symbol, record)| (symbol, record.into()))
        .collect();

    let mut stubs = 0;
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();

    for (key, percent) in abundances.iter() {
        let (element, mass) = split_symbol(key).map_err(|source| Error::MalformedSymbol {
            symbol: key.to_string(),
            source,
        })?;
        let symbol = f!("{element}-{mass}");

        if let Some(first) = seen.insert(symbol.clone(), key) {
            return Err(Error::DuplicateSymbol {
                symbol,
                first: first.to_string(),
                second: key.to_string(),
            });
        }

        if let Some(existing) = merged.get_mut(&symbol) {
            existing.abundance = percent.map(|p| p / 100.0).unwrap_or(0.0);
            continue;
        }

        let Some(percent) = percent else {
            debug!("{symbol} has no decay data or abundance, dropping");
            continue;
        };

        let protons = index
            .protons(&element)
            .map_err(|source| Error::UnknownElement {
                symbol: key.to_string(),
                source,
            })?;

        merged.insert(
            symbol.clone(),
            IsotopeRecord {
                sym: symbol,
                protons,
                mass,
                half_life: None,
                alpha: None,
                beta: None,
                abundance: percent / 100.0,
            },
        );
        stubs += 1;
    }

    info!("Added {stubs} stable isotopes from the abundance table");

    Ok(merged)
}
