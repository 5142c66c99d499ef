// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// external crates
use log::{debug, warn};

// internal modules
use crate::error::Result;

/// Natural abundance of isotopes, in percent
///
/// Keys are isotope symbols such as `O-16`. A `None` value marks an isotope
/// that exists but has no natural abundance to speak of.
///
/// ```rust
/// # use isochart_dataset::AbundanceTable;
/// let table = AbundanceTable::from_json_str(r#"{ "O-16": 99.757, "Tc-98": null }"#).unwrap();
///
/// assert_eq!(table.get("O-16"), Some(Some(99.757)));
/// assert_eq!(table.get("Tc-98"), Some(None));
/// assert_eq!(table.get("O-18"), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AbundanceTable {
    entries: BTreeMap<String, Option<f64>>,
}

impl AbundanceTable {
    /// Read the table from a JSON object of symbol to percentage
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let entries = serde_json::from_reader(reader)?;
        Ok(Self::new(entries))
    }

    /// Parse the table from a JSON object string
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(s)?))
    }

    /// Build the table from symbol to percentage pairs
    pub fn new(entries: BTreeMap<String, Option<f64>>) -> Self {
        for (symbol, value) in &entries {
            if let Some(percent) = value.filter(|p| !(0.0..=100.0).contains(p)) {
                warn!("Abundance of {percent}% for {symbol} is outside of 0-100%");
            }
        }
        debug!("{} abundance entries", entries.len());
        Self { entries }
    }

    /// Abundance entry for a symbol, `None` if not in the table at all
    pub fn get(&self, symbol: &str) -> Option<Option<f64>> {
        self.entries.get(symbol).copied()
    }

    /// Iterate over every entry in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
