//! Periodic table display metadata

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// external crates
use isochart_ensdf::ElementIndex;
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// internal modules
use crate::error::Result;

/// Display metadata for a single element
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Element {
    /// Full name, e.g. "Hydrogen"
    pub name: String,
    /// Element symbol, e.g. "H"
    pub symbol: String,
    /// Category used for grouping, e.g. "nonmetal"
    #[serde(rename = "type")]
    pub category: Option<String>,
    /// CPK convention display colour as hex without the `#`
    #[serde(rename = "cpkHexColor")]
    pub color: Option<String>,
    /// Standard atomic mass (u)
    pub mass: Option<f64>,
}

/// Element entry as found in periodic table files
///
/// Periodic table JSON files in the wild disagree on field names, so the
/// common spellings are all accepted.
#[derive(Deserialize, Debug)]
struct ElementEntry {
    name: String,
    symbol: String,
    #[serde(default, rename = "type", alias = "category", alias = "groupBlock")]
    category: Option<String>,
    #[serde(default, rename = "cpkHexColor", alias = "cpk-hex")]
    color: Option<String>,
    #[serde(
        default,
        alias = "atomicMass",
        alias = "atomic_mass",
        deserialize_with = "loose_number"
    )]
    mass: Option<f64>,
    #[serde(default, rename = "numberOfProtons", alias = "atomicNumber", alias = "number")]
    protons: Option<u8>,
}

/// Periodic table indexed by proton number
///
/// Slot `z` holds the element with `z` protons, or `None` where nothing is
/// known (including slot 0).
///
/// ```rust
/// # use isochart_dataset::ElementTable;
/// let table = ElementTable::from_json_str(r#"[
///     null,
///     { "name": "Hydrogen", "symbol": "H", "numberOfProtons": 1,
///       "groupBlock": "nonmetal", "cpkHexColor": "FFFFFF", "atomicMass": "1.00794(4)" },
///     { "name": "Helium", "symbol": "He", "numberOfProtons": 2 }
/// ]"#).unwrap();
///
/// assert_eq!(table.get(1).unwrap().mass, Some(1.00794));
/// assert_eq!(table.get(2).unwrap().category, None);
/// assert!(table.get(0).is_none());
/// assert_eq!(table.index().protons("He").unwrap(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ElementTable {
    elements: Vec<Option<Element>>,
}

impl ElementTable {
    /// Read a periodic table from a JSON array
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let entries: Vec<Option<ElementEntry>> = serde_json::from_reader(reader)?;
        debug!("Read {} element entries", entries.len());
        Ok(Self::from_entries(entries))
    }

    /// Parse a periodic table from a JSON array string
    pub fn from_json_str(s: &str) -> Result<Self> {
        let entries: Vec<Option<ElementEntry>> = serde_json::from_str(s)?;
        Ok(Self::from_entries(entries))
    }

    /// Place every entry at the slot for its proton number
    ///
    /// Entries without a proton number keep their position in the list.
    fn from_entries(entries: Vec<Option<ElementEntry>>) -> Self {
        let mut elements: Vec<Option<Element>> = Vec::with_capacity(entries.len());

        for (position, entry) in entries.into_iter().enumerate() {
            let Some(entry) = entry else { continue };
            let z = entry.protons.map(usize::from).unwrap_or(position);

            if elements.len() <= z {
                elements.resize(z + 1, None);
            }

            if elements[z].is_some() {
                warn!("Duplicate element for Z={z}, keeping \"{}\"", entry.symbol);
            }

            elements[z] = Some(Element {
                name: entry.name,
                symbol: entry.symbol,
                category: entry.category,
                color: entry.color,
                mass: entry.mass,
            });
        }

        Self { elements }
    }

    /// Element with the given number of protons
    pub fn get(&self, protons: u8) -> Option<&Element> {
        self.elements.get(protons as usize).and_then(|e| e.as_ref())
    }

    /// Full list of slots in proton order
    pub fn elements(&self) -> &[Option<Element>] {
        &self.elements
    }

    /// Symbol lookup built from the table
    pub fn index(&self) -> ElementIndex {
        ElementIndex::from_symbols(
            self.elements
                .iter()
                .enumerate()
                .filter_map(|(z, e)| e.as_ref().map(|e| (z as u8, e.symbol.as_str()))),
        )
    }
}

/// Accept a number, a numeric string, or a decorated string such as
/// `"1.00794(4)"` or `"[209]"`
fn loose_number<'de, D>(deserializer: D) -> core::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let digits: String = s
                .trim_start_matches('[')
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            digits.parse().ok()
        }
        _ => None,
    })
}
