//! Lookup between proton numbers and element symbols

// internal modules
use crate::error::{Error, Result};
use crate::parsers::capitalise;

/// Two-way lookup between proton number and element symbol
///
/// Built once from whichever element list is available and then shared
/// read-only. Symbols are stored capitalised (`Co`, `U`) and looked up without
/// regard to case.
///
/// ```rust
/// # use isochart_ensdf::ElementIndex;
/// let index = ElementIndex::from_symbols([(8, "o"), (27, "CO")]);
///
/// assert_eq!(index.symbol(27).unwrap(), "Co");
/// assert_eq!(index.protons("co").unwrap(), 27);
/// assert_eq!(index.protons("O").unwrap(), 8);
///
/// // Unused slots and unknown symbols are errors
/// assert!(index.symbol(1).is_err());
/// assert!(index.protons("Xx").is_err());
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ElementIndex {
    symbols: Vec<Option<String>>,
}

impl ElementIndex {
    /// Build the index from `(protons, symbol)` pairs in any order
    pub fn from_symbols<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, S)>,
        S: AsRef<str>,
    {
        let mut symbols: Vec<Option<String>> = Vec::new();

        for (protons, symbol) in pairs {
            let z = protons as usize;
            if symbols.len() <= z {
                symbols.resize(z + 1, None);
            }
            symbols[z] = Some(capitalise(symbol.as_ref()));
        }

        Self { symbols }
    }

    /// Element symbol for a proton number
    pub fn symbol(&self, protons: u8) -> Result<&str> {
        self.symbols
            .get(protons as usize)
            .and_then(|s| s.as_deref())
            .ok_or(Error::UnknownElement { protons })
    }

    /// Proton number for an element symbol
    pub fn protons(&self, symbol: &str) -> Result<u8> {
        let target = capitalise(symbol);
        self.symbols
            .iter()
            .position(|s| s.as_deref() == Some(target.as_str()))
            .map(|z| z as u8)
            .ok_or_else(|| Error::UnknownSymbol {
                symbol: symbol.to_string(),
            })
    }

    /// Number of elements known
    pub fn len(&self) -> usize {
        self.symbols.iter().flatten().count()
    }

    /// True if no elements are known
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(protons, symbol)` pairs in proton order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.symbols
            .iter()
            .enumerate()
            .filter_map(|(z, s)| s.as_deref().map(|s| (z as u8, s)))
    }
}
