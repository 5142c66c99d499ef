// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// external crates
use log::info;
use serde::{Deserialize, Serialize};

// internal modules
use crate::element::{Element, ElementTable};
use crate::error::Result;
use crate::merge::IsotopeRecord;

/// The complete dataset handed to the presentation layer
///
/// Written out as a single JSON object:
///
/// ```json
/// {
///   "elements": [null, { "name": "Hydrogen", "symbol": "H", ... }, ...],
///   "isotopes": {
///     "H-3": { "sym": "H-3", "protons": 1, "mass": 3, "half_life": 388789632.0,
///              "alpha": 0.0, "beta": 1.0, "abundance": 0.0 },
///     ...
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    /// Element metadata indexed by proton number, `null` for unused slots
    pub elements: Vec<Option<Element>>,
    /// Isotope records keyed by display symbol
    pub isotopes: BTreeMap<String, IsotopeRecord>,
}

impl Dataset {
    /// Serialise to a compact JSON string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the dataset to a JSON file
    ///
    /// The compact form is the default as the file is bundled directly into the
    /// web application.
    pub fn write_json<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let f = BufWriter::new(File::create(path.as_ref())?);

        if pretty {
            serde_json::to_writer_pretty(f, self)?;
        } else {
            serde_json::to_writer(f, self)?;
        }

        info!(
            "Wrote {} elements and {} isotopes to {}",
            self.elements.iter().flatten().count(),
            self.isotopes.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Put the element table and merged isotopes together
pub fn assemble(table: &ElementTable, isotopes: BTreeMap<String, IsotopeRecord>) -> Dataset {
    Dataset {
        elements: table.elements().to_vec(),
        isotopes,
    }
}
