//! Abundance merging and final dataset assembly
//!
//! Decay records only cover radioactive isotopes. This crate fills in the
//! rest of the chart from an independent natural abundance table and bundles
//! everything with periodic table metadata into a single [Dataset].
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use std::collections::BTreeMap;
//! # use isochart_dataset::{assemble, merge, AbundanceTable, ElementTable};
//! let elements = ElementTable::read_json("path/to/elements.json").unwrap();
//! let abundances = AbundanceTable::read_json("path/to/abundance.json").unwrap();
//!
//! // Decay records would normally come from isochart_decay::run_batch()
//! let records = BTreeMap::new();
//!
//! let isotopes = merge(records, &abundances, &elements.index()).unwrap();
//! let dataset = assemble(&elements, isotopes);
//! dataset.write_json("data.json", false).unwrap();
//! ```
//!
//! ## Input tables
//!
//! The element table is a JSON array of element objects (or `null`), each
//! placed at the slot for its `numberOfProtons`. The abundance table is a JSON
//! object of isotope symbol to percentage:
//!
//! ```json
//! { "H-1": 99.9885, "H-2": 0.0115, "Tc-98": null }
//! ```

mod abundance;
mod assemble;
mod element;
mod error;
mod merge;

#[doc(inline)]
pub use abundance::AbundanceTable;

#[doc(inline)]
pub use assemble::{assemble, Dataset};

#[doc(inline)]
pub use element::{Element, ElementTable};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use merge::{merge, IsotopeRecord};
