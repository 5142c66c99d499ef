//! Nuclide level data for the isochart decay pipeline
//!
//! This crate is the boundary between the decay pipeline and wherever nuclear
//! structure data actually comes from. Data are made available by either:
//! - Loading a pre-fetched [Archive] (recommended)
//! - Fetching directly from the [Iaea] API if an internet connection is
//!   available
//!
//! Fetch requests for large numbers of nuclides are parallelised.
//!
//! ## Implementation
//!
//! Every provider implements [NuclideSource], handing out nuclides that
//! implement [Isotope]. An isotope is an ordered list of levels, each of which
//! implements [EnergyLevel], reporting a half-life and a mapping of raw decay
//! branch labels to probabilities.
//!
//! Both half-lives and probabilities are [Quantity] values carrying a [Unit],
//! so that mis-encoded data (a level width in `keV` where a half-life was
//! expected, for example) can be caught by the caller.
//!
//! ```rust
//! # use isochart_ensdf::{Archive, EnergyLevel, Isotope, NuclideSource, Unit};
//! let archive: Archive = serde_json::from_str::<Vec<_>>(r#"[
//!     {
//!         "protons": 27,
//!         "mass": 60,
//!         "levels": [{
//!             "half_life": { "value": 5.2714, "unit": "y" },
//!             "decay_ratio": { "B-": { "value": 100, "unit": "%" } }
//!         }]
//!     }
//! ]"#)
//! .map(Archive::new)
//! .unwrap();
//!
//! let cobalt60 = archive.nuclide(60, 27).unwrap();
//! let ground = &cobalt60.levels()[0];
//!
//! // Roughly 166 million seconds
//! let seconds = ground.half_life().cast_to(Unit::Second).unwrap();
//! assert!((seconds - 1.6635e8).abs() < 1e5);
//! ```

// Modules
mod archive;
mod element;
mod error;
mod fetch;
mod nuclide;
mod parsers;
mod source;
mod units;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use archive::Archive;

#[doc(inline)]
pub use element::ElementIndex;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use fetch::Iaea;

#[doc(inline)]
pub use nuclide::{DecayRatio, EnergyLevel, Isotope, IsotopeId, Level, Nuclide};

#[doc(inline)]
pub use parsers::{capitalise, split_symbol};

#[doc(inline)]
pub use source::NuclideSource;

#[doc(inline)]
pub use units::{Dimension, Quantity, Unit};
