//! Alpha/beta decay modes and half-lives from nuclide level data
//!
//! Nuclear structure databases describe an isotope as a list of energy levels,
//! each with its own half-life and any number of decay branches under a zoo of
//! labels. This crate reduces that to one [DecayRecord] per isotope: a
//! half-life in seconds and the fractions decaying by alpha and beta emission.
//!
//! ## Pipeline
//!
//! For every isotope:
//!
//! 1. [select_level()] walks the levels in provider order
//! 2. [Branching::from_ratio()] sums the raw branches into alpha and beta using
//!    the fixed [ALPHA_ALIASES] and [BETA_ALIASES]
//! 3. [normalise()] rejects levels where alpha + beta is far from 1 and
//!    rescales the rest to sum to exactly 1
//!
//! The first level to pass every check represents the isotope. Isotopes with
//! no such level are left out, as they are either stable or not characterised.
//!
//! [run_batch()] fans this out over every isotope on the rayon thread pool,
//! collecting records and diagnostics into a [Batch].
//!
//! ## Example
//!
//! ```rust
//! # use isochart_decay::{select_level, Criteria};
//! # use isochart_ensdf::{Level, Quantity, Unit};
//! let mut ground = Level::default();
//! ground.half_life = Quantity::new(5.2714, Some(Unit::Year));
//! ground
//!     .decay_ratio
//!     .insert("B-".into(), Quantity::new(100.0, Some(Unit::Percent)));
//!
//! let selection = select_level(&[ground], &Criteria::default()).unwrap();
//! let cobalt60 = selection.candidate.unwrap();
//!
//! assert_eq!(cobalt60.branching.alpha, 0.0);
//! assert_eq!(cobalt60.branching.beta, 1.0);
//! ```

// Modules
mod batch;
mod branch;
mod error;
mod normalise;
mod record;
mod select;

#[doc(inline)]
pub use batch::{process_isotope, run_batch, Batch, Outcome};

#[doc(inline)]
pub use branch::{aggregate, Branching, Category, ALPHA_ALIASES, BETA_ALIASES};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use normalise::{normalise, OutOfTolerance};

#[doc(inline)]
pub use record::DecayRecord;

#[doc(inline)]
pub use select::{assess, select_level, Candidate, Criteria, Rejection, Selection, Usability};
