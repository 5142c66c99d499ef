//! `isochart` builds the isotope decay and abundance dataset behind the
//! isochart web app
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of the pipeline crates.
#[doc(inline)]
pub use isochart_ensdf as ensdf;

#[doc(inline)]
pub use isochart_decay as decay;

#[doc(inline)]
pub use isochart_dataset as dataset;
