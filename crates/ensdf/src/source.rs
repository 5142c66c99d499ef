//! Common interface for anything able to provide nuclide data

// internal modules
use crate::error::Result;
use crate::nuclide::{Isotope, IsotopeId};

/// Provider of nuclide level data
///
/// Implementors only have to answer two questions: which nuclides do you know
/// about, and what are the levels for one of them. Providers are shared
/// between worker threads, so must be `Sync`.
pub trait NuclideSource: Sync {
    /// Nuclide representation handed out by the provider
    type Nuclide: Isotope;

    /// Construct the nuclide for a mass and proton number
    ///
    /// Not every pair is a valid nuclide in every database, so failure here is
    /// routine and callers are expected to skip the pair.
    fn nuclide(&self, mass: u16, protons: u8) -> Result<Self::Nuclide>;

    /// Every nuclide identity the provider can be asked about
    fn indexed(&self) -> Result<Vec<IsotopeId>>;
}
