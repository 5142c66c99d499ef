//! Parallel processing of every isotope a provider knows about

// standard library
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

// external crates
use isochart_ensdf::{ElementIndex, Isotope, IsotopeId, NuclideSource};
use kdam::par_tqdm;
use log::{debug, info, warn};
use rayon::prelude::*;

// internal modules
use crate::error::Error;
use crate::record::DecayRecord;
use crate::select::{select_level, Criteria, Rejection};

/// What happened to one isotope
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A usable level was found
    Record {
        record: DecayRecord,
        rejections: Vec<Rejection>,
    },
    /// No usable level, the isotope is stable or not characterised
    NoRecord {
        symbol: String,
        rejections: Vec<Rejection>,
    },
    /// The provider could not construct the isotope or it has no element
    Skipped { id: IsotopeId, reason: String },
    /// Something unexpected went wrong while processing the isotope
    Failed { id: IsotopeId, error: String },
}

/// Run the level selection for a single isotope
///
/// Provider failures and unknown elements are routine and give
/// [Outcome::Skipped]. Malformed level data gives [Outcome::Failed]. Neither is
/// returned as an error so that one bad isotope can not stop a batch.
pub fn process_isotope<S: NuclideSource>(
    source: &S,
    id: IsotopeId,
    index: &ElementIndex,
    criteria: &Criteria,
) -> Outcome {
    let nuclide = match source.nuclide(id.mass, id.protons) {
        Ok(nuclide) => nuclide,
        Err(e) => {
            debug!("Skipping {id}: {e}");
            return Outcome::Skipped {
                id,
                reason: e.to_string(),
            };
        }
    };

    let symbol = match nuclide.id().symbol(index) {
        Ok(symbol) => symbol,
        Err(e) => {
            debug!("Skipping {id}: {e}");
            return Outcome::Skipped {
                id,
                reason: e.to_string(),
            };
        }
    };

    let selection = match select_level(nuclide.levels(), criteria) {
        Ok(selection) => selection,
        Err(e) => {
            warn!("Exception while processing {symbol}: {}", describe(&e));
            return Outcome::Failed {
                id,
                error: describe(&e),
            };
        }
    };

    for rejection in &selection.rejections {
        warn!(
            "alpha + beta != 1 for {symbol} (level {}), ignoring: {}",
            rejection.level, rejection.branching
        );
    }

    match selection.candidate {
        Some(candidate) => {
            debug!("Finished processing {symbol:>6}");
            Outcome::Record {
                record: DecayRecord {
                    symbol,
                    protons: nuclide.protons(),
                    mass: nuclide.mass(),
                    half_life: candidate.half_life,
                    alpha: candidate.branching.alpha,
                    beta: candidate.branching.beta,
                },
                rejections: selection.rejections,
            }
        }
        None => {
            debug!("No alpha/beta decay level for {symbol}");
            Outcome::NoRecord {
                symbol,
                rejections: selection.rejections,
            }
        }
    }
}

/// Decay records and diagnostics for a whole batch
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Batch {
    /// Decay records keyed by isotope symbol
    pub records: BTreeMap<String, DecayRecord>,
    /// Isotopes with no usable level
    pub no_record: Vec<String>,
    /// Isotopes the provider could not construct
    pub skipped: Vec<(IsotopeId, String)>,
    /// Isotopes that failed unexpectedly
    pub failed: Vec<(IsotopeId, String)>,
    /// Every level rejected for being out of tolerance, by isotope symbol
    pub rejections: Vec<(String, Rejection)>,
}

impl Batch {
    /// Collect outcomes in any order into a batch
    pub fn from_outcomes<I: IntoIterator<Item = Outcome>>(outcomes: I) -> Self {
        let mut batch = Batch::default();

        for outcome in outcomes {
            match outcome {
                Outcome::Record { record, rejections } => {
                    batch.add_rejections(&record.symbol, rejections);
                    if let Some(old) = batch.records.insert(record.symbol.clone(), record) {
                        warn!("Duplicate record for {}, keeping the last", old.symbol);
                    }
                }
                Outcome::NoRecord { symbol, rejections } => {
                    batch.add_rejections(&symbol, rejections);
                    batch.no_record.push(symbol);
                }
                Outcome::Skipped { id, reason } => batch.skipped.push((id, reason)),
                Outcome::Failed { id, error } => batch.failed.push((id, error)),
            }
        }

        batch
    }

    fn add_rejections(&mut self, symbol: &str, rejections: Vec<Rejection>) {
        self.rejections
            .extend(rejections.into_iter().map(|r| (symbol.to_string(), r)));
    }

    /// Log a summary of the batch
    pub fn log_summary(&self) {
        info!("{} isotopes with decay records", self.records.len());
        info!("{} isotopes without alpha/beta decay", self.no_record.len());
        info!("{} isotopes skipped by the provider", self.skipped.len());

        if !self.rejections.is_empty() {
            warn!(
                "{} levels rejected as out of tolerance",
                self.rejections.len()
            );
        }

        if !self.failed.is_empty() {
            warn!("{} isotopes failed:", self.failed.len());
            for (id, error) in &self.failed {
                warn!("  - {id}: {error}");
            }
        }
    }
}

/// Process every isotope in parallel and collect the results
///
/// Runs on the current rayon thread pool, one task per isotope. Panics are
/// caught and recorded as failures of that isotope alone.
///
/// ```rust
/// # use isochart_decay::{run_batch, Criteria};
/// # use isochart_ensdf::{Archive, ElementIndex, Level, Nuclide, NuclideSource, Quantity, Unit};
/// let mut level = Level::default();
/// level.half_life = Quantity::new(4.468e9, Some(Unit::Year));
/// level.decay_ratio.insert("A".into(), Quantity::new(100.0, Some(Unit::Percent)));
///
/// let archive = Archive::new(vec![Nuclide { protons: 92, mass: 238, levels: vec![level] }]);
/// let index = ElementIndex::from_symbols([(92, "U")]);
/// let ids = archive.indexed().unwrap();
///
/// let batch = run_batch(&archive, &ids, &index, &Criteria::default(), false);
/// assert_eq!(batch.records["U-238"].alpha, 1.0);
/// ```
pub fn run_batch<S: NuclideSource>(
    source: &S,
    ids: &[IsotopeId],
    index: &ElementIndex,
    criteria: &Criteria,
    progress: bool,
) -> Batch {
    let task = |id: &IsotopeId| {
        catch_unwind(AssertUnwindSafe(|| {
            process_isotope(source, *id, index, criteria)
        }))
        .unwrap_or_else(|payload| {
            let error = panic_message(payload.as_ref());
            warn!("Exception while processing {id}: {error}");
            Outcome::Failed { id: *id, error }
        })
    };

    info!("Processing {} nuclides", ids.len());

    let outcomes: Vec<Outcome> = if progress {
        let outcomes = par_tqdm!(
            ids.par_iter().map(task),
            bar_format = "Processing nuclides: {count}/{total} [{rate:.2} nuc/s]  "
        )
        .collect();
        eprintln!();
        outcomes
    } else {
        ids.par_iter().map(task).collect()
    };

    Batch::from_outcomes(outcomes)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    describe(&Error::Panicked(message))
}

/// Error message including the chain of sources
fn describe(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(e) = source {
        message.push_str(": ");
        message.push_str(&e.to_string());
        source = e.source();
    }
    message
}
