//! Choice of the representative level for an isotope

// external crates
use isochart_ensdf::{EnergyLevel, Unit};
use log::trace;

// internal modules
use crate::branch::Branching;
use crate::error::Result;
use crate::normalise::{normalise, OutOfTolerance};

/// Thresholds applied when deciding whether a level is usable
///
/// ```rust
/// # use isochart_decay::Criteria;
/// let criteria = Criteria::default();
/// assert_eq!(criteria.min_branch, 0.01);
/// assert_eq!(criteria.tolerance, 0.1);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Criteria {
    /// A level needs at least this alpha or beta fraction to count
    pub min_branch: f64,
    /// Allowed distance of alpha + beta from 1
    pub tolerance: f64,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            min_branch: 0.01,
            tolerance: 0.1,
        }
    }
}

/// Outcome of checking a single level
#[derive(Debug, Clone, PartialEq)]
pub enum Usability {
    /// Half-life is `NaN` or has no unit
    UnknownHalfLife,
    /// Half-life unit is not a time, e.g. a level width
    NotTime(Unit),
    /// Neither alpha nor beta reaches the minimum fraction
    NoBranches(Branching),
    /// Alpha and beta do not account for the level's decay
    OutOfTolerance(OutOfTolerance),
    /// Level can be reported, with normalised branching
    Usable {
        /// Half-life (s)
        half_life: f64,
        /// Normalised alpha and beta fractions
        branching: Branching,
    },
}

/// The level chosen to represent an isotope
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candidate {
    /// Index of the level in provider order
    pub level: usize,
    /// Half-life (s)
    pub half_life: f64,
    /// Normalised alpha and beta fractions
    pub branching: Branching,
}

/// A level passed over because its branching was out of tolerance
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rejection {
    /// Index of the level in provider order
    pub level: usize,
    /// The branching as measured
    pub branching: Branching,
}

/// Result of walking an isotope's levels
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selection {
    /// First usable level, if any
    pub candidate: Option<Candidate>,
    /// Levels rejected by the tolerance check before the candidate was found
    pub rejections: Vec<Rejection>,
}

/// Decide whether a level can be used to report decay modes
///
/// Checks are made in order: the half-life must be known, the half-life must
/// be a time, at least one of alpha or beta must reach `min_branch`, and alpha
/// plus beta must be within `tolerance` of 1.
///
/// Errors only on malformed branch data, such as a probability given in `keV`.
pub fn assess<L: EnergyLevel>(level: &L, criteria: &Criteria) -> Result<Usability> {
    let half_life = level.half_life();

    let Some(unit) = half_life.unit.filter(|_| !half_life.value.is_nan()) else {
        return Ok(Usability::UnknownHalfLife);
    };

    let Ok(seconds) = half_life.cast_to(Unit::Second) else {
        return Ok(Usability::NotTime(unit));
    };

    let branching = Branching::from_ratio(level.decay_ratio())?;
    if branching.is_negligible(criteria.min_branch) {
        return Ok(Usability::NoBranches(branching));
    }

    Ok(match normalise(branching, criteria.tolerance) {
        Ok(branching) => Usability::Usable {
            half_life: seconds,
            branching,
        },
        Err(rejected) => Usability::OutOfTolerance(rejected),
    })
}

/// Pick the first usable level in provider order
///
/// Providers list the ground state first and order by how well characterised
/// a level is, so the first usable level is taken as the best one. No usable
/// level is not an error; the isotope is either stable or not characterised.
///
/// ```rust
/// # use isochart_decay::{select_level, Branching, Criteria};
/// # use isochart_ensdf::{Level, Quantity, Unit};
/// let level = |half_life: Quantity, branches: &[(&str, f64)]| Level {
///     half_life,
///     decay_ratio: branches
///         .iter()
///         .map(|(l, p)| (l.to_string(), Quantity::new(*p, Some(Unit::Percent))))
///         .collect(),
///     ..Default::default()
/// };
///
/// let levels = vec![
///     // no half-life unit
///     level(Quantity::new(1.0, None), &[("A", 100.0)]),
///     // 47% beta is out of tolerance
///     level(Quantity::new(1.0, Some(Unit::Second)), &[("B-", 45.0), ("EC+%B+", 2.0)]),
///     // usable
///     level(Quantity::new(2.0, Some(Unit::Minute)), &[("A", 98.0)]),
/// ];
///
/// let selection = select_level(&levels, &Criteria::default()).unwrap();
/// let candidate = selection.candidate.unwrap();
///
/// assert_eq!(candidate.level, 2);
/// assert_eq!(candidate.half_life, 120.0);
/// assert_eq!(candidate.branching, Branching::new(1.0, 0.0));
/// assert_eq!(selection.rejections.len(), 1);
/// ```
pub fn select_level<L: EnergyLevel>(levels: &[L], criteria: &Criteria) -> Result<Selection> {
    let mut selection = Selection::default();

    for (i, level) in levels.iter().enumerate() {
        match assess(level, criteria)? {
            Usability::Usable {
                half_life,
                branching,
            } => {
                trace!("Level {i} selected with {branching}");
                selection.candidate = Some(Candidate {
                    level: i,
                    half_life,
                    branching,
                });
                break;
            }
            Usability::OutOfTolerance(rejected) => {
                trace!("Level {i} rejected, {rejected}");
                selection.rejections.push(Rejection {
                    level: i,
                    branching: rejected.branching,
                });
            }
            other => trace!("Level {i} skipped, {other:?}"),
        }
    }

    Ok(selection)
}
