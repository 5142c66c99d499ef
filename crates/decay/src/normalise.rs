//! Tolerance check and rescaling of alpha/beta fractions

// internal modules
use crate::branch::Branching;

/// Slack on either edge of the tolerance band for rounding in unit conversion
const EDGE_EPSILON: f64 = 1e-9;

/// Branching whose total falls outside of the tolerance band
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutOfTolerance {
    /// The branching as measured
    pub branching: Branching,
    /// Tolerance that was applied
    pub tolerance: f64,
}

impl std::fmt::Display for OutOfTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "alpha + beta = {} is not within {} of 1 ({})",
            self.branching.total(),
            self.tolerance,
            self.branching
        )
    }
}

/// Check the total is close to 1 and rescale so that it is exactly 1
///
/// Only two channels are tracked, so whatever is missing from the total
/// (minor branches such as spontaneous fission) is shared proportionally
/// between alpha and beta. A total outside of `[1 - tolerance, 1 + tolerance]`
/// means the level is dominated by something else and is rejected.
///
/// ```rust
/// # use isochart_decay::{normalise, Branching};
/// // 98% alpha becomes pure alpha
/// let pure = normalise(Branching::new(0.98, 0.0), 0.1).unwrap();
/// assert_eq!(pure, Branching::new(1.0, 0.0));
///
/// // 47% beta is too far from 1 to trust
/// assert!(normalise(Branching::new(0.0, 0.47), 0.1).is_err());
/// ```
pub fn normalise(branching: Branching, tolerance: f64) -> Result<Branching, OutOfTolerance> {
    let total = branching.total();

    // percentages scaled to fractions can land a few ULP outside the edges
    let band = (1.0 - tolerance - EDGE_EPSILON)..=(1.0 + tolerance + EDGE_EPSILON);
    if !band.contains(&total) {
        return Err(OutOfTolerance {
            branching,
            tolerance,
        });
    }

    Ok(Branching {
        alpha: branching.alpha / total,
        beta: branching.beta / total,
    })
}
