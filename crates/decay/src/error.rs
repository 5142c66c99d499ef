//! Result and Error types for the decay module

/// Type alias for `Result<T, decay::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `isochart-decay` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A decay branch probability could not be read as a fraction
    #[error("branch \"{label}\" is not a probability")]
    BranchNotProbability {
        label: String,
        source: isochart_ensdf::Error,
    },

    /// Processing an isotope panicked
    #[error("processing panicked: {0}")]
    Panicked(String),
}
