//! Result and Error types for the dataset module

/// Type alias for Result<T, dataset::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `isochart-dataset` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Failure to read or write JSON
    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    /// Abundance table key is not a valid isotope symbol
    #[error("abundance table entry \"{symbol}\" is not an isotope symbol")]
    MalformedSymbol {
        symbol: String,
        source: isochart_ensdf::Error,
    },

    /// Abundance table refers to an element missing from the element table
    #[error("abundance table entry \"{symbol}\" refers to an unknown element")]
    UnknownElement {
        symbol: String,
        source: isochart_ensdf::Error,
    },

    /// Two abundance table entries name the same isotope
    #[error("abundance table entries \"{first}\" and \"{second}\" are both {symbol}")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },
}
