//! Result and Error types for the nuclide provider module

use crate::units::{Dimension, Unit};

/// Type alias for `Result<T, ensdf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `isochart-ensdf`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure during GET request to IAEA API
    #[error("request to IAEA API failed")]
    FailedRequest(#[from] minreq::Error),

    /// Failure to (de)serialise a JSON archive
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to read the CSV data returned by the IAEA
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// Failure to serialize/deserialize a byte stream
    #[error("failed binary (de)serialization")]
    FailedBinaryOp(#[from] Box<bincode::ErrorKind>),

    /// Generic error type for nom parser results
    #[error("parser failed: {0}")]
    ParseError(String),

    /// Unit symbol not in the known unit table
    #[error("unknown unit \"{0}\"")]
    UnknownUnit(String),

    /// Attempt to cast between units of different dimensions
    #[error("can not convert {from} ({from_dim:?}) to {to} ({to_dim:?})")]
    IncompatibleUnits {
        from: Unit,
        from_dim: Dimension,
        to: Unit,
        to_dim: Dimension,
    },

    /// Attempt to cast a quantity that has no unit attached
    #[error("quantity has no unit to convert from")]
    MissingUnit,

    /// Proton number is outside of the known element list
    #[error("no element known with {protons} protons")]
    UnknownElement { protons: u8 },

    /// Element symbol is not in the known element list
    #[error("no element known with symbol \"{symbol}\"")]
    UnknownSymbol { symbol: String },

    /// The provider has no nuclide for this mass and proton number
    #[error("no nuclide with A={mass}, Z={protons} in the database")]
    NotInDatabase { mass: u16, protons: u8 },
}
