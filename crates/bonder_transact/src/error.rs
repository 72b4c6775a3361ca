//! Error types for the bonder transact crate.
//!
//! These cover the failures that can happen before anything touches the network:
//! parsing a contract ABI, locating a function in it, encoding call data and
//! decoding the bond position dataset.

use snafu::Snafu;

/// Represents errors that can occur while describing or encoding a contract call.
#[derive(Debug, Snafu)]
pub enum BonderTransactError {
    #[snafu(display("Error ocurred while parsing the contract ABI: {message}"))]
    AbiParse { message: String },

    #[snafu(display("Function {name} is not part of the contract ABI"))]
    FunctionNotFound { name: String },

    #[snafu(display("Error ocurred while encoding call data for {function}: {message}"))]
    Encoding { function: String, message: String },

    #[snafu(display("Error ocurred while decoding the bond dataset: {source}"))]
    DatasetDecode { source: serde_json::Error },
}

impl From<serde_json::Error> for BonderTransactError {
    fn from(source: serde_json::Error) -> Self {
        BonderTransactError::DatasetDecode { source }
    }
}
