//! Error types for reply conversion.

use thiserror::Error;

/// Error raised when a reply frame does not conform to the protocol
/// structure the conversion layer expects.
///
/// Conversion never recovers internally; the error propagates to the
/// caller, who decides whether to fail the surrounding request or tear
/// down the connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Simple string frame arrived without a payload
    #[error("unexpected null simple string")]
    NullSimpleString,

    /// Frame kind has no native value representation
    #[error("received unexpected reply type: {0}")]
    UnexpectedReplyType(&'static str),

    /// Payload bytes were not decodable under the configured text decoder
    #[error("undecodable text payload: {0}")]
    InvalidText(String),
}
