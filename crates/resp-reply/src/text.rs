//! Text decoding for reply payloads.

use crate::error::DataError;

/// Decodes reply payload bytes into text.
///
/// The decoder stands in for the process-wide charset choice: the host
/// application picks one implementation and threads it through
/// [`convert_with`](crate::convert_with) at its call sites. The crate
/// itself holds no encoding state.
pub trait TextDecoder {
    fn decode(&self, payload: &[u8]) -> Result<String, DataError>;
}

/// Strict UTF-8 decoding. Invalid payload bytes fail the conversion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8;

impl TextDecoder for Utf8 {
    fn decode(&self, payload: &[u8]) -> Result<String, DataError> {
        std::str::from_utf8(payload)
            .map(str::to_owned)
            .map_err(|e| DataError::InvalidText(e.to_string()))
    }
}

/// Lossy UTF-8 decoding. Invalid sequences become U+FFFD instead of
/// failing, for callers that treat bulk payloads as best-effort text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8Lossy;

impl TextDecoder for Utf8Lossy {
    fn decode(&self, payload: &[u8]) -> Result<String, DataError> {
        Ok(String::from_utf8_lossy(payload).into_owned())
    }
}
