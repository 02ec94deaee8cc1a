//! Wire-level reply frames produced by the upstream RESP decoder.

use bytes::Bytes;

/// An already-parsed unit of RESP server output.
///
/// Frames come out of the wire decoder fully materialized; this crate only
/// reads them. Payload slots mirror the decoder's nullable buffers, so a
/// missing payload is representable even where the protocol forbids it —
/// conversion enforces the protocol invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Simple string: `+OK\r\n`
    ///
    /// The wire protocol guarantees simple strings always carry text; a
    /// `None` payload here is a decoder bug surfaced during conversion.
    Simple(Option<Bytes>),

    /// Error reply: `-ERR message\r\n`
    Error(Bytes),

    /// Integer: `:1000\r\n`
    Integer(i64),

    /// Bulk string: `$6\r\nfoobar\r\n`
    ///
    /// `None` is the null bulk string (`$-1\r\n`); a zero-length payload
    /// is the empty bulk string (`$0\r\n\r\n`). The two are distinct
    /// replies.
    Bulk(Option<Bytes>),

    /// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`
    ///
    /// `None` is the null array (`*-1\r\n`), distinct from an empty one.
    Array(Option<Vec<Frame>>),
}

impl Frame {
    /// Check if the frame is an error reply
    pub fn is_error(&self) -> bool {
        matches!(self, Frame::Error(_))
    }

    /// Check if the frame is a null bulk string or null array
    pub fn is_null(&self) -> bool {
        matches!(self, Frame::Bulk(None) | Frame::Array(None))
    }

    /// Protocol name of the frame kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Frame::Simple(_) => "simple string",
            Frame::Error(_) => "error",
            Frame::Integer(_) => "integer",
            Frame::Bulk(_) => "bulk string",
            Frame::Array(_) => "array",
        }
    }

    // Convenience constructors, mainly for decoders and tests

    /// Create a simple string frame
    pub fn simple(s: impl Into<Bytes>) -> Self {
        Frame::Simple(Some(s.into()))
    }

    /// Create an error frame
    pub fn error(e: impl Into<Bytes>) -> Self {
        Frame::Error(e.into())
    }

    /// Create an integer frame
    pub fn integer(i: i64) -> Self {
        Frame::Integer(i)
    }

    /// Create a bulk string frame
    pub fn bulk(b: impl Into<Bytes>) -> Self {
        Frame::Bulk(Some(b.into()))
    }

    /// Create a null bulk string frame
    pub fn null_bulk() -> Self {
        Frame::Bulk(None)
    }

    /// Create an array frame from an iterator of child frames
    pub fn array(children: impl IntoIterator<Item = Frame>) -> Self {
        Frame::Array(Some(children.into_iter().collect()))
    }

    /// Create a null array frame
    pub fn null_array() -> Self {
        Frame::Array(None)
    }
}
