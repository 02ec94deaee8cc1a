//! # resp-reply — RESP reply decoding for client code
//!
//! Converts already-framed RESP reply messages into native values that
//! application code can use directly. This crate sits above a wire-level
//! RESP frame decoder: the decoder splits raw bytes into typed [`Frame`]s,
//! and `resp-reply` resolves each frame tree into one [`Value`] — a
//! string, a signed 64-bit integer, null, or an ordered sequence of
//! values mirroring the reply's nesting.
//!
//! ## Features
//!
//! - **Exhaustive dispatch**: the frame variants are a closed sum type,
//!   so the compiler checks every reply kind is handled
//! - **Exact null semantics**: null bulk strings and null arrays map to
//!   [`Value::Null`], never conflated with empty strings or empty arrays
//! - **Pluggable text decoding**: bulk payloads decode through an
//!   injected [`TextDecoder`], strict UTF-8 by default
//! - **All-or-nothing**: a malformed frame anywhere in the tree fails the
//!   whole conversion with a [`DataError`]
//!
//! ## Example
//!
//! ```rust
//! use resp_reply::{Frame, Value};
//!
//! // A reply tree as the wire decoder would hand it over
//! let reply = Frame::array(vec![
//!     Frame::simple("OK"),
//!     Frame::integer(42),
//!     Frame::null_bulk(),
//! ]);
//!
//! let value = resp_reply::convert(reply).unwrap();
//! assert_eq!(
//!     value,
//!     Value::Array(vec![Value::Str("OK".into()), Value::Int(42), Value::Null])
//! );
//! ```

mod convert;
mod error;
mod frame;
mod text;
mod value;

pub use convert::convert;
pub use convert::convert_with;
pub use error::DataError;
pub use frame::Frame;
pub use text::TextDecoder;
pub use text::Utf8;
pub use text::Utf8Lossy;
pub use value::Value;
