//! Reply frame to native value conversion.

use log::debug;

use crate::error::DataError;
use crate::frame::Frame;
use crate::text::TextDecoder;
use crate::text::Utf8;
use crate::value::Value;

/// Convert one reply frame tree into its native value, decoding text
/// payloads as strict UTF-8.
pub fn convert(frame: Frame) -> Result<Value, DataError> {
    convert_with(frame, &Utf8)
}

/// Convert one reply frame tree into its native value using the supplied
/// text decoder.
///
/// Conversion is a single stateless recursive descent: scalar frames map
/// directly, array frames re-enter the dispatch per child in reply order.
/// The first non-conforming frame anywhere in the tree fails the whole
/// call; no partially built array is ever returned. Recursion depth
/// equals the reply's nesting depth, which servers keep shallow — callers
/// needing a hard bound must enforce it on the decoder side.
pub fn convert_with<D: TextDecoder>(frame: Frame, decoder: &D) -> Result<Value, DataError> {
    match frame {
        Frame::Simple(Some(text)) => Ok(Value::Str(decoder.decode(&text)?)),
        Frame::Simple(None) => {
            debug!("simple string frame arrived without a payload");
            Err(DataError::NullSimpleString)
        }
        Frame::Integer(value) => Ok(Value::Int(value)),
        Frame::Bulk(None) => Ok(Value::Null),
        Frame::Bulk(Some(payload)) if payload.is_empty() => Ok(Value::Str(String::new())),
        Frame::Bulk(Some(payload)) => Ok(Value::Str(decoder.decode(&payload)?)),
        Frame::Array(None) => Ok(Value::Null),
        Frame::Array(Some(children)) => {
            let mut items = Vec::with_capacity(children.len());
            for child in children {
                items.push(convert_with(child, decoder)?);
            }
            Ok(Value::Array(items))
        }
        // Error replies and any future decoder-side frame kinds have no
        // value form; the command layer must intercept them first.
        other => {
            debug!("no value form for {} frame", other.kind());
            Err(DataError::UnexpectedReplyType(other.kind()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Utf8Lossy;

    #[test]
    fn test_simple_string() {
        assert_eq!(
            convert(Frame::simple("OK")).unwrap(),
            Value::Str("OK".into())
        );
    }

    #[test]
    fn test_simple_string_without_payload_fails() {
        assert_eq!(
            convert(Frame::Simple(None)),
            Err(DataError::NullSimpleString)
        );
    }

    #[test]
    fn test_integer_verbatim() {
        assert_eq!(convert(Frame::integer(0)).unwrap(), Value::Int(0));
        assert_eq!(convert(Frame::integer(-1)).unwrap(), Value::Int(-1));
        assert_eq!(
            convert(Frame::integer(i64::MAX)).unwrap(),
            Value::Int(i64::MAX)
        );
        assert_eq!(
            convert(Frame::integer(i64::MIN)).unwrap(),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn test_bulk_null_empty_distinction() {
        let null = convert(Frame::null_bulk()).unwrap();
        let empty = convert(Frame::bulk("")).unwrap();
        assert_eq!(null, Value::Null);
        assert_eq!(empty, Value::Str(String::new()));
        assert_ne!(null, empty);
    }

    #[test]
    fn test_array_preserves_order() {
        let frame = Frame::array(vec![
            Frame::simple("OK"),
            Frame::integer(42),
            Frame::null_bulk(),
        ]);
        assert_eq!(
            convert(frame).unwrap(),
            Value::Array(vec![Value::Str("OK".into()), Value::Int(42), Value::Null])
        );
    }

    #[test]
    fn test_nested_array() {
        let frame = Frame::array(vec![
            Frame::array(vec![Frame::integer(1), Frame::integer(2)]),
            Frame::bulk("x"),
        ]);
        assert_eq!(
            convert(frame).unwrap(),
            Value::Array(vec![
                Value::Array(vec![Value::Int(1), Value::Int(2)]),
                Value::Str("x".into()),
            ])
        );
    }

    #[test]
    fn test_empty_array_is_not_null_array() {
        assert_eq!(convert(Frame::array(vec![])).unwrap(), Value::Array(vec![]));
        assert_eq!(convert(Frame::null_array()).unwrap(), Value::Null);
    }

    #[test]
    fn test_error_frame_has_no_value_form() {
        assert_eq!(
            convert(Frame::error("ERR unknown command")),
            Err(DataError::UnexpectedReplyType("error"))
        );
    }

    #[test]
    fn test_failure_in_nested_child_fails_whole_call() {
        let frame = Frame::array(vec![
            Frame::integer(1),
            Frame::array(vec![Frame::Simple(None)]),
        ]);
        assert_eq!(convert(frame), Err(DataError::NullSimpleString));
    }

    #[test]
    fn test_decoder_injection() {
        let payload = Frame::Bulk(Some(bytes::Bytes::from_static(&[0x68, 0x69, 0xff])));
        assert!(matches!(
            convert(payload.clone()),
            Err(DataError::InvalidText(_))
        ));
        assert_eq!(
            convert_with(payload, &Utf8Lossy).unwrap(),
            Value::Str("hi\u{fffd}".into())
        );
    }
}
