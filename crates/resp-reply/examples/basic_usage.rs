//! Basic usage examples for reply conversion

use resp_reply::{Frame, Utf8Lossy, Value};

fn main() {
    println!("=== resp-reply Basic Usage Examples ===\n");

    // Example 1: Scalar replies
    example_scalar_replies();

    // Example 2: Null vs empty bulk strings
    example_null_vs_empty();

    // Example 3: Array replies
    example_array_reply();

    // Example 4: Failure on non-conforming frames
    example_data_errors();

    // Example 5: Choosing a text decoder
    example_lossy_decoding();
}

fn example_scalar_replies() {
    println!("--- Example 1: Scalar Replies ---");

    let pong = resp_reply::convert(Frame::simple("PONG")).unwrap();
    println!("+PONG        -> {:?}", pong);

    let count = resp_reply::convert(Frame::integer(42)).unwrap();
    println!(":42          -> {:?}", count);

    let body = resp_reply::convert(Frame::bulk("hello")).unwrap();
    println!("$5 hello     -> {:?}", body);
    println!();
}

fn example_null_vs_empty() {
    println!("--- Example 2: Null vs Empty Bulk Strings ---");

    let null = resp_reply::convert(Frame::null_bulk()).unwrap();
    let empty = resp_reply::convert(Frame::bulk("")).unwrap();
    println!("$-1          -> {:?}", null);
    println!("$0           -> {:?}", empty);
    println!("equal?       -> {}", null == empty);
    println!();
}

fn example_array_reply() {
    println!("--- Example 3: Array Replies ---");

    // An EXEC-style reply: mixed types, one nested page
    let reply = Frame::array(vec![
        Frame::simple("OK"),
        Frame::integer(2),
        Frame::array(vec![Frame::bulk("a"), Frame::bulk("b")]),
        Frame::null_bulk(),
    ]);

    let value = resp_reply::convert(reply).unwrap();
    println!("converted    -> {:?}", value);

    if let Some(items) = value.as_array() {
        println!("item count   -> {}", items.len());
    }
    println!();
}

fn example_data_errors() {
    println!("--- Example 4: Data Errors ---");

    let err = resp_reply::convert(Frame::error("ERR unknown command")).unwrap_err();
    println!("-ERR ...     -> {}", err);

    let err = resp_reply::convert(Frame::Simple(None)).unwrap_err();
    println!("bad decoder  -> {}", err);
    println!();
}

fn example_lossy_decoding() {
    println!("--- Example 5: Choosing a Text Decoder ---");

    let payload = Frame::Bulk(Some(bytes::Bytes::from_static(&[0x68, 0x69, 0xff])));

    let strict = resp_reply::convert(payload.clone());
    println!("strict utf-8 -> {:?}", strict);

    let lossy = resp_reply::convert_with(payload, &Utf8Lossy).unwrap();
    println!("lossy utf-8  -> {:?}", lossy);
    assert_eq!(lossy, Value::Str("hi\u{fffd}".to_string()));
}
