//! Response parsing: splits a raw header block into a header map and decodes
//! the body as JSON.

use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Key under which the status line is stored in [`ParsedResponse::headers`].
///
/// `@` is not a valid header token character, so no real header can collide.
pub const STATUS_LINE_KEY: &str = "@status";

const HEADER_BLOCK_END: &str = "\r\n\r\n";
const LINE_END: &str = "\r\n";
const NAME_VALUE_SEPARATOR: &str = ": ";

/// Structured result of one completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    headers: HashMap<String, String>,
    data: Value,
    decode_error: Option<String>,
}

impl ParsedResponse {
    /// All headers, including the status line under [`STATUS_LINE_KEY`].
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Header value by name: exact match first, then ASCII case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .or_else(|| {
                self.headers
                    .iter()
                    .find(|(k, _)| k.as_str() != STATUS_LINE_KEY && k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }

    pub fn status_line(&self) -> &str {
        self.headers
            .get(STATUS_LINE_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Numeric code from a status line such as `HTTP/1.1 200 OK`.
    pub fn status_code(&self) -> Option<u16> {
        self.status_line()
            .split_whitespace()
            .nth(1)
            .and_then(|code| code.parse().ok())
    }

    /// Decoded body. `Value::Null` for empty bodies and for bodies that failed to decode.
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    /// JSON decode failure message, if the body was not valid JSON.
    pub fn decode_error(&self) -> Option<&str> {
        self.decode_error.as_deref()
    }

    pub fn is_decoded(&self) -> bool {
        self.decode_error.is_none()
    }
}

/// Parse a raw header block and body into a [`ParsedResponse`].
///
/// The header block ends at the first blank line. Its first line is the
/// status line; every other line must be `name: value`.
pub fn parse_response(head: &str, body: &[u8]) -> Result<ParsedResponse> {
    let headers = parse_header_block(head)?;
    let (data, decode_error) = decode_body(body);
    Ok(ParsedResponse {
        headers,
        data,
        decode_error,
    })
}

fn parse_header_block(head: &str) -> Result<HashMap<String, String>> {
    let block = match head.find(HEADER_BLOCK_END) {
        Some(end) => &head[..end],
        None => head.trim_end_matches(LINE_END),
    };

    let mut lines = block.split(LINE_END);
    let status_line = lines.next().unwrap_or_default();
    if status_line.trim().is_empty() {
        return Err(Error::malformed("missing status line", status_line));
    }

    let mut headers = HashMap::new();
    headers.insert(STATUS_LINE_KEY.to_string(), status_line.to_string());

    for line in lines {
        let (name, value) = line
            .split_once(NAME_VALUE_SEPARATOR)
            .ok_or_else(|| Error::malformed("header line without \": \" separator", line))?;
        headers.insert(name.to_string(), value.to_string());
    }

    Ok(headers)
}

fn decode_body(body: &[u8]) -> (Value, Option<String>) {
    if body.iter().all(u8::is_ascii_whitespace) {
        return (Value::Null, None);
    }
    match serde_json::from_slice(body) {
        Ok(v) => (v, None),
        Err(e) => (Value::Null, Some(e.to_string())),
    }
}
