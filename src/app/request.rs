//! Transport-neutral request and response types.
//!
//! A [`Request`] borrows the raw URI handed over by the HTTP server and
//! decodes query parameters on demand, so nothing is allocated per call.
//! A [`Response`] is a status code plus a short text body.

use core::fmt::Write as _;
use core::ops::Deref;

use log::warn;

use crate::error::{Error, MSG_INVALID_VALUE, Result};

/// Capacity of a response body.  The longest body is a comma-joined
/// broadcast read of four 10-bit duties.
pub const BODY_CAPACITY: usize = 64;

/// Capacity of a query parameter that needs percent/`+` decoding.
/// Parameters without escapes are borrowed from the URI and have no limit.
pub const PARAM_CAPACITY: usize = 32;

pub type Body = heapless::String<BODY_CAPACITY>;

/// A query parameter value: a slice of the URI when it needs no decoding,
/// otherwise a decoded copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue<'a> {
    Raw(&'a str),
    Decoded(heapless::String<PARAM_CAPACITY>),
}

impl Deref for ParamValue<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        match self {
            Self::Raw(s) => s,
            Self::Decoded(s) => s,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Method
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    /// Whether the call is meant to change state.
    pub const fn is_mutation(self) -> bool {
        !matches!(self, Self::Get)
    }
}

// ───────────────────────────────────────────────────────────────
// Request
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    method: Method,
    path: &'a str,
    query: &'a str,
}

impl<'a> Request<'a> {
    /// Split `uri` (`/path?a=b&c=d`) into path and query.
    pub fn parse(method: Method, uri: &'a str) -> Self {
        let (path, query) = uri.split_once('?').unwrap_or((uri, ""));
        Self {
            method,
            path,
            query,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Decoded value of the first `name` parameter.
    ///
    /// Returns `None` when the parameter is absent, or when its key or
    /// value does not decode (bad escape, invalid UTF-8, decoded form
    /// longer than [`PARAM_CAPACITY`]).
    pub fn param(&self, name: &str) -> Option<ParamValue<'a>> {
        self.query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .find_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (&*decode(key)? == name).then_some(value)
            })
            .and_then(decode)
    }
}

/// Percent-decode a query component (`+` is a space).
fn decode(raw: &str) -> Option<ParamValue<'_>> {
    if !raw.bytes().any(|b| matches!(b, b'%' | b'+')) {
        return Some(ParamValue::Raw(raw));
    }
    let mut bytes: heapless::Vec<u8, PARAM_CAPACITY> = heapless::Vec::new();
    let mut input = raw.bytes();
    while let Some(b) = input.next() {
        let decoded = match b {
            b'+' => b' ',
            b'%' => {
                let hi = hex_digit(input.next()?)?;
                let lo = hex_digit(input.next()?)?;
                (hi << 4) | lo
            }
            other => other,
        };
        bytes.push(decoded).ok()?;
    }
    heapless::String::from_utf8(bytes).ok().map(ParamValue::Decoded)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parse the integer parameter `name`.
///
/// The whole value must be a base-10 `i32` with an optional sign; absent,
/// empty, trailing garbage and overflow are all rejected.  Range checks
/// belong to the caller.
pub fn extract_integer(req: &Request<'_>, name: &str) -> Result<i32> {
    req.param(name)
        .and_then(|value| value.parse::<i32>().ok())
        .ok_or(Error::InvalidArgument(MSG_INVALID_VALUE))
}

// ───────────────────────────────────────────────────────────────
// Response
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Body,
}

impl Response {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: text(body),
        }
    }

    pub fn ok(body: Body) -> Self {
        Self { status: 200, body }
    }

    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    pub fn method_not_allowed() -> Self {
        Self::new(405, "Method Not Allowed")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<Error> for Response {
    fn from(e: Error) -> Self {
        Self::new(e.status(), e.message())
    }
}

impl From<Result<Body>> for Response {
    fn from(result: Result<Body>) -> Self {
        match result {
            Ok(body) => Self::ok(body),
            Err(e) => e.into(),
        }
    }
}

/// Body holding `"OK"`.
pub fn ok_body() -> Body {
    text("OK")
}

/// Body holding `value` rendered with `Display`.
pub fn display_body(value: impl core::fmt::Display) -> Body {
    let mut body = Body::new();
    if write!(body, "{value}").is_err() {
        warn!("response body overflow rendering value ({} byte limit)", BODY_CAPACITY);
    }
    body
}

pub fn text(s: &str) -> Body {
    let mut body = Body::new();
    append(&mut body, s);
    body
}

/// Append `s` to `body`.  On overflow `body` is left as it was and the
/// overflow is logged.
pub fn append(body: &mut Body, s: &str) {
    if body.push_str(s).is_err() {
        warn!(
            "response body overflow: {} + {} bytes exceeds {}",
            body.len(),
            s.len(),
            BODY_CAPACITY
        );
    }
}
