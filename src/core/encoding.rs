//! Percent-encoding of single path elements (RFC 3986, section 3.3).
//!
//! Generic encoders such as `application/x-www-form-urlencoded` target the
//! query component: they turn a space into `+` and escape `+` itself, which
//! is wrong for path segments. Here an element keeps every `pchar` except the
//! active separator, everything else becomes `%HH`.

use crate::domain::model::PathSeparator;
use crate::utils::error::{Result, UriError};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
pub fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`, minus
/// `pct-encoded`: a literal `%` always gets escaped.
pub fn is_pchar(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':' || b == b'@'
}

/// Encodes one raw element. The result never contains `separator`.
pub fn encode_path_element(element: &str, separator: PathSeparator) -> String {
    let sep = separator.as_byte();
    let mut out = String::with_capacity(element.len());

    for &b in element.as_bytes() {
        if is_pchar(b) && b != sep {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX_UPPER[(b >> 4) as usize] as char);
            out.push(HEX_UPPER[(b & 0x0f) as usize] as char);
        }
    }

    tracing::trace!(raw = element, encoded = %out, "encoded path element");
    out
}

/// Encodes every element and joins them with `separator`, without a leading
/// or trailing separator. The result must not be encoded again.
pub fn combine_path_elements<S: AsRef<str>>(separator: PathSeparator, elements: &[S]) -> String {
    let mut joined = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            joined.push(separator.as_char());
        }
        joined.push_str(&encode_path_element(element.as_ref(), separator));
    }
    joined
}

pub fn decode_path_element(encoded: &str) -> Result<String> {
    urlencoding::decode(encoded)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| UriError::Decode {
            value: encoded.to_string(),
            reason: e.to_string(),
        })
}
