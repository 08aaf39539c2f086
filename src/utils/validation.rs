use crate::utils::error::{Result, UriError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// RFC 3986: `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn validate_scheme(scheme: &str) -> Result<()> {
    let mut bytes = scheme.bytes();
    match bytes.next() {
        None => return Err(UriError::invalid("scheme", scheme, "Scheme cannot be empty")),
        Some(first) if !first.is_ascii_alphabetic() => {
            return Err(UriError::invalid(
                "scheme",
                scheme,
                "Scheme must start with a letter",
            ))
        }
        Some(_) => {}
    }

    if let Some(bad) = bytes.find(|b| !(b.is_ascii_alphanumeric() || matches!(*b, b'+' | b'-' | b'.'))) {
        return Err(UriError::invalid(
            "scheme",
            scheme,
            format!("Unsupported character in scheme: '{}'", bad as char),
        ));
    }

    Ok(())
}

/// Checks the authority part only for characters that would end it early,
/// including `\`, which URL parsers treat as `/` for special schemes.
/// Host syntax itself is left to the URL parser.
pub fn validate_server(server: &str) -> Result<()> {
    validate_non_empty_string("server", server)?;

    if let Some(bad) = server
        .chars()
        .find(|c| matches!(*c, '/' | '\\' | '?' | '#') || c.is_whitespace())
    {
        return Err(UriError::invalid(
            "server",
            server,
            format!("Server must not contain '{}'", bad.escape_default()),
        ));
    }

    Ok(())
}

/// RFC 8141 namespace identifier: 2 to 32 characters of `alphanum / "-"`,
/// not starting or ending with `-`.
pub fn validate_namespace(nid: &str) -> Result<()> {
    if !(2..=32).contains(&nid.len()) {
        return Err(UriError::invalid(
            "namespace",
            nid,
            "Namespace must be between 2 and 32 characters",
        ));
    }

    if nid.starts_with('-') || nid.ends_with('-') {
        return Err(UriError::invalid(
            "namespace",
            nid,
            "Namespace must not start or end with '-'",
        ));
    }

    if !nid.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(UriError::invalid(
            "namespace",
            nid,
            "Namespace may only contain letters, digits and '-'",
        ));
    }

    if nid.eq_ignore_ascii_case("urn") {
        return Err(UriError::invalid(
            "namespace",
            nid,
            "'urn' is reserved and cannot be used as a namespace",
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UriError::invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}
