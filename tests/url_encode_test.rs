//! `application/x-www-form-urlencoded` is made for the query part of a URI,
//! not for path elements: it writes ' ' as '+' and therefore has to escape a
//! literal '+'. Using it for path elements changes the meaning of both.

use anyhow::Result;
use uri_encoding::{encode_path_element, PathSeparator, UriBuilder};
use url::form_urlencoded::byte_serialize;

const RESOURCE_PATH: &str = "https://servername/rest/customers";

const EXPECTED_URI_PATH: [(&str, &str); 4] = [
    ("2024-1234", "https://servername/rest/customers/2024-1234"),
    ("2024/1234", "https://servername/rest/customers/2024%2F1234"),
    ("2024 1234", "https://servername/rest/customers/2024%201234"),
    ("2024+1234", "https://servername/rest/customers/2024+1234"),
];

fn form_encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// The usual workaround: protect '+' before form encoding and patch the
/// result afterwards.
fn form_encode_workaround(value: &str) -> String {
    form_encode(&value.replace('+', "%2B"))
        .replace('+', "%20")
        .replace("%252B", "+")
}

#[test]
fn test_with_form_encoder() {
    for (customer_id, expected) in EXPECTED_URI_PATH {
        let actual = format!("{}/{}", RESOURCE_PATH, form_encode(customer_id));
        match customer_id {
            "2024 1234" => assert_eq!(actual, "https://servername/rest/customers/2024+1234"),
            "2024+1234" => assert_eq!(actual, "https://servername/rest/customers/2024%2B1234"),
            _ => assert_eq!(actual, expected),
        }
    }
}

#[test]
fn test_with_workaround() {
    for (customer_id, expected) in EXPECTED_URI_PATH {
        let actual = format!("{}/{}", RESOURCE_PATH, form_encode_workaround(customer_id));
        assert_eq!(actual, expected, "customer id '{}'", customer_id);
    }
}

/// The workaround cannot tell an escaped '+' from a literal "%2B" in the input.
#[test]
fn test_workaround_breaks_on_literal_escape() {
    assert_eq!(form_encode_workaround("a%2Bb"), "a+b");
    assert_eq!(encode_path_element("a%2Bb", PathSeparator::Slash), "a%252Bb");
}

/// Encoders that keep only unreserved characters are safe but escape
/// sub-delims that are legal in a path.
#[test]
fn test_unreserved_only_encoder_escapes_sub_delims() {
    assert_eq!(urlencoding::encode("2024+1234"), "2024%2B1234");
    assert_eq!(urlencoding::encode("a;b=c"), "a%3Bb%3Dc");

    assert_eq!(encode_path_element("2024+1234", PathSeparator::Slash), "2024+1234");
    assert_eq!(encode_path_element("a;b=c", PathSeparator::Slash), "a;b=c");
}

#[test]
fn test_with_path_element_encoder() -> Result<()> {
    for (customer_id, expected) in EXPECTED_URI_PATH {
        let actual = format!(
            "{}/{}",
            RESOURCE_PATH,
            encode_path_element(customer_id, PathSeparator::Slash)
        );
        assert_eq!(actual, expected, "customer id '{}'", customer_id);

        let built = UriBuilder::create_url()
            .scheme("https")
            .server("servername")
            .path_elements(["rest", "customers", customer_id])
            .build()?;
        assert_eq!(built.as_str(), actual);
    }
    Ok(())
}
