// src/core/net.rs

// One blocking GET per scrape. No retry; the timeout bounds the call.

use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use reqwest::{blocking::Client, header::CONTENT_TYPE};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

// <meta charset> must sit within the first 1024 bytes of a page.
const SNIFF_LEN: usize = 1024;

/// Fetch `url` and return the decoded body.
/// Non-2xx responses are errors; the page body is not parsed in that case.
pub fn http_get(url: &str) -> Result<String> {
    let http_err = |source| Error::Http { url: s!(url), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(http_err)?;

    logd!("HTTP: GET {url}");
    let resp = client.get(url).send().map_err(http_err)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: s!(url), status: status.as_u16() });
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = resp.bytes().map_err(http_err)?;
    logd!("HTTP: {} bytes from {url}", bytes.len());

    Ok(decode_body(&bytes, content_type.as_deref()))
}

/// Decode a page: BOM, then the `Content-Type` charset, then a
/// `<meta charset>` near the top, else UTF-8. Bad sequences become U+FFFD.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);

    let declared = content_type
        .and_then(charset_label)
        .and_then(|l| Encoding::for_label(l.as_bytes()));
    // A page claiming UTF-16 in ASCII markup is really ASCII-compatible.
    let sniffed = || {
        charset_label(&head)
            .and_then(|l| Encoding::for_label(l.as_bytes()))
            .map(Encoding::output_encoding)
    };
    let encoding = declared.or_else(sniffed).unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        logd!("HTTP: malformed {} in body", used.name());
    }
    text.into_owned()
}

/// Value of the first `charset=` in `text`, unquoted.
fn charset_label(text: &str) -> Option<&str> {
    let at = text.to_ascii_lowercase().find("charset")? + "charset".len();
    let rest = text[at..].trim_start().strip_prefix('=')?.trim_start();
    let rest = rest.trim_start_matches(['"', '\'']);
    let end = rest
        .find(|c: char| matches!(c, '"' | '\'' | ';' | '>' | '/') || c.is_whitespace())
        .unwrap_or(rest.len());
    let label = &rest[..end];
    (!label.is_empty()).then_some(label)
}
