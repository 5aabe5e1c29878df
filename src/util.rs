use crate::error::Error;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Splits a `"Name: value"` line at its first colon.
pub fn parse_header_line(line: &str) -> Result<(&str, &str), Error> {
    match line.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(Error::InvalidHeader(String::from(line))),
    }
}

/// Inserts header lines into `header_map`, replacing any value already stored under the same name.
pub fn put_headers<'a, I: IntoIterator<Item = &'a String>>(
    header_map: &mut HeaderMap<HeaderValue>,
    lines: I,
) -> Result<(), Error> {
    for line in lines {
        let (name, value) = parse_header_line(line)?;
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidHeader(line.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(line.clone()))?;
        header_map.insert(header_name, header_value);
    }

    Ok(())
}

/// Returns the headers keyed by name (last value wins) and every header as a raw line, in order.
pub fn extract_headers(header_map: &HeaderMap) -> (HashMap<String, String>, Vec<String>) {
    let mut headers = HashMap::new();
    let mut raw_lines = Vec::with_capacity(header_map.len());

    for (key, value) in header_map {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        raw_lines.push(format!("{}: {}", key, value));
        headers.insert(String::from(key.as_str()), value);
    }

    (headers, raw_lines)
}
