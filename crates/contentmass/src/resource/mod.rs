// ABOUTME: Resource handling module for loading HTML documents from files, stdin, or URLs.
// ABOUTME: Handles blocking HTTP fetching with timeouts and charset decoding of raw bytes.

use std::fs;
use std::io::{self, Read};

use bytes::Bytes;
use url::Url;

use crate::error::ExtractError;
use crate::options::Options;

/// Target name that reads the document from stdin.
pub const STDIN_TARGET: &str = "-";

/// Raw bytes of a loaded document.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Final URL for fetched documents, otherwise the target as given.
    pub source: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Resource {
    /// Decode the body as UTF-8 text, using the content-type charset when present.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Whether a target names an http(s) resource rather than a path.
pub fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Load a document from a path, stdin ("-"), or an http(s) URL.
pub fn load(target: &str, opts: &Options) -> Result<Resource, ExtractError> {
    if target == STDIN_TARGET {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| ExtractError::read(target, "read stdin", Some(e.into())))?;
        return Ok(Resource {
            source: target.to_string(),
            content_type: None,
            body: Bytes::from(buf),
        });
    }

    if is_url(target) {
        return fetch(target, opts);
    }

    let body = fs::read(target).map_err(|e| ExtractError::read(target, "read file", Some(e.into())))?;
    Ok(Resource {
        source: target.to_string(),
        content_type: None,
        body: Bytes::from(body),
    })
}

/// Fetch a resource over HTTP. Non-success statuses are errors.
pub fn fetch(target: &str, opts: &Options) -> Result<Resource, ExtractError> {
    let url = Url::parse(target)
        .map_err(|e| ExtractError::invalid_url(target, "parse url", Some(e.into())))?;
    if url.host_str().is_none() {
        return Err(ExtractError::invalid_url(
            target,
            "parse url",
            Some(anyhow::anyhow!("missing host")),
        ));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()
        .map_err(|e| ExtractError::fetch(target, "build client", Some(e.into())))?;

    log::debug!("fetching {}", url);
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| ExtractError::fetch(target, "fetch", Some(e.into())))?;

    let source = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .bytes()
        .map_err(|e| ExtractError::fetch(target, "read body", Some(e.into())))?;

    Ok(Resource {
        source,
        content_type,
        body,
    })
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_extract_charset() {
        assert_eq!(
            extract_charset("text/html; charset=\"ISO-8859-1\""),
            Some("iso-8859-1".to_string())
        );
        assert_eq!(extract_charset("text/html"), None);
    }

    #[test]
    fn test_decode_body_uses_header_charset() {
        let latin1 = [b'c', b'a', b'f', 0xE9];
        assert_eq!(decode_body(&latin1, Some("text/html; charset=iso-8859-1")), "café");
    }

    #[test]
    fn test_decode_body_detects_utf8() {
        assert_eq!(decode_body("naïve résumé".as_bytes(), None), "naïve résumé");
    }

    #[test]
    fn test_decode_body_detects_legacy_encoding() {
        let text = "Le café était fermé, alors nous sommes allés à la brasserie près de la gare \
                    où le garçon nous a servi une crème brûlée et un thé très sucré.";
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(text);
        assert!(std::str::from_utf8(&bytes).is_err());

        let decoded = decode_body(&bytes, None);
        assert!(!decoded.contains('\u{FFFD}'));
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<p>hello</p>").unwrap();

        let target = path.to_str().unwrap();
        let res = load(target, &Options::default()).unwrap();
        assert_eq!(res.source, target);
        assert_eq!(res.text(), "<p>hello</p>");
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = load("/definitely/not/here.html", &Options::default()).unwrap_err();
        assert!(err.is_read());
    }

    #[test]
    fn test_fetch_without_host_is_invalid_url() {
        let err = fetch("http://", &Options::default()).unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/a"));
        assert!(!is_url("page.html"));
        assert!(!is_url(STDIN_TARGET));
    }
}
