//! HAR (HTTP Archive) domain extractor.
//!
//! Reads a browser capture and returns every distinct host that a recorded
//! request went to. Only `log.entries[*].request.url` is consumed.

mod extract;
mod parse;

pub use extract::{extract_hostnames, hostname_from_url, hostnames_from_har};
pub use parse::{HarEntry, HarLog, HarRequest, HarRoot};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn har_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn hostname_from_url_keeps_port_and_case() {
        assert_eq!(hostname_from_url("https://a.test/x"), Some("a.test"));
        assert_eq!(hostname_from_url("http://B.Test:8080/y?z"), Some("B.Test:8080"));
        assert_eq!(hostname_from_url("https://no-path.test"), Some("no-path.test"));
    }

    #[test]
    fn hostname_from_url_rejects_other_schemes() {
        assert_eq!(hostname_from_url("ftp://files.test/a"), None);
        assert_eq!(hostname_from_url("data:text/plain,hi"), None);
        assert_eq!(hostname_from_url("wss://sock.test/"), None);
        assert_eq!(hostname_from_url("https:///nohost"), None);
        assert_eq!(hostname_from_url(" https://lead.test/"), None);
    }

    #[test]
    fn extract_collapses_duplicates() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    { "request": { "url": "https://a.test/x", "method": "GET" }, "response": { "status": 200 } },
                    { "request": { "url": "http://b.test/y" } },
                    { "request": { "url": "http://b.test/y" } },
                    { "request": { "url": "https://a.test/other" } }
                ]
            }
        }"#;
        let f = har_file(har);
        let hosts = extract_hostnames(f.path(), false).unwrap();
        let got: Vec<&str> = hosts.iter().map(String::as_str).collect();
        assert_eq!(got, vec!["a.test", "b.test"]);
    }

    #[test]
    fn extract_skips_non_http_entries() {
        let har = r#"{"log":{"entries":[
            {"request":{"url":"chrome-extension://abc/script.js"}},
            {"request":{"url":"https://kept.test/"}},
            {"request":{"url":"not a url"}}
        ]}}"#;
        let f = har_file(har);
        let hosts = extract_hostnames(f.path(), true).unwrap();
        assert_eq!(hosts.len(), 1);
        assert!(hosts.contains("kept.test"));
    }

    #[test]
    fn extract_empty_entries_is_empty_set() {
        let f = har_file(r#"{"log":{"version":"1.2","entries":[]}}"#);
        assert!(extract_hostnames(f.path(), false).unwrap().is_empty());
    }

    #[test]
    fn extract_invalid_json_is_malformed() {
        let f = har_file("{ not json");
        let err = extract_hostnames(f.path(), false).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { .. }));
    }

    #[test]
    fn extract_missing_structure_is_malformed() {
        for body in [
            r#"{"entries":[]}"#,
            r#"{"log":{}}"#,
            r#"{"log":{"entries":[{"response":{}}]}}"#,
            r#"{"log":{"entries":[{"request":{"url":42}}]}}"#,
        ] {
            let f = har_file(body);
            let err = extract_hostnames(f.path(), false).unwrap_err();
            assert!(
                matches!(err, Error::MalformedInput { .. }),
                "expected MalformedInput for {body}"
            );
        }
    }

    #[test]
    fn extract_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_hostnames(&dir.path().join("nope.har"), false).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
