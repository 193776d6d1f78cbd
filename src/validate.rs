//! Syntactic URL validation.
//!
//! A candidate is considered valid when it parses as an absolute URL with
//! both a scheme and an authority. Anything else is rejected; rejection is
//! never an error, just a `false`.

use url::Url;

/// Returns `true` iff `candidate` parses as an absolute URL with scheme and authority.
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    parse_valid_url(candidate).is_some()
}

/// Parse `candidate` under the same rule as [`is_valid_url`], returning the URL.
#[must_use]
pub fn parse_valid_url(candidate: &str) -> Option<Url> {
    let url = Url::parse(candidate).ok()?;
    url.has_authority().then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        assert!(is_valid_url("https://example.com/x"));
    }

    #[test]
    fn test_valid_url_with_port_and_query() {
        assert!(is_valid_url("http://example.com:8080/path?q=1"));
    }

    #[test]
    fn test_plain_text_is_invalid() {
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_relative_path_is_invalid() {
        assert!(!is_valid_url("/just/a/path"));
    }

    #[test]
    fn test_missing_authority_is_invalid() {
        // Parses as a URL but carries no authority component.
        assert!(!is_valid_url("mailto:somebody@example.com"));
        assert!(!is_valid_url("data:text/plain,hello"));
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_parse_valid_url_returns_parsed_form() {
        let url = parse_valid_url("https://github.com/tokio-rs/tokio").unwrap();
        assert_eq!(url.host_str(), Some("github.com"));
        assert_eq!(url.path(), "/tokio-rs/tokio");
    }

    #[test]
    fn test_parse_valid_url_rejects_garbage() {
        assert!(parse_valid_url("://nope").is_none());
    }
}
