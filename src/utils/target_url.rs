//! Parsing of outbound target URLs.

use url::Url;

/// Errors that can occur while parsing a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Target URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL contains whitespace or control characters")]
    StrayCharacters,
}

/// Parses an absolute HTTP(S) URL with a host.
///
/// # Rules
///
/// 1. **Empty input**: rejected
/// 2. **Padding**: leading or trailing spaces and any control character are
///    rejected; the url crate would silently strip them
/// 3. **Relative URLs**: rejected (no base is ever applied)
/// 4. **Protocol**: only HTTP and HTTPS are allowed
/// 5. **Host**: must be present; the url crate lower-cases domain hosts
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and similar schemes so that nothing but a
/// web page can end up in the auto-redirect.
///
/// # Examples
///
/// ```ignore
/// let url = parse_target_url("HTTPS://WWW.FACEBOOK.COM/sharer").unwrap();
/// assert_eq!(url.host_str(), Some("www.facebook.com"));
/// ```
pub fn parse_target_url(input: &str) -> Result<Url, TargetUrlError> {
    if input.trim().is_empty() {
        return Err(TargetUrlError::Empty);
    }

    if input.starts_with(' ') || input.ends_with(' ') || input.chars().any(char::is_control) {
        return Err(TargetUrlError::StrayCharacters);
    }

    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(TargetUrlError::MissingHost),
    }
}

/// Lower-cased host of `url`, without port.
pub fn host_of(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_ascii_lowercase())
}
