//! Lightweight extraction of the host and port from a target URL.
//!
//! Targets are not required to be valid URLs (`localhost:5432` is accepted),
//! so these helpers work on the raw text instead of a parsed URL.
//! The port detection is a heuristic:
//!
//! - The URL is split on `:`.
//! - The first segment is skipped (it is the scheme or the host).
//! - The first remaining segment that is not empty, not literally `http` or
//!   `https`, and parses as an integer is the port.
//!
//! Because a segment must be a bare integer, a port followed by a path
//! (`http://localhost:8080/health`) is not detected. Such targets are still
//! checked by the HTTP request.
//!
//! The detected port is dialed on the [`authority`] of the URL, whatever its
//! scheme (`postgres://localhost:5432` dials `localhost:5432`).
const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Returns the host part of the URL: the scheme is removed and the text is
/// truncated at the first `/`.
///
/// An explicit port stays attached to the host (`localhost:8080`).
#[must_use]
pub fn parse_host(url: &str) -> &str {
    let without_scheme = strip_http_scheme(url);

    without_scheme.split('/').next().unwrap_or(without_scheme)
}

/// Returns the explicit port of the URL, if one is detected.
#[must_use]
pub fn get_port(url: &str) -> Option<&str> {
    url.split(':')
        .skip(1)
        .find(|segment| !segment.is_empty() && *segment != "http" && *segment != "https" && segment.parse::<i64>().is_ok())
}

/// Returns the authority of the URL: everything after `scheme://`, whatever
/// the scheme, truncated at the first `/`.
///
/// This is the host used to dial the detected port, so targets such as
/// `postgres://localhost:5432` dial `localhost:5432`.
#[must_use]
pub fn authority(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);

    rest.split('/').next().unwrap_or(rest)
}

/// Returns the `host:port` address to dial.
///
/// The port is not appended twice when the host already ends with it.
#[must_use]
pub fn socket_address(host: &str, port: &str) -> String {
    match host.strip_suffix(port).and_then(|rest| rest.strip_suffix(':')) {
        Some(_) => host.to_owned(),
        None => format!("{host}:{port}"),
    }
}

/// Whether the target should be checked with an HTTP request.
#[must_use]
pub fn is_http(url: &str) -> bool {
    SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

fn strip_http_scheme(url: &str) -> &str {
    let url = url.strip_prefix("http://").unwrap_or(url);
    url.strip_prefix("https://").unwrap_or(url)
}
