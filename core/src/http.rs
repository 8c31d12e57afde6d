//! Minimal HTTP/1.0 GET client assembled from the raw TCP primitives.
//!
//! # Design
//! The protocol logic lives in pure helpers (`split_url`, `split_authority`,
//! `build_request`, `body_offset`) so request construction and response
//! framing are unit-testable without a socket; `http_get` only composes them
//! around the blocking I/O. The response is read until end-of-stream: the
//! peer closing the connection is the one termination signal an HTTP/1.0
//! exchange guarantees. A `Content-Length` header is ignored, so servers
//! that hold the connection open behave the same as servers that do not.

use memchr::memmem;
use tracing::debug;

use crate::error::NetError;
use crate::net;
use crate::string;

/// Port used when the URL authority does not carry one.
const DEFAULT_HTTP_PORT: u16 = 80;

/// Bytes separating the header block from the body.
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Perform one blocking GET request and return the response body.
///
/// `url` is `[scheme://]host[:port][/path]`. The scheme is stripped without
/// validation, the path defaults to `/`, and the port to 80. The status
/// line and header fields are not interpreted: whatever follows the first
/// blank line comes back as the body, whatever the status code was.
pub fn http_get(url: &str) -> Result<String, NetError> {
    let (authority, path) = split_url(url);
    let (host, port) = split_authority(&authority)?;
    debug!(%host, port, %path, "issuing request");

    let mut conn = net::connect(&host, port)?;
    conn.send(build_request(&authority, &path).as_bytes())?;

    let mut response = Vec::new();
    loop {
        let chunk = conn.receive()?;
        if chunk.is_empty() {
            break;
        }
        response.extend_from_slice(&chunk);
    }
    debug!(bytes = response.len(), "response assembled");

    if response.is_empty() {
        return Err(NetError::PeerClosedEarly);
    }
    let offset = body_offset(&response).ok_or(NetError::MalformedResponse)?;
    Ok(String::from_utf8_lossy(&response[offset..]).into_owned())
}

/// Split a URL into authority (`host[:port]`) and path (with leading `/`).
///
/// Without a `/` after the authority the path is `/`; with one, the path is
/// everything from that `/` onward, inclusive.
fn split_url(url: &str) -> (String, String) {
    let rest = if string::contains(url, "://") {
        string::split(url, "://")[1].clone()
    } else {
        url.to_string()
    };

    match string::find(&rest, "/") {
        Some(pos) => (
            string::substr(&rest, 0, pos),
            string::substr(&rest, pos, string::len(&rest) - pos),
        ),
        None => (rest, "/".to_string()),
    }
}

/// Split `host[:port]` into host and port, defaulting the port to 80.
fn split_authority(authority: &str) -> Result<(String, u16), NetError> {
    if !string::contains(authority, ":") {
        return Ok((authority.to_string(), DEFAULT_HTTP_PORT));
    }
    let parts = string::split(authority, ":");
    if parts.len() != 2 || parts[0].is_empty() {
        return Err(NetError::InvalidUrl(format!("bad authority: {authority}")));
    }
    let port = parts[1]
        .parse::<u16>()
        .map_err(|_| NetError::InvalidUrl(format!("bad port in: {authority}")))?;
    Ok((parts[0].clone(), port))
}

/// The request as it goes on the wire, byte for byte.
fn build_request(host: &str, path: &str) -> String {
    format!("GET {path} HTTP/1.0\r\nHost: {host}\r\n\r\n")
}

/// Offset of the first body byte: just past the first `\r\n\r\n`.
fn body_offset(response: &[u8]) -> Option<usize> {
    memmem::find(response, HEADER_TERMINATOR).map(|pos| pos + HEADER_TERMINATOR.len())
}
