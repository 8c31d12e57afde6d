//! Error types for the network primitives.
//!
//! # Design
//! Connect-time failures keep three distinct variants (socket, resolution,
//! connection) because diagnostics and tests need to tell "the resolver had
//! no answer" apart from "the peer refused". Orderly end-of-stream is not an
//! error at all (`receive` reports it as an empty result), so every variant
//! here is a genuine failure. Variants carry the OS error text where one
//! exists.

use std::fmt;

/// Errors returned by the `net` and `http` operations.
#[derive(Debug)]
pub enum NetError {
    /// The OS could not produce a usable socket (descriptor limits,
    /// permissions, resource exhaustion).
    SocketCreationFailed(String),

    /// The hostname did not resolve to any address.
    ResolutionFailed(String),

    /// A connection attempt to a resolved address failed, whether refused,
    /// unreachable, or timed out.
    ConnectionFailed(String),

    /// A write on an open connection failed.
    SendFailed(String),

    /// A read on an open connection failed at the descriptor level.
    ReceiveFailed(String),

    /// The URL authority could not be split into a host and a valid port.
    InvalidUrl(String),

    /// The response stream ended without ever containing the `\r\n\r\n`
    /// header terminator.
    MalformedResponse,

    /// The peer closed the connection before sending a single byte.
    PeerClosedEarly,
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::SocketCreationFailed(msg) => {
                write!(f, "socket creation failed: {msg}")
            }
            NetError::ResolutionFailed(msg) => {
                write!(f, "name resolution failed: {msg}")
            }
            NetError::ConnectionFailed(msg) => {
                write!(f, "connection failed: {msg}")
            }
            NetError::SendFailed(msg) => {
                write!(f, "send failed: {msg}")
            }
            NetError::ReceiveFailed(msg) => {
                write!(f, "receive failed: {msg}")
            }
            NetError::InvalidUrl(msg) => {
                write!(f, "invalid url: {msg}")
            }
            NetError::MalformedResponse => {
                write!(f, "response has no header terminator")
            }
            NetError::PeerClosedEarly => {
                write!(f, "peer closed the connection before sending anything")
            }
        }
    }
}

impl std::error::Error for NetError {}
