//! Blocking TCP primitives: resolve, connect, raw send/receive.
//!
//! # Design
//! `Connection` owns its `TcpStream`, so the socket is released when the
//! value goes out of scope, whichever exit path the caller takes.
//! `receive` returns at most [`RECV_BUFFER_SIZE`] bytes per call; callers
//! loop and concatenate to reassemble larger messages. An empty result is
//! the end-of-stream marker and is kept distinct from descriptor errors,
//! which surface as `ReceiveFailed`.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::NetError;

/// Capacity of the per-call receive buffer.
pub const RECV_BUFFER_SIZE: usize = 65000;

/// An open, bidirectional, ordered byte stream to a single remote endpoint.
///
/// Valid from a successful [`connect`] until dropped. There is no explicit
/// close; dropping the value releases the socket.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

/// Resolve `host` and open a blocking stream connection to `(host, port)`.
///
/// One attempt against the first resolved address, blocking until the OS
/// completes or fails it. No retry, no timeout beyond the OS default.
pub fn connect(host: &str, port: u16) -> Result<Connection, NetError> {
    let addr = resolve(host, port)?;
    debug!(%host, port, %addr, "connecting");
    match TcpStream::connect(addr) {
        Ok(stream) => Ok(Connection { stream }),
        Err(e) => Err(classify_connect_error(e)),
    }
}

/// Like [`connect`], but give up after `timeout` instead of waiting for the
/// OS to decide.
pub fn connect_timeout(host: &str, port: u16, timeout: Duration) -> Result<Connection, NetError> {
    let addr = resolve(host, port)?;
    debug!(%host, port, %addr, ?timeout, "connecting");
    match TcpStream::connect_timeout(&addr, timeout) {
        Ok(stream) => Ok(Connection { stream }),
        Err(e) => Err(classify_connect_error(e)),
    }
}

impl Connection {
    /// Write the whole byte sequence to the peer. No framing or length
    /// prefix is added.
    pub fn send(&mut self, data: &[u8]) -> Result<(), NetError> {
        self.stream
            .write_all(data)
            .map_err(|e| NetError::SendFailed(e.to_string()))?;
        trace!(bytes = data.len(), "sent");
        Ok(())
    }

    /// Blocking read of up to [`RECV_BUFFER_SIZE`] bytes.
    ///
    /// Returns exactly the bytes the OS delivered and nothing more. An
    /// empty vector means the peer closed its end of the connection.
    pub fn receive(&mut self) -> Result<Vec<u8>, NetError> {
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        let n = self
            .stream
            .read(&mut buf)
            .map_err(|e| NetError::ReceiveFailed(e.to_string()))?;
        buf.truncate(n);
        trace!(bytes = n, "received");
        Ok(buf)
    }
}

/// Resolve `host` to its first address. Only the first answer is used; the
/// connect functions make a single attempt against it.
fn resolve(host: &str, port: u16) -> Result<SocketAddr, NetError> {
    let mut addrs = (host, port)
        .to_socket_addrs()
        .map_err(|e| NetError::ResolutionFailed(e.to_string()))?;
    addrs
        .next()
        .ok_or_else(|| NetError::ResolutionFailed(format!("no addresses found for {host}")))
}

/// Sort connect-time failures into the causes callers can act on. Refusal
/// and reachability problems mean the peer side failed us; anything else at
/// this stage means the OS could not produce a working socket.
fn classify_connect_error(e: io::Error) -> NetError {
    use io::ErrorKind;
    match e.kind() {
        ErrorKind::ConnectionRefused
        | ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::HostUnreachable
        | ErrorKind::NetworkUnreachable
        | ErrorKind::TimedOut => NetError::ConnectionFailed(e.to_string()),
        _ => NetError::SocketCreationFailed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Bind to a random port, remember it, and drop the listener so the
    /// port has nothing listening.
    fn unused_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn connect_without_listener_is_connection_failed() {
        let port = unused_port();
        let err = connect("127.0.0.1", port).unwrap_err();
        assert!(matches!(err, NetError::ConnectionFailed(_)), "got {err:?}");
    }

    #[test]
    fn connect_timeout_without_listener_is_connection_failed() {
        let port = unused_port();
        let err = connect_timeout("127.0.0.1", port, Duration::from_secs(2)).unwrap_err();
        assert!(matches!(err, NetError::ConnectionFailed(_)), "got {err:?}");
    }

    #[test]
    fn connect_to_unresolvable_host_is_resolution_failed() {
        // .invalid is reserved and never resolves.
        let err = connect("definitely-not-a-real-host.invalid", 80).unwrap_err();
        assert!(matches!(err, NetError::ResolutionFailed(_)), "got {err:?}");
    }

    #[test]
    fn send_then_receive_roundtrips_through_an_echo_server() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let (mut sock, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let n = sock.read(&mut buf).unwrap();
            sock.write_all(&buf[..n]).unwrap();
        });

        let mut conn = connect("127.0.0.1", port).unwrap();
        conn.send(b"ping over loopback").unwrap();
        let echoed = conn.receive().unwrap();
        assert_eq!(echoed, b"ping over loopback");
        server.join().unwrap();
    }

    #[test]
    fn end_of_stream_is_empty_only_after_all_bytes_arrived() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let (mut sock, _) = listener.accept().unwrap();
            sock.write_all(b"last words").unwrap();
            // Dropping the socket closes it and signals end-of-stream.
        });

        let mut conn = connect("127.0.0.1", port).unwrap();
        let mut collected = Vec::new();
        loop {
            let chunk = conn.receive().unwrap();
            if chunk.is_empty() {
                break;
            }
            collected.extend_from_slice(&chunk);
        }
        assert_eq!(collected, b"last words");
        // End-of-stream is sticky.
        assert!(conn.receive().unwrap().is_empty());
        server.join().unwrap();
    }

    #[test]
    fn one_receive_never_exceeds_the_buffer_capacity() {
        let total = 3 * RECV_BUFFER_SIZE;
        let payload: Vec<u8> = (0..total).map(|i| (i % 251) as u8).collect();
        let expected = payload.clone();

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let (mut sock, _) = listener.accept().unwrap();
            sock.write_all(&payload).unwrap();
        });

        let mut conn = connect("127.0.0.1", port).unwrap();
        let mut collected = Vec::new();
        loop {
            let chunk = conn.receive().unwrap();
            if chunk.is_empty() {
                break;
            }
            assert!(chunk.len() <= RECV_BUFFER_SIZE, "oversized chunk: {}", chunk.len());
            collected.extend_from_slice(&chunk);
        }
        assert_eq!(collected, expected);
        server.join().unwrap();
    }
}
