//! Runtime support library for a small transpiled language.
//!
//! # Overview
//! Free functions grouped into independent namespaces (`string`, `num`,
//! `fmt`, `net`) that generated code calls directly. The `net` module is
//! the systems core: blocking TCP connect/send/receive and a minimal
//! HTTP/1.0 GET client assembled from those primitives and the `string`
//! helpers.
//!
//! # Design
//! - Every operation is a free `fn` so a code generator can pick symbols
//!   one at a time; the library holds no shared mutable state.
//! - Network failures are explicit [`NetError`] variants carrying the
//!   specific cause, never a sentinel value.
//! - A [`Connection`] owns its socket and releases it on drop, whichever
//!   path a caller takes out of a function.
//! - Everything blocks until the OS completes or fails the operation; a
//!   caller that wants concurrency runs each exchange on its own thread.

pub mod error;
pub mod fmt;
pub mod http;
pub mod net;
pub mod num;
pub mod string;

pub use error::NetError;
pub use http::http_get;
pub use net::{connect, connect_timeout, Connection, RECV_BUFFER_SIZE};
