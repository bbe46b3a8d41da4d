//! Host startup and serve errors.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
    /// Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
    /// The listener could not bind its address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] io::Error),
}
