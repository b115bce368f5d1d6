//! Startup failures. Anything after `serve` begins is handled per request.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),

    #[error("http client: {0}")]
    Http(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
