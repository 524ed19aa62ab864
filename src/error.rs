use reqwest::StatusCode;

/// An error raised while talking HTTP to the daemon.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Receiver went away
    #[error("Receiver went away couldn't forward the response")]
    ReceiverDisconnected,

    /// Sender went away
    #[error("Sender went away couldn't receive the message")]
    SenderDisconnected,

    /// The real cause was handed to the caller through a `FailureSlot`.
    #[error("transport stopped after a failed request")]
    Stopped,

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{method} {url} returned status code {status}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {url} is not a JSON-RPC response")]
    NotJsonRpc { url: String },

    #[error("response from {url} is not a JSON object")]
    NotAnObject { url: String },
}

/// Every way a single invocation can fail before an answer is printed.
///
/// The `Display` output is the bare underlying message; callers prefix it
/// with `Error: `.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Client(#[from] jsonrpsee_core::Error),

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
