use crate::auth::Credentials;
use crate::client::transport::{connect, FailureSlot};
use std::time::Duration;

use jsonrpsee_core::client::IdKind;
use jsonrpsee_core::client::{Client, ClientBuilder};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_LOG_LENGTH: u32 = 4096;

/// A jsonrpsee client posting over HTTP, together with the slot its
/// transport reports failures into.
pub struct HttpClient {
    pub client: Client,
    pub failure: FailureSlot,
}

pub struct HttpClientBuilder {
    credentials: Credentials,
    http: Option<reqwest::Client>,
}

impl HttpClientBuilder {
    /// Create a new HTTP client builder sending `credentials` as a Basic
    /// `Authorization` header with every call.
    pub fn new(credentials: Credentials) -> HttpClientBuilder {
        HttpClientBuilder {
            credentials,
            http: None,
        }
    }

    /// Reuse an existing HTTP client instead of creating a fresh one.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client with specified URL to post to.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self, url: impl Into<String>) -> HttpClient {
        let Self { credentials, http } = self;
        let failure = FailureSlot::default();
        let (sender, receiver) = connect(
            http.unwrap_or_default(),
            url,
            &credentials,
            failure.clone(),
        );

        let client = ClientBuilder::default()
            .set_max_logging_length(MAX_LOG_LENGTH)
            .request_timeout(REQUEST_TIMEOUT)
            .id_format(IdKind::Number)
            .build_with_tokio(sender, receiver);

        HttpClient { client, failure }
    }
}
