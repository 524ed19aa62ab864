use std::sync::{Arc, Mutex};

use bytes::Bytes;
use futures_util::stream::StreamExt;
use jsonrpsee_core::{
    async_trait,
    client::{ReceivedMessage, TransportReceiverT, TransportSenderT},
    JsonValue,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::auth::Credentials;
use crate::error::TransportError;

/// Holds the error that stopped the [`Sender`], so the caller can report it
/// instead of the client's own shutdown error.
#[derive(Clone, Debug, Default)]
pub struct FailureSlot(Arc<Mutex<Option<TransportError>>>);

impl FailureSlot {
    fn store(&self, err: TransportError) {
        if let Ok(mut slot) = self.0.lock() {
            slot.get_or_insert(err);
        }
    }

    pub fn take(&self) -> Option<TransportError> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Posts every outgoing message to the daemon and hands the body of the
/// HTTP response over to the paired [`Receiver`].
pub struct Sender {
    http: reqwest::Client,
    endpoint: String,
    authorization: String,
    responses: mpsc::UnboundedSender<Bytes>,
    failure: FailureSlot,
}

pub struct Receiver(UnboundedReceiverStream<Bytes>);

impl Sender {
    async fn post(&self, msg: String) -> Result<Bytes, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, "posting JSON-RPC request");
        let response = self
            .http
            .post(self.endpoint.as_str())
            .header(AUTHORIZATION, self.authorization.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(msg)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                method: "POST",
                url: self.endpoint.clone(),
                status,
            });
        }

        let body = response.bytes().await?;
        tracing::trace!(len = body.len(), "received JSON-RPC response body");

        let envelope: JsonValue =
            serde_json::from_slice(&body).map_err(|source| TransportError::Decode {
                url: self.endpoint.clone(),
                source,
            })?;
        let is_response = envelope.as_object().map_or(false, |object| {
            object.contains_key("result") || object.contains_key("error")
        });
        if !is_response {
            return Err(TransportError::NotJsonRpc {
                url: self.endpoint.clone(),
            });
        }
        Ok(body)
    }
}

#[async_trait()]
impl TransportSenderT for Sender {
    #[doc = " Error that may occur during sending a message."]
    type Error = TransportError;

    #[doc = " Send."]
    async fn send(&mut self, msg: String) -> Result<(), Self::Error> {
        match self.post(msg).await {
            Ok(body) => self
                .responses
                .send(body)
                .map_err(|_err| TransportError::ReceiverDisconnected),
            Err(err) => {
                tracing::debug!(error = %err, "JSON-RPC request failed");
                self.failure.store(err);
                Err(TransportError::Stopped)
            }
        }
    }
}

#[async_trait()]
impl TransportReceiverT for Receiver {
    #[doc = " Error that may occur during receiving a message."]
    type Error = TransportError;

    #[doc = " Receive."]
    async fn receive(&mut self) -> Result<ReceivedMessage, Self::Error> {
        match self.0.next().await {
            Some(body) => Ok(ReceivedMessage::Bytes(body.to_vec())),
            None => Err(TransportError::SenderDisconnected),
        }
    }
}

/// Pairs a sender and receiver for `endpoint`. Nothing is dialed until the
/// first message is sent, so an unusable endpoint only fails on send.
pub fn connect(
    http: reqwest::Client,
    endpoint: impl Into<String>,
    credentials: &Credentials,
    failure: FailureSlot,
) -> (Sender, Receiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sender = Sender {
        http,
        endpoint: endpoint.into(),
        authorization: credentials.header_value(),
        responses: tx,
        failure,
    };
    (sender, Receiver(UnboundedReceiverStream::new(rx)))
}
