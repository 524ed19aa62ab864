//! Turns a daemon error code into the exception it stands for.
//!
//! The daemon publishes its error table at `<endpoint>/spec`:
//!
//! ```json
//! {"exceptions": {"1": {"exc_name": "BadRequest", "docstring": "invalid params"}}}
//! ```
//!
//! A non-null top-level `error` key means the daemon itself is unhealthy and
//! wins over the error that triggered the lookup.

use jsonrpsee_core::JsonValue;
use jsonrpsee_types::ErrorObjectOwned;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;

use crate::auth::Credentials;
use crate::error::TransportError;

/// Fetches the spec document. Any failure here is fatal to the caller.
pub async fn fetch_spec(
    http: &reqwest::Client,
    endpoint: &str,
    credentials: &Credentials,
) -> Result<JsonValue, TransportError> {
    let url = format!("{}/spec", endpoint);
    tracing::debug!(%url, "fetching daemon spec");

    let response = http
        .get(url.as_str())
        .header(AUTHORIZATION, credentials.header_value())
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            method: "GET",
            url,
            status,
        });
    }

    let body = response.bytes().await?;
    let spec: JsonValue = serde_json::from_slice(&body).map_err(|source| TransportError::Decode {
        url: url.clone(),
        source,
    })?;
    if !spec.is_object() {
        return Err(TransportError::NotAnObject { url });
    }
    Ok(spec)
}

#[derive(Debug)]
pub enum Resolution<'a> {
    /// The spec document reported its own error.
    Degraded(&'a JsonValue),
    /// The code maps to a named exception.
    Known {
        exc_name: &'a str,
        docstring: &'a str,
    },
    /// No usable entry, the original error is shown as is.
    Raw(&'a ErrorObjectOwned),
}

pub fn resolve<'a>(spec: &'a JsonValue, error: &'a ErrorObjectOwned) -> Resolution<'a> {
    if let Some(degraded) = spec.get("error").filter(|value| !value.is_null()) {
        return Resolution::Degraded(degraded);
    }

    let code = error.code().to_string();
    spec.get("exceptions")
        .and_then(|exceptions| exceptions.get(code.as_str()))
        .and_then(|exception| {
            Some(Resolution::Known {
                exc_name: exception.get("exc_name")?.as_str()?,
                docstring: exception.get("docstring")?.as_str()?,
            })
        })
        .unwrap_or(Resolution::Raw(error))
}

#[derive(Serialize)]
struct RawError<'a> {
    code: i32,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl Resolution<'_> {
    /// Text printed for this resolution.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            Resolution::Degraded(value) => serde_json::to_string_pretty(value),
            Resolution::Known {
                exc_name,
                docstring,
            } => Ok(format!("{}: {}", exc_name, docstring)),
            Resolution::Raw(error) => {
                let data = error
                    .data()
                    .map(|raw| serde_json::from_str::<JsonValue>(raw.get()))
                    .transpose()?;
                serde_json::to_string_pretty(&RawError {
                    code: error.code(),
                    message: error.message(),
                    data,
                })
            }
        }
    }
}
