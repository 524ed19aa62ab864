use jsonrpsee_core::client::ClientT;
use jsonrpsee_core::params::ArrayParams;
use jsonrpsee_core::JsonValue;
use jsonrpsee_types::ErrorObjectOwned;
use serde_json::json;

use crate::client::builder::HttpClient;
use crate::error::CliError;

/// What the daemon answered to a single call.
#[derive(Debug)]
pub enum Reply {
    Result(JsonValue),
    Error(ErrorObjectOwned),
}

/// Positional parameters for a call: every raw argument as text, followed by
/// a trailing `{"xpub": wallet}` object. The trailing object is always
/// present, even when `wallet` is empty.
pub fn params_for(args: &[String], wallet: &str) -> Vec<JsonValue> {
    let mut params: Vec<JsonValue> = args.iter().cloned().map(JsonValue::String).collect();
    params.push(json!({ "xpub": wallet }));
    params
}

pub fn array_params(params: Vec<JsonValue>) -> Result<ArrayParams, serde_json::Error> {
    let mut array = ArrayParams::new();
    for param in params {
        array.insert(param)?;
    }
    Ok(array)
}

/// Performs one call. RPC-level errors are returned as [`Reply::Error`];
/// everything else that goes wrong is a [`CliError`], carrying the HTTP
/// failure itself when the transport recorded one.
pub async fn invoke(
    client: &HttpClient,
    method: &str,
    params: ArrayParams,
) -> Result<Reply, CliError> {
    let response = client
        .client
        .request::<JsonValue, ArrayParams>(method, params)
        .await;
    match response {
        Ok(result) => Ok(Reply::Result(result)),
        Err(jsonrpsee_core::Error::Call(err)) => {
            tracing::debug!(
                code = err.code(),
                message = err.message(),
                "daemon returned an error"
            );
            Ok(Reply::Error(err))
        }
        Err(err) => match client.failure.take() {
            Some(cause) => Err(cause.into()),
            None => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn trailing_wallet_object_is_last() {
        let params = params_for(&strings(&["addr", "0.5"]), "xpub661My");
        assert_eq!(params.len(), 3);
        assert_eq!(params[0], json!("addr"));
        assert_eq!(params[1], json!("0.5"));
        assert_eq!(params[2], json!({ "xpub": "xpub661My" }));
    }

    #[test]
    fn trailing_wallet_object_without_wallet() {
        let params = params_for(&[], "");
        assert_eq!(params, vec![json!({ "xpub": "" })]);
    }

    #[test]
    fn arguments_stay_text() {
        let params = params_for(&strings(&["5", "true", "-1", "{}"]), "w");
        assert_eq!(params.len(), 5);
        assert!(params[..4].iter().all(JsonValue::is_string));
        let last = params.last().and_then(JsonValue::as_object).unwrap();
        assert_eq!(last.len(), 1);
        assert!(last.contains_key("xpub"));
    }
}
