use std::io::Write;
use std::process::ExitCode;

use jsonrpsee_core::JsonValue;

use crate::cli::Cli;
use crate::client::builder::HttpClientBuilder;
use crate::client::rpc::{self, Reply};
use crate::error::{CliError, TransportError};
use crate::resolver;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

enum Answer {
    Result(JsonValue),
    Failure(String),
}

/// Runs one invocation and writes everything meant for the user to `out`.
///
/// Without a method (or with `--help`) only the help text is written and no
/// request is made.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome, std::io::Error> {
    let method = match cli.method() {
        Some(method) if !cli.help => method,
        _ => {
            writeln!(out, "{}", Cli::help_text().trim_end())?;
            return Ok(Outcome::Success);
        }
    };

    match call(cli, method).await {
        Ok(Answer::Result(result)) => match serde_json::to_string_pretty(&result) {
            Ok(text) => {
                writeln!(out, "{}", text)?;
                Ok(Outcome::Success)
            }
            Err(err) => fail(out, &CliError::from(err)),
        },
        Ok(Answer::Failure(text)) => {
            writeln!(out, "{}", text)?;
            Ok(Outcome::Failure)
        }
        Err(err) => fail(out, &err),
    }
}

fn fail<W: Write>(out: &mut W, err: &CliError) -> Result<Outcome, std::io::Error> {
    tracing::debug!(error = ?err, "invocation failed");
    writeln!(out, "Error: {}", err)?;
    Ok(Outcome::Failure)
}

async fn call(cli: &Cli, method: &str) -> Result<Answer, CliError> {
    let endpoint = cli.endpoint();
    let credentials = cli.credentials();
    tracing::debug!(%endpoint, coin = %cli.coin, method, "resolved daemon endpoint");

    let http = reqwest::Client::builder()
        .build()
        .map_err(TransportError::from)?;
    let client = HttpClientBuilder::new(credentials.clone())
        .http_client(http.clone())
        .build(endpoint.as_str());

    let params = rpc::array_params(rpc::params_for(cli.args(), &cli.wallet))?;
    let error = match rpc::invoke(&client, method, params).await? {
        Reply::Result(result) => return Ok(Answer::Result(result)),
        Reply::Error(error) => error,
    };

    let spec = resolver::fetch_spec(&http, &endpoint, &credentials).await?;
    let resolution = resolver::resolve(&spec, &error);
    tracing::debug!(?resolution, "resolved daemon error");
    Ok(Answer::Failure(resolution.render()?))
}
