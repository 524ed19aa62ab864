use clap::{CommandFactory, Parser};

use crate::auth::Credentials;
use crate::coins;

/// Call RPC methods from console
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bitcart-cli",
    version,
    override_usage = "bitcart-cli [OPTIONS] method [args]...",
    disable_help_flag = true
)]
pub struct Cli {
    /// show help
    #[arg(short, long)]
    pub help: bool,

    /// specify wallet
    #[arg(short, long, env = "BITCART_WALLET", default_value = "")]
    pub wallet: String,

    /// specify coin to use
    #[arg(short, long, env = "BITCART_COIN", default_value = "btc")]
    pub coin: String,

    /// specify daemon user
    #[arg(short, long, env = "BITCART_LOGIN", default_value = "electrum")]
    pub user: String,

    /// specify daemon password
    #[arg(
        short,
        long,
        env = "BITCART_PASSWORD",
        default_value = "electrumz",
        hide_env_values = true
    )]
    pub password: String,

    /// specify daemon URL (overrides defaults)
    #[arg(short = 'U', long, env = "BITCART_DAEMON_URL", default_value = "")]
    pub url: String,

    /// RPC method to call, followed by its arguments. Everything after the
    /// method is passed through as text, flags included.
    #[arg(
        value_name = "METHOD",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    pub fn method(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }

    /// `--url` when given, otherwise the coin's default daemon. Unknown coins
    /// resolve to an empty endpoint.
    pub fn endpoint(&self) -> String {
        if !self.url.is_empty() {
            return self.url.clone();
        }
        coins::default_url(&self.coin)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.user.as_str(), self.password.as_str())
    }

    pub fn help_text() -> String {
        Cli::command().render_help().to_string()
    }
}
