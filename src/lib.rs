pub mod app;
pub mod auth;
pub mod cli;
pub mod client;
pub mod coins;
pub mod error;
pub mod resolver;

pub use app::{run, Outcome};
pub use cli::Cli;
