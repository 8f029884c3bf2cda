//! Command-line and environment configuration.

use clap::Parser;

/// Example user API answering in JSend envelopes.
#[derive(Debug, Clone, Parser)]
#[command(name = "users-server", version)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 1234)]
    pub port: u16,

    /// Log filter directives, e.g. `info` or `users_server=debug,tower_http=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
