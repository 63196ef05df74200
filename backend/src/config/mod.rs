//! Central module for application-wide configuration settings.
//!
//! Configuration is resolved once at process startup from CLI arguments and
//! environment variables. Nothing in the request path reads the environment
//! ad hoc; behavior toggles such as verbose auth logging are carried on this
//! struct instead.

use std::net::SocketAddr;

use clap::Parser;

/// Gatehouse backend configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "backend")]
#[command(about = "Token-gated web API backend")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Shared secret used to verify JWT signatures
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: String,

    /// Log the credential source and a truncated token preview on every
    /// authenticated request (diagnostics; never logs full tokens)
    #[arg(long, env = "VERBOSE_AUTH_LOGGING", default_value = "false")]
    pub verbose_auth_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
