//! # CLI
//!
//! `restcase serve` runs the HTTP front end. `restcase run` and
//! `restcase generate` take one `TestRequest` JSON document from a file or
//! stdin, for use in scripts and CI.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::codegen::Dialect;
use crate::http::client::TransportConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "restcase", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve `/run-rest-assured` and `/generate-code` over HTTP.
    Serve(ServeConfig),
    /// Execute a single test request and print the result.
    Run(RunConfig),
    /// Print the test source equivalent to a request.
    Generate(GenerateConfig),
}

#[derive(Debug, Clone, Args)]
pub struct TlsArgs {
    /// Validate server certificates. Off by default.
    #[arg(long, env = "RESTCASE_VERIFY_TLS")]
    pub verify_tls: bool,
}

impl TlsArgs {
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            verify_tls: self.verify_tls,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    #[arg(long, env = "RESTCASE_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
    #[command(flatten)]
    pub tls: TlsArgs,
}

#[derive(Debug, Clone, Args)]
pub struct RunConfig {
    /// Path to a TestRequest JSON file, or `-` for stdin.
    pub request: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
    #[command(flatten)]
    pub tls: TlsArgs,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateConfig {
    /// Path to a TestRequest JSON file, or `-` for stdin.
    pub request: PathBuf,
    #[arg(long, value_enum, default_value_t = Dialect::RestAssured)]
    pub dialect: Dialect,
}

/// How `run` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
