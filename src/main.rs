use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use restcase::cli::{Cli, Command, GenerateConfig, OutputFormat, RunConfig, ServeConfig};
use restcase::commands::{AppState, router};
use restcase::{CodeEmitter, ReqwestTransport, TestExecutor, TestRequest};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    match Cli::parse().command {
        Command::Serve(config) => serve(config).await,
        Command::Run(config) => run(config).await,
        Command::Generate(config) => generate(config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn serve(config: ServeConfig) -> anyhow::Result<ExitCode> {
    let state = AppState::new(config.tls.transport_config())?;
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    info!(addr = %config.bind, verify_tls = config.tls.verify_tls, "restcase listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(ExitCode::SUCCESS)
}

async fn run(config: RunConfig) -> anyhow::Result<ExitCode> {
    let request = read_request(&config.request)?;
    let executor = TestExecutor::new(ReqwestTransport::new(config.tls.transport_config())?);

    let result = executor.run(&request).await;
    match config.output {
        OutputFormat::Text => {
            println!("Status: {}", result.status_code);
            println!("{}", result.response_body);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn generate(config: GenerateConfig) -> anyhow::Result<ExitCode> {
    let request = read_request(&config.request)?;
    match CodeEmitter::default().generate_or_message(&request, config.dialect) {
        Ok(source) => {
            print!("{source}");
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_request(path: &Path) -> anyhow::Result<TestRequest> {
    let raw = if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read request from stdin")?;
        raw
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("`{}` is not a valid test request", path.display()))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
