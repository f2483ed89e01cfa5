use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use jissue::config::{AppConfig, DispatchMode};
use jissue::context::AppContext;
use jissue::domain::summary::SummaryFormat;
use jissue::error::{AppError, AppResult};
use jissue::infra::claude::ClaudeClient;
use jissue::infra::jira::JiraClient;
use jissue::web::build_router;

#[derive(Parser)]
#[command(
    name = "jissue",
    author,
    version,
    about = "Files Jira issues summarized from free-form text by a language model"
)]
struct Cli {
    /// Address the HTTP server binds to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
    /// Override JISSUE_DISPATCH (sync | async).
    #[arg(long, value_parser = parse_mode)]
    mode: Option<DispatchMode>,
    /// Override JISSUE_SUMMARY_FORMAT (json | first-line).
    #[arg(long, value_parser = parse_format)]
    format: Option<SummaryFormat>,
}

fn parse_mode(value: &str) -> Result<DispatchMode, String> {
    DispatchMode::parse(value).ok_or_else(|| format!("unknown dispatch mode: {value}"))
}

fn parse_format(value: &str) -> Result<SummaryFormat, String> {
    SummaryFormat::parse(value).ok_or_else(|| format!("unknown summary format: {value}"))
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(mode) = cli.mode {
        config.dispatch_mode = mode;
    }
    if let Some(format) = cli.format {
        config.summary_format = format;
    }

    let language_model = Arc::new(ClaudeClient::new(
        config.anthropic_base_url.clone(),
        config.claude_api_key.clone(),
        config.claude_model.clone(),
    ));
    let issue_tracker = Arc::new(JiraClient::new(
        config.jira_base_url.clone(),
        config.jira_user.clone(),
        config.jira_api_token.clone(),
    ));

    tracing::info!(
        bind = %cli.bind,
        mode = ?config.dispatch_mode,
        format = ?config.summary_format,
        "starting jissue gateway"
    );

    let app = build_router(AppContext::new(config, language_model, issue_tracker));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .map_err(AppError::Io)?;
    axum::serve(listener, app).await.map_err(AppError::Io)?;

    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jissue=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}
