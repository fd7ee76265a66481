use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use jboard::cli::{handle_command, report_session_events, Cli};
use jboard::config::{init_config, LogFormat};
use jboard::session::FileSessionStore;
use jboard::JobBoardApp;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jboard=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = init_config()?;
    init_tracing(config.log_format);

    let config = match cli.api_url.as_deref() {
        Some(url) => config.clone().with_api_url(url)?,
        None => config.clone(),
    };
    debug!(api = %config.api_base_url, "Starting jboard");
    debug!(session_file = %config.session_file.display(), "Using session file");

    let store = Arc::new(FileSessionStore::new(config.session_file.clone()));
    let app = JobBoardApp::new(&config, store)?;
    let mut events = app.session.subscribe();

    let result = handle_command(cli.command, &app).await;
    report_session_events(&mut events);
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            println!("❌ {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
