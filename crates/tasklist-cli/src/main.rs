mod cli;

use clap::Parser;
use cli::Cli;
use tasklist_core::AppConfig;
use tasklist_tui::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKMASTER_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    tracing::info!("Starting {}", config.effective_title());

    let mut app = App::new(config);
    app.run().await?;

    let stats = app.store.stats();
    tracing::info!(
        "Exiting with {} tasks ({} completed, {} pending)",
        stats.total,
        stats.completed,
        stats.pending
    );

    Ok(())
}
