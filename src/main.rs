use chrono::Local;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use comic_mirror::cli::Cli;
use comic_mirror::mirror::mirror_archive;
use comic_mirror::{summary, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    cli.apply(&mut config);

    let start_time = Local::now();
    let downloaded = mirror_archive(&config).await?;
    summary!(start_time, downloaded);

    Ok(())
}
