//! tradelog - settings CLI for the trading journal dashboard.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tradelog_app::cli::Args;
use tradelog_app::{App, AppConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    tradelog_app::logging::init_logging()?;

    info!("Starting tradelog v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(path) = args.settings_path {
        config.settings_path = Some(path);
    }

    let app = App::new(&config);
    app.run(args.command)?;

    Ok(())
}
