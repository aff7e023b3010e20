use anyhow::Result;
use wishmaker::config::Config;
use wishmaker::logger::{self, Logger};
use wishmaker::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    if let Some(path) = logger::init_file_logging(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    log::info!("Starting wishmaker {}", env!("CARGO_PKG_VERSION"));

    // Run the TUI application
    ui::run_app(config, Logger::new()).await?;

    Ok(())
}
