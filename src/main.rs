use anyhow::Result;
use speeddial::config::Config;
use speeddial::logger::Logger;
use speeddial::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Write a default config file and exit
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;

    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;
    log::info!(
        "Starting speeddial with {} actions, orientation {:?}",
        config.dial.items.len(),
        config.dial.orientation
    );

    // Run the TUI application
    ui::run_app(&config).await?;

    Ok(())
}
