use sg_app::{Console, logger, observer};
use sg_auth::{SessionStore, SessionStoreConfig};

use std::error::Error;

use log::info;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = sg_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting surger v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // The application root owns the store for the life of the process
    let mut store = SessionStore::new(SessionStoreConfig {
        latency: config.session.latency(),
    });
    let session_observer = observer::spawn(store.subscribe());

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    Console::new(
        &mut store,
        stdin,
        stdout,
        config.validation.min_password_length,
    )
    .run()
    .await?;

    drop(store);
    session_observer.await?;

    info!("Goodbye");
    Ok(())
}
