//! Task Timer - A terminal countdown timer with a persistent task log
//!
//! This is the main entry point for the task-timer application.

use tracing::info;

use task_timer::{
    config::Config,
    persistence::{open_store, FileStorage},
    state::Dispatcher,
    tasks::tick_task,
    ui,
    utils::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config);

    let state_dir = config.state_dir();
    info!("Starting task-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: state_dir={}, save_interval={}ms, tick={}ms",
        state_dir.display(),
        config.save_interval_ms,
        config.tick_ms
    );

    let store = open_store(
        FileStorage::new(state_dir),
        config.save_interval(),
        config.fresh,
    );

    // Start the countdown tick background task
    let (dispatcher, actions) = Dispatcher::channel();
    tokio::spawn(tick_task(dispatcher, config.tick_period()));

    ui::run(store, actions).await?;

    info!("Shutdown complete");
    Ok(())
}
