//! TaskCorner entry point.
//!
//! Wires the Windows adapters into the corner service and hosts the process
//! until the user asks it to exit.
//!
//! # Exiting
//!
//! TaskCorner has no tray icon.  Press Ctrl-C in its console or close the
//! console window; both restore the original taskbar setting before the
//! process ends.  A forced kill (`taskkill /F`, Task Manager) skips that
//! restore, so the taskbar keeps whatever state it was last given.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()             -- %APPDATA%\TaskCorner\config.toml, or defaults
//!  └─ PlatformAdapters::native() -- hooks, SendInput, registry, message box
//!  └─ CornerService::start()    -- subscribe, arm taskbar, install hooks
//!  └─ wait for Ctrl-C / console close
//!  └─ CornerService::on_exit_requested()
//!       ├─ remove hooks
//!       ├─ restore original taskbar setting
//!       └─ release UI resources
//! ```

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use taskcorner::application::corner_trigger::CornerTriggerUseCase;
use taskcorner::application::lifecycle::CornerService;
use taskcorner::application::report::ErrorReporter;
use taskcorner::application::shell_state::ShellStateStore;
use taskcorner::infrastructure::platform::PlatformAdapters;
use taskcorner::infrastructure::storage::config::{load_config, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_error) = match load_config() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .init();

    info!("TaskCorner starting");
    if let Some(e) = config_error {
        warn!("using default configuration: {e}");
    }

    let adapters = PlatformAdapters::native().context("TaskCorner cannot run here")?;

    let reporter = Arc::new(ErrorReporter::new(adapters.notifier));
    let use_case = CornerTriggerUseCase::new(
        adapters.injector,
        ShellStateStore::new(adapters.shell),
        Arc::clone(&reporter),
        config.trigger.settle_delay(),
    );
    let mut service = CornerService::new(adapters.hooks, use_case, reporter);

    service
        .start(config.shell.auto_hide_on_start)
        .context("failed to install global input hooks")?;

    info!("TaskCorner ready.  Press Ctrl-C to exit.");
    wait_for_exit_request().await?;

    info!("exit requested");
    service.on_exit_requested();
    info!("TaskCorner stopped");
    Ok(())
}

/// Resolves when the user asks the process to exit.
#[cfg(target_os = "windows")]
async fn wait_for_exit_request() -> anyhow::Result<()> {
    let mut close = tokio::signal::windows::ctrl_close().context("listen for console close")?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res.context("listen for Ctrl-C")?,
        _ = close.recv() => {}
    }
    Ok(())
}

#[cfg(not(target_os = "windows"))]
async fn wait_for_exit_request() -> anyhow::Result<()> {
    tokio::signal::ctrl_c().await.context("listen for Ctrl-C")
}
