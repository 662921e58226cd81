//! # Droidworks
//!
//! Interactive droid catalog.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Resolve the config file, load CliConfig                            │
//! │     (defaults ◄─ droidworks.toml ◄─ DROIDWORKS_*)                      │
//! │  2. Initialize tracing (RUST_LOG, else config log_filter) on stderr,   │
//! │     then log where the config came from                                │
//! │  3. Build the catalog with the configured category order               │
//! │  4. Seed default droids (optional)                                     │
//! │  5. Run the menu on stdin / stdout                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use anyhow::Context;
use droidworks_cli::config::{CliConfig, ConfigSource};
use droidworks_cli::run;
use droidworks_cli::ui::UserInterface;
use droidworks_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let source = ConfigSource::resolve();
    let config = CliConfig::load_from(&source)
        .with_context(|| format!("failed to load configuration from {}", source))?;
    init_tracing(&config.log_filter);

    info!(
        %source,
        load_default_droids = config.load_default_droids,
        category_order = ?config.category_order.as_slice(),
        "Configuration loaded"
    );

    let mut catalog = Catalog::new(config.category_order.clone());
    if config.load_default_droids {
        catalog
            .load_default_droids()
            .context("failed to load default droids")?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut ui = UserInterface::new(stdin.lock(), stdout.lock());
    run(&mut ui, &mut catalog).context("catalog session failed")?;

    info!(droids = catalog.len(), "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Output goes to stderr.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}
