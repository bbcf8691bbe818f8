//! pypi2pkgbuild - Generate Arch Linux PKGBUILDs from Python package index metadata
//!
//! This is the CLI application: it layers configuration, drives the
//! drafter against the XML-RPC index and prints the drafting events.

mod cli;
mod error;
mod events;
mod logging;

use crate::cli::Cli;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use pypi2pkgbuild_config::Config;
use pypi2pkgbuild_drafter::Drafter;
use pypi2pkgbuild_events::EventReceiver;
use pypi2pkgbuild_index::XmlRpcIndex;
use pypi2pkgbuild_net::{NetClient, NetConfig};
use std::future::Future;
use std::path::PathBuf;
use std::process;
use tokio::select;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting pypi2pkgbuild v{}", env!("CARGO_PKG_VERSION"));

    // Precedence: defaults < file < environment < flags
    let mut config = Config::load_or_default(cli.config.as_deref()).await?;
    config.merge_env()?;
    config.apply_index_url(cli.url);

    let client = NetClient::new(&NetConfig::from(&config.network))?;
    let index = XmlRpcIndex::new(client, config.index.url.clone())?;
    info!(endpoint = index.endpoint(), "Using package index");

    let base_dir = std::env::current_dir()?;

    let (event_sender, event_receiver) = pypi2pkgbuild_events::channel();
    let drafter = Drafter::new(cli.package, cli.version).with_event_sender(event_sender);
    let mut event_handler = EventHandler::new();

    let path = execute_with_events(
        async {
            let draft = drafter.run(&index).await?;
            drafter.write_recipe(&base_dir, &draft).await
        },
        event_receiver,
        &mut event_handler,
    )
    .await?;

    info!(path = %path.display(), "Command completed successfully");
    Ok(())
}

/// Drive `work` while printing the events it emits
async fn execute_with_events<F>(
    work: F,
    mut event_receiver: EventReceiver,
    event_handler: &mut EventHandler,
) -> Result<PathBuf, CliError>
where
    F: Future<Output = pypi2pkgbuild_drafter::Result<PathBuf>>,
{
    let mut work = Box::pin(work);

    loop {
        select! {
            result = &mut work => {
                // Drain any remaining events
                while let Ok(event) = event_receiver.try_recv() {
                    event_handler.handle_event(event);
                }
                return result.map_err(CliError::from);
            }

            event = event_receiver.recv() => {
                match event {
                    Some(event) => event_handler.handle_event(event),
                    None => { /* Channel closed: keep waiting for the draft to finish */ }
                }
            }
        }
    }
}

/// Initialize tracing on stderr
///
/// `RUST_LOG` takes precedence; otherwise `--debug` selects debug output
/// and the default is warnings only.
fn init_tracing(debug_enabled: bool) {
    let default_level = if debug_enabled { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
