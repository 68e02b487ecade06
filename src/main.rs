use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use itemdeck::api::{HttpItemSource, ItemSource};
use itemdeck::cli::{format_plain, Cli};
use itemdeck::config::Config;
use itemdeck::logging;
use itemdeck::viewmodel::ItemViewModel;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.plain {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    let config = cli.resolve_config()?;
    let source = HttpItemSource::new(&config.endpoint)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.plain {
        return run_plain(&runtime, &source);
    }

    run_interactive(&runtime, source, &config)
}

fn run_plain(runtime: &tokio::runtime::Runtime, source: &HttpItemSource) -> anyhow::Result<()> {
    let items = runtime.block_on(source.fetch_items())?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(format_plain(&items).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_interactive(
    runtime: &tokio::runtime::Runtime,
    source: HttpItemSource,
    config: &Config,
) -> anyhow::Result<()> {
    tracing::info!(url = %source.url(), "Starting itemdeck");
    let view_model = ItemViewModel::new(source, runtime.handle().clone());
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    itemdeck::ui::run(view_model, runtime.handle(), tick_rate).context("Terminal UI failed")?;
    Ok(())
}
