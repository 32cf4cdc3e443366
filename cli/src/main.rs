use std::time::Duration;

use clap::Parser;
use cli::config::{AnalyzeArgs, Cli, Command, StreamArgs};
use cli::net::Backend;
use cli::printer::{Printer, format_panel};
use cli::{ClientConfig, CliError, Controller, output};
use session::Slot;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => run_analyze(&cli.base_url, args).await,
        Command::Logs(args) => run_logs(&cli.base_url, args).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn controller(config: ClientConfig) -> Result<Controller, CliError> {
    Ok(Controller::new(Backend::new(config)?, Printer::stderr()))
}

async fn run_analyze(base_url: &str, args: AnalyzeArgs) -> Result<(), CliError> {
    let config = ClientConfig::new(base_url)?
        .with_stream_timeout(args.stream.timeout())
        .with_drain(Duration::from_millis(args.drain_ms));
    let controller = controller(config)?;

    if let Some(path) = &args.before {
        controller.select_file(Slot::Before, path)?;
    }
    if let Some(path) = &args.after {
        controller.select_file(Slot::After, path)?;
    }

    let outcome = controller.run_analysis().await;
    controller.finish();
    let rendered = outcome?;

    controller.read(|session| -> Result<(), CliError> {
        if let Some(panel) = session.geojson() {
            println!("{}", format_panel(panel));
        }
        if let Some(stats) = rendered.stats {
            eprintln!(
                "changed pixels: {}, texture confirmed: {}",
                stats.pixel_changed_pixels, stats.texture_confirmed_pixels
            );
        }
        if let Some(dir) = &args.out_dir {
            for path in output::write_outputs(session, dir)? {
                eprintln!("wrote {}", path.display());
            }
        }
        Ok(())
    })
}

async fn run_logs(base_url: &str, args: StreamArgs) -> Result<(), CliError> {
    let config = ClientConfig::new(base_url)?.with_stream_timeout(args.timeout());
    let controller = controller(config)?;
    controller.watch_logs().await;
    controller.finish();
    Ok(())
}
