//! acornhr - Interactive TUI console for the Acorn HR backend.
//!
//! Supports two modes:
//! - Live mode (default): talk to a running HR backend over HTTP
//! - Sample mode: browse built-in demo data without a backend
//!
//! Usage:
//!   acornhr                               # live mode against localhost
//!   acornhr --url http://hr.local:5000    # live mode, custom backend
//!   acornhr --sample                      # offline demo data

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use acornhr::client::{DirectoryProvider, HttpClient, PasswordGateway, SampleBackend};
use acornhr::tui::App;

/// Default backend address.
const DEFAULT_URL: &str = "http://127.0.0.1:5000";

/// Interactive admin console for the Acorn HR backend.
#[derive(Parser)]
#[command(name = "acornhr", about = "HR admin console")]
struct Args {
    /// Backend base URL (live mode).
    #[arg(long, default_value = DEFAULT_URL, value_name = "URL")]
    url: String,

    /// Use built-in sample data instead of a backend.
    #[arg(long)]
    sample: bool,

    /// Redraw interval in milliseconds.
    #[arg(long, default_value_t = 250, value_name = "MS")]
    tick: u64,

    /// Write logs to this file. Without it logging is disabled, since the
    /// terminal is owned by the UI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(path: &str, verbose: u8) -> std::io::Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("acornhr={}", level)));

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(file)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        if let Err(e) = init_logging(path, args.verbose) {
            eprintln!("Error opening log file '{}': {}", path, e);
            std::process::exit(1);
        }
    }

    // Both traits are served by one backend instance.
    let (provider, gateway): (Box<dyn DirectoryProvider>, Arc<dyn PasswordGateway>) = if args.sample
    {
        let backend = SampleBackend::new();
        (Box::new(backend.clone()), Arc::new(backend))
    } else {
        let client = match HttpClient::new(&args.url) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error creating backend client: {}", e);
                std::process::exit(1);
            }
        };
        (Box::new(client.clone()), Arc::new(client))
    };

    let tick_rate = Duration::from_millis(args.tick.max(50));
    let app = App::new(provider, gateway);

    if let Err(e) = app.run(tick_rate) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
