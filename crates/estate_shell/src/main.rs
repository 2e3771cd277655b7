//! Estate Shell - terminal storefront for the tokenized real-estate demo
//!
//! Reads line commands from stdin and drives the same storefront logic the
//! browser page uses. Timers (wallet handshake, purchase processing,
//! notification lifetimes, price ticks) run on tokio.
//!
//! Config lookup:
//! - `--config <path>`
//! - `ESTATE_CONFIG`
//! - Linux: ~/.config/estate/config.json
//! - Windows: %APPDATA%\estate\config.json
//! - MacOS: ~/Library/Application Support/estate/config.json
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see every recomputation.

use std::path::PathBuf;
use std::process;

use estate::config::StoreConfig;
use estate::error::StoreError;
use estate::storefront::Storefront;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod command;
mod console;
mod paths;
mod scheduler;

use command::{parse_command, Command, HELP};
use console::ConsoleView;
use paths::{AppPaths, ConfigSource};
use scheduler::TokioScheduler;

fn usage() -> ! {
    eprintln!("usage: estate-shell [--config <path>]");
    process::exit(2);
}

fn parse_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(p) => config = Some(PathBuf::from(p)),
                None => usage(),
            },
            "--help" | "-h" => {
                println!("estate-shell [--config <path>]\n\n{HELP}");
                process::exit(0);
            }
            _ => usage(),
        }
    }
    config
}

fn load_config(source: &ConfigSource) -> Result<StoreConfig, StoreError> {
    if source.required() {
        StoreConfig::load(source.path())
    } else {
        StoreConfig::load_or_default(source.path())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flag = parse_args();
    let paths = AppPaths::new()?;
    let source = ConfigSource::from_process(flag, &paths);
    let config = load_config(&source)?;
    info!("Config loaded ({})", source.path().display());

    let (tx, mut timers) = mpsc::unbounded_channel();
    let view = ConsoleView::new(
        std::io::stdout(),
        config.pricing.currency,
        config.wallets.clone(),
    );
    let mut store = Storefront::new(config, view, TokioScheduler::new(tx));
    store.view_mut().line("type `help` for commands");
    store.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        store.report_fault(&e);
                        break;
                    }
                };
                let cfg = store.config();
                match parse_command(&line, &cfg.wallets, &cfg.quantity_presets) {
                    Ok(None) => {}
                    Ok(Some(Command::Event(ev))) => store.dispatch(ev),
                    Ok(Some(Command::Status)) => print_status(&mut store),
                    Ok(Some(Command::Config)) => match serde_json::to_string_pretty(store.config()) {
                        Ok(json) => store.view_mut().line(&json),
                        Err(e) => store.report_fault(&e),
                    },
                    Ok(Some(Command::Help)) => store.view_mut().line(HELP),
                    Ok(Some(Command::Quit)) => break,
                    Err(e) => {
                        warn!("{}", e);
                        store.view_mut().line(&format!("{e}; type `help` for commands"));
                    }
                }
            }
            Some(task) = timers.recv() => store.fire(task),
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received");
                break;
            }
        }
    }

    if let Some(r) = store.purchase().receipt() {
        info!(
            purchases = store.purchase().completed(),
            last_quantity = r.quantity,
            "session ended"
        );
    } else {
        info!("session ended without purchases");
    }
    Ok(())
}

fn print_status(store: &mut Storefront<ConsoleView<std::io::Stdout>, TokioScheduler>) {
    let currency = store.config().pricing.currency;
    let formatted = store.summary().formatted(currency);
    let text = format!(
        "wallet: {} | qty {} | total {} | purchase: {:?} | price {}",
        store.wallet().button_label(),
        store.order().quantity(),
        formatted.total,
        store.purchase().phase(),
        store.quote().eth_label(),
    );
    store.view_mut().line(&text);
    if let Some(n) = store.notification() {
        let note = format!("[{}] {}", n.kind.label(), n.message);
        store.view_mut().line(&note);
    }
}
