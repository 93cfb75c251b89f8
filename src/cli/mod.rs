mod args;
mod commands;
mod host;

pub use args::Cli;

use host::TerminalHost;
use lekutao_hub::app::Notifier;
use lekutao_hub::{infrastructure, observability, Config, Event, Hub, Result};
use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

/// How often the hub gets a `Tick` while waiting for input.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(infrastructure::expand_tilde(&path.to_string_lossy()))?,
        None => Config::default(),
    }
    .merge_map(&cli.settings_map())?;

    if let Err(e) = observability::init_tracing(&config, &infrastructure::get_data_dir()) {
        eprintln!("lekutao-hub: tracing disabled: {e}");
    }

    let state = lekutao_hub::initialize(&config)?;
    let mut hub = Hub::new(state, TerminalHost::new(cli.rows, cli.cols));
    hub.dispatch(&Event::Resize {
        rows: cli.rows,
        cols: cli.cols,
    });

    let lines = spawn_stdin_reader();

    while hub.is_running() {
        let line = match lines.recv_timeout(TICK_INTERVAL) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => {
                hub.dispatch(&Event::Tick(chrono::Utc::now()));
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };

        hub.dispatch(&Event::Tick(chrono::Utc::now()));

        let Some(events) = commands::map_line(hub.state(), &line) else {
            hub.host_mut().notify(&format!("未知命令: {}", line.trim()));
            continue;
        };

        for event in &events {
            if let Event::Resize { rows, cols } = event {
                let host = hub.host_mut();
                host.rows = *rows;
                host.cols = *cols;
            }
            hub.dispatch(event);
        }
    }

    tracing::info!("hub closed");
    Ok(())
}

/// Reads stdin on its own thread so ticks keep coming while it blocks.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
