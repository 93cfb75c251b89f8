//! Hands URLs to the desktop's default application.

use std::io;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

/// Program that opens URLs on this platform.
#[must_use]
pub const fn opener_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Starts the opener for `url` without waiting for it.
///
/// # Errors
///
/// Returns the spawn error when the opener is not installed.
pub fn open_url(url: &str) -> io::Result<()> {
    let mut command = Command::new(opener_program());
    command.arg(url);
    spawn_reaped(command)?;
    Ok(())
}

/// Spawns `command` detached from the terminal and waits for it on a
/// background thread, so finished children do not linger as zombies.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<()>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let pid = child.id();
    tracing::debug!(pid, program = ?command.get_program(), "opener started");

    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => tracing::debug!(pid, %status, "opener exited"),
        Err(e) => tracing::warn!(pid, error = %e, "failed to wait for opener"),
    }))
}
