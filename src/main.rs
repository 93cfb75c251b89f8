//! Terminal shell for the hub.
//!
//! Draws the hub with ANSI sequences and reads one command per line:
//!
//! - `j`/`k`: move the cursor, or scroll a detail page
//! - `J`/`K`: scroll a page
//! - empty line: open the row under the cursor
//! - `/` or `/<text>`: search; in search mode every line is the new query,
//!   `esc` leaves, `:<command>` runs a command
//! - `b`: back to the list
//! - `a <title>`, `p <name>`: open an article or a platform
//! - `c <domain>`: check a domain against the blacklist
//! - `copy <email>`, `mail <email>`: contact a mailbox
//! - `l <id>`: open a download or community link
//! - `store <name>`: open an Android store listing
//! - `o`: open the platform's official site
//! - `s`: contact support (article page)
//! - `y`: copy the page link
//! - `size <rows> <cols>`: resize
//! - `q`: quit

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;

mod cli;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(e) = cli::run(&cli) {
        eprintln!("lekutao-hub: {e}");
        std::process::exit(1);
    }
}
