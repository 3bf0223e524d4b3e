//! Entry point for smdb-view
//!
//! Opens the main window and blocks in the GTK main loop until it closes.
//! The program takes no operational arguments: `--help` and `--version`
//! print to stdout and exit, anything else is rejected with exit code 2.

use anyhow::Context;
use clap::Parser;
use colored::*;
use smdb_view::ui::App;

#[derive(Parser)]
#[command(name = "smdb-view")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> glib::ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            glib::ExitCode::FAILURE
        }
    }
}

/// Initialises GTK and runs the application
fn run() -> anyhow::Result<glib::ExitCode> {
    gtk4::init().context("Failed to initialise GTK (is a display available?)")?;

    Ok(App::new().run())
}
