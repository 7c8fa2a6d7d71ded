//! src/main.rs
//!
//! Entrypoint: parse arguments, install error reporting, delegate to `app::run()`.

mod app;
mod cli;
mod graph;
mod panels;
mod parse;
mod ui;

use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::run(cli::Args::parse())
}
