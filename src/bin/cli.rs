// src/bin/cli.rs
use color_eyre::eyre::Report;
use nung_sched::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(Report::msg)
}
