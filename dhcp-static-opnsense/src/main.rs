use anyhow::{Context, Result};
use clap::Parser;
use dhcp_static_opnsense::convert;
use tracing_subscriber::EnvFilter;

mod cli;
mod path_guard;

use cli::Cli;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    path_guard::ensure_output_not_input(&cli.output_xml, &cli.input_csv)?;
    convert(&cli.input_csv, &cli.output_xml).with_context(|| {
        format!(
            "failed to convert {} to {}",
            cli.input_csv.display(),
            cli.output_xml.display()
        )
    })?;

    println!("OPNsense XML output written to {}", cli.output_xml.display());
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
