use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dhcp-static-opnsense", version)]
#[command(about = "Convert CSV to OPNsense DHCP static map XML")]
pub struct Cli {
    /// Path to the input CSV file.
    pub input_csv: PathBuf,
    /// Path to the output XML file.
    pub output_xml: PathBuf,
}
