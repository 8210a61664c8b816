use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Nests the shapes of a drawing onto as few rectangular panels as the Best-Area-Fit packer manages.
#[derive(Parser, Debug)]
#[command(name = "pnest", version, about, long_about = None)]
pub struct Cli {
    /// JSON instance: panel size and the shapes to nest, with their quantities
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving `sol_<instance>.json` and one `sol_<instance>_<panel>.svg` per panel, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON packer and drawing configuration, defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
