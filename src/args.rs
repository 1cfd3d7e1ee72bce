use clap::Parser;
use std::path::PathBuf;

use crate::assemble::host_platform_id;

#[derive(Parser, Debug)]
#[command(
    name = "frostpack",
    version,
    about = "Assemble a freeze-build configuration and drive the external freeze tool",
    long_about = None
)]
pub struct Args {
    /// Entry-point script of the application to freeze
    pub entry_script: PathBuf,

    /// Target platform identifier (windows/win32/win build windowed)
    #[arg(long, default_value_t = host_platform_id().to_string())]
    pub platform: String,

    /// Icon file embedded into the produced executable
    #[arg(short = 'i', long)]
    pub icon: Option<PathBuf>,

    /// Directory of auxiliary files copied next to the executable
    #[arg(short = 'r', long)]
    pub resources: Option<PathBuf>,

    /// Package name (default: entry script stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Package version
    #[arg(long)]
    pub app_version: Option<String>,

    /// Package description
    #[arg(long)]
    pub description: Option<String>,

    /// Assemble and write the manifest without invoking the freeze tool
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write the build manifest JSON (default: true)
    #[arg(long, default_value_t = true)]
    pub json: bool,

    /// Show the configuration summary and resource table
    #[arg(short = 'd', long, default_value_t = false)]
    pub display: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
