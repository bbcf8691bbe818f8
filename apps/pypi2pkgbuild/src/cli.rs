//! Command line interface definition

use clap::Parser;
use std::path::PathBuf;

/// pypi2pkgbuild - Generate a PKGBUILD from Python package index metadata
#[derive(Parser, Debug)]
#[command(name = "pypi2pkgbuild")]
#[command(about = "Generate a PKGBUILD from Python package index metadata")]
#[command(long_about = None)]
// -v/--version selects a release, so clap's own version flag is off
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Name of the package on the index
    pub package: String,

    /// XML-RPC endpoint of the package index
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Release to package instead of the newest one
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Use alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logs on stderr
    #[arg(long)]
    pub debug: bool,
}
