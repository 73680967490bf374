//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "duffel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack files and directories into a container
    Pack(PackArgs),
    /// Unpack container contents
    Unpack(UnpackArgs),
    /// List entry names without extraction
    List(ListArgs),
    /// List entry comments without extraction
    Comments(CommentsArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Output container file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Source files or directories to pack
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,

    /// Comment attached to every entry
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub comment: Option<String>,

    /// Compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub level: Option<u8>,
}

#[derive(clap::Args)]
pub struct UnpackArgs {
    /// Path to the container file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Destination directory (default: current directory)
    #[arg(value_name = "DEST_DIR")]
    pub dest_dir: Option<PathBuf>,

    /// Only unpack entries whose name contains this substring
    #[arg(short = 'k', long, value_name = "SUBSTRING")]
    pub keyword: Option<String>,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the container file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
}

#[derive(clap::Args)]
pub struct CommentsArgs {
    /// Path to the container file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
}
