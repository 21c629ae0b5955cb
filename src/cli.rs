use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sfpack - Salesforce DX metadata discovery and packaging tool
#[derive(Parser, Debug)]
#[command(name = "sfpack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'sfpack list' inside a DX project to see its metadata.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List metadata components discovered in the project
    List {
        /// Path to the DX project root
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        /// Show components as a tree grouped by type
        #[arg(long)]
        tree: bool,
    },

    /// Generate a package.xml manifest
    Manifest {
        /// Path to the DX project root
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        /// Component to include (repeatable)
        #[arg(short, long, value_name = "TYPE:NAME")]
        select: Vec<String>,

        /// Include every discovered component of a type (repeatable)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Override the API version from sfdx-project.json
        #[arg(long, value_name = "VERSION")]
        api_version: Option<String>,

        /// Write the manifest to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
