//! sfpack CLI - Salesforce DX metadata discovery and packaging tool
//!
//! Usage: sfpack <COMMAND>
//!
//! Commands:
//!   list      List metadata components discovered in the project
//!   manifest  Generate a package.xml manifest

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { project_dir, tree } => {
            commands::list::cmd_list(&project_dir, tree, cli.json, cli.verbose)
        }
        Commands::Manifest {
            project_dir,
            select,
            types,
            api_version,
            output,
        } => commands::manifest::cmd_manifest(
            &project_dir,
            &select,
            &types,
            api_version.as_deref(),
            output.as_deref(),
            cli.json,
            cli.verbose,
        ),
    }
}
