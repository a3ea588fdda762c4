pub mod clab2kuid;
pub mod version;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "knetctl")]
#[command(about = "A cli tool for kubenet.")]
pub struct CommandLine {
    /// Config file (default: $XDG_CONFIG_HOME/knetctl/knetctl.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a containerlab topology into kuid inventory resources
    #[command(name = "clab2kuid")]
    Clab2kuid(Clab2kuidArgs),
    /// Show the version of knetctl
    #[command(alias = "v")]
    Version,
}

#[derive(clap::Args, Debug)]
pub struct Clab2kuidArgs {
    /// Containerlab topology file
    #[arg(value_name = "CLABFILE")]
    pub clab_file: PathBuf,

    /// Region this topology belongs to
    #[arg(long)]
    pub region: Option<String>,

    /// Site this topology belongs to
    #[arg(long)]
    pub site: Option<String>,

    /// Namespace written into the resources
    #[arg(long)]
    pub namespace: Option<String>,

    /// Leave out links that cannot be resolved instead of emitting no links
    #[arg(long)]
    pub skip_invalid_links: bool,

    /// Write the resources to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
