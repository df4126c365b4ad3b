use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scf",
    about = "Semantic Cell Forest — hierarchical content cells with content-addressed hashing",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the sample report document and walk the forest operations
    Demo(DemoArgs),
    /// Hash text or a string list and print the digest triple
    Hash(HashArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// Dump the serialized document tree as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct HashArgs {
    /// Text to hash
    pub text: Option<String>,

    /// Hash a string list instead (elements joined with an embedded NUL)
    #[arg(long = "list", value_name = "ITEM", num_args = 1..)]
    pub list: Vec<String>,
}
