use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lingo",
    about = "Compare, check and edit JSON translation files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file (defaults to ./lingo.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a file is a non-empty JSON object
    Validate(FileArgs),
    /// Print a file as dotted key/value pairs
    Flatten(FileArgs),
    /// Rebuild nested JSON from a flat key/value file
    Unflatten(FileArgs),
    /// Show missing, extra and changed keys
    Diff(PairArgs),
    /// List keys to translate
    Keys(KeysArgs),
    /// Check translated values keep their placeholders
    Check(PairArgs),
    /// Set target values, gated on placeholder validation
    Edit(EditArgs),
    /// Build a blank target file shaped like a base file
    Skeleton(SkeletonArgs),
    /// List the placeholders of a string
    Placeholders(PlaceholdersArgs),
}

#[derive(Args)]
pub struct FileArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct PairArgs {
    pub base: PathBuf,
    pub target: PathBuf,
}

#[derive(Args)]
pub struct KeysArgs {
    #[command(flatten)]
    pub files: PairArgs,
    /// Only keys still missing a translation
    #[arg(long)]
    pub missing: bool,
}

#[derive(Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub files: PairArgs,
    /// KEY=VALUE, repeatable
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment, required = true)]
    pub set: Vec<(String, String)>,
    /// Write the result back to the target file instead of printing it
    #[arg(long)]
    pub write: bool,
}

#[derive(Args)]
pub struct SkeletonArgs {
    pub base: PathBuf,
    /// Write the blank target here instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PlaceholdersArgs {
    pub text: String,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {raw:?}")),
    }
}
