use clap::Parser;
use std::path::PathBuf;

use crate::model::DEFAULT_OUTPUT_NAME;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Partial JSON config (camelCase keys); missing keys keep their default
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mod name; also the output file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub name: String,

    /// Override one field, e.g. `--set jokerSlotsGame=7`
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Output directory; `<NAME>.lua` is written there instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the configurable fields and exit
    #[arg(long)]
    pub list_fields: bool,

    /// Print the resolved config as JSON and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
