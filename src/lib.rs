pub mod cli;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use model::{ConfigField, ModConfig};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);

    let stdout = std::io::stdout();
    run_with(&args, &mut stdout.lock())
}

/// Everything after argument parsing; text output goes to `out`.
pub fn run_with<W: Write>(args: &cli::Cli, out: &mut W) -> anyhow::Result<()> {
    if args.list_fields {
        out.write_all(field_table(&ModConfig::default()).as_bytes())
            .with_context(|| "Writing field table")?;
        return Ok(());
    }

    // 1. ── Resolve config ─────────────────────────────────────────────
    let config = resolve_config(args)?;

    if args.dump_config {
        let json = serde_json::to_string_pretty(&config).with_context(|| "Serialising config")?;
        writeln!(out, "{json}").with_context(|| "Writing config")?;
        return Ok(());
    }

    // 2. ── Compile + self-check ───────────────────────────────────────
    let script = processor::compile(&config, &args.name);
    processor::verify(&script, &args.name).with_context(|| "Checking generated script")?;
    debug!(
        "compiled {} bytes for `{}` (hooks {})",
        script.len(),
        args.name,
        processor::hooks::HOOKS_VERSION
    );

    // 3. ── Write output ───────────────────────────────────────────────
    match &args.output {
        Some(dir) => {
            writer::file::emit(&script, &args.name, dir).with_context(|| "Writing Lua mod")?;
        }
        None => {
            writer::stdout::emit(&script, out).with_context(|| "Writing to stdout")?;
        }
    }

    Ok(())
}

/// Defaults, then the JSON file (if any), then `--set` overrides.
pub fn resolve_config(args: &cli::Cli) -> anyhow::Result<ModConfig> {
    let base = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            parser::load(&json).with_context(|| format!("Parsing {}", path.display()))?
        }
        None => ModConfig::default(),
    };
    let config = parser::apply_overrides(base, args.set.as_slice())?;
    info!(
        "config: {} joker slots, {} starting money",
        config.joker_slots_game, config.starting_money
    );
    Ok(config)
}

/// One line per field: key, group, current value, description.
pub fn field_table(config: &ModConfig) -> String {
    ConfigField::ALL
        .into_iter()
        .map(|field| {
            format!(
                "{:<21} {:<6} {:>4}  {}\n",
                field.key(),
                field.group().label(),
                config.get(field),
                field.description()
            )
        })
        .collect()
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // already installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
