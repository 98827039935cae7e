//! CLI entry point for the sovcon governance console.
//!
//! This module is intentionally thin: it handles argument parsing, file I/O,
//! and exit codes. All session logic lives in the `sovcon-app` crate. The
//! console state is ephemeral, so every invocation is one seeded session.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value as JsonValue;
use sovcon_app::{audit_event_schema_json, policy_schema_json, AuditFormat, Console};
use sovcon_types::{DATASET_CHOICES, METHOD_CHOICES};

#[derive(Parser, Debug)]
#[command(
    name = "sovcon",
    version,
    about = "Governance console for sovereign AI deployments: policy editing, simulated evaluations, audit exports"
)]
struct Cli {
    /// Simulator seed. A fixed default keeps runs reproducible.
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Policy document operations.
    Policy {
        #[command(subcommand)]
        cmd: PolicyCommands,
    },

    /// Run simulated evaluations and print the resulting metrics.
    Eval {
        /// Evaluation dataset label.
        #[arg(long, default_value = DATASET_CHOICES[1])]
        dataset: String,

        /// Evaluation method label.
        #[arg(long, default_value = METHOD_CHOICES[0])]
        method: String,

        /// Number of consecutive runs.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,

        /// Where to write the audit trail after the runs.
        #[arg(long)]
        audit_out: Option<Utf8PathBuf>,

        /// Audit export format.
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
    },

    /// Export the audit trail of a fresh session.
    Audit {
        #[command(subcommand)]
        cmd: AuditCommands,
    },

    /// Print the FAIR checklist for a policy document.
    Fair {
        /// Policy file to score; the seed policy if omitted.
        #[arg(long)]
        file: Option<Utf8PathBuf>,
    },

    /// Print the JSON schema for a wire type.
    Schema {
        #[arg(value_enum)]
        which: SchemaArg,
    },
}

#[derive(Subcommand, Debug)]
enum PolicyCommands {
    /// Write the default (seed) policy document.
    Seed {
        /// Output path; prints to stdout if omitted.
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },

    /// Pretty-print a policy document, validating it by import.
    Show {
        /// Policy file to show; the seed policy if omitted.
        #[arg(long)]
        file: Option<Utf8PathBuf>,
    },

    /// Set one field at a dotted path and write the document back.
    Set {
        /// Dotted field path, e.g. `pii_protection.method`.
        path: String,

        /// New value, parsed as JSON; bare words are treated as strings.
        value: String,

        /// Policy file to edit in place.
        #[arg(long)]
        file: Utf8PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum AuditCommands {
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,

        /// Output path; prints to stdout if omitted.
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Jsonl,
}

impl From<FormatArg> for AuditFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => AuditFormat::Csv,
            FormatArg::Jsonl => AuditFormat::Jsonl,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemaArg {
    Policy,
    AuditEvent,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Policy { cmd } => match cmd {
            PolicyCommands::Seed { out } => cmd_policy_seed(cli.seed, out),
            PolicyCommands::Show { file } => cmd_policy_show(cli.seed, file),
            PolicyCommands::Set { path, value, file } => {
                cmd_policy_set(cli.seed, &path, &value, &file)
            }
        },
        Commands::Eval {
            dataset,
            method,
            runs,
            audit_out,
            format,
        } => cmd_eval(cli.seed, &dataset, &method, runs, audit_out, format.into()),
        Commands::Audit { cmd } => match cmd {
            AuditCommands::Export { format, out } => cmd_audit_export(cli.seed, format.into(), out),
        },
        Commands::Fair { file } => cmd_fair(cli.seed, file),
        Commands::Schema { which } => cmd_schema(which),
    }
}

fn cmd_policy_seed(seed: u64, out: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let console = Console::seeded(seed);
    let text = console.export_policy()?;
    emit(out.as_deref(), &text)
}

fn cmd_policy_show(seed: u64, file: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let console = load_session(seed, file.as_deref())?;
    println!("{}", console.export_policy()?);
    Ok(())
}

fn cmd_policy_set(seed: u64, path: &str, raw_value: &str, file: &Utf8PathBuf) -> anyhow::Result<()> {
    let mut console = load_session(seed, Some(file))?;
    console
        .policy_mut()
        .set_field(path, parse_json_value(raw_value))
        .with_context(|| format!("set field '{path}'"))?;
    let text = console.export_policy()?;
    write_text_file(file, &text)?;
    eprintln!("sovcon: updated {path} in {file}");
    Ok(())
}

fn cmd_eval(
    seed: u64,
    dataset: &str,
    method: &str,
    runs: u32,
    audit_out: Option<Utf8PathBuf>,
    format: AuditFormat,
) -> anyhow::Result<()> {
    let mut console = Console::seeded(seed);
    for _ in 0..runs {
        console.run_evaluation(dataset, method);
    }
    let m = console.metrics();
    println!("Accuracy (EM): {:.1}%", m.em * 100.0);
    println!("F1: {:.1}%", m.f1 * 100.0);
    println!("Fairness (DI): {:.2} (target 0.80-1.25)", m.di);
    println!("Toxicity: {:.2}%", m.tox * 100.0);
    if let Some(point) = console.trend().points().last() {
        println!("Latency: p50 {:.0} ms / p95 {:.0} ms", point.p50, point.p95);
    }
    if let Some(out) = audit_out {
        write_text_file(&out, &console.export_audit(format))?;
        eprintln!("sovcon: wrote audit trail to {out}");
    }
    Ok(())
}

fn cmd_audit_export(seed: u64, format: AuditFormat, out: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let console = Console::seeded(seed);
    let text = console.export_audit(format);
    emit(out.as_deref(), &text)
}

fn cmd_fair(seed: u64, file: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let console = load_session(seed, file.as_deref())?;
    let score = console.fair_score();
    println!(
        "{}",
        serde_json::to_string_pretty(&score).context("serialize fair score")?
    );
    Ok(())
}

fn cmd_schema(which: SchemaArg) -> anyhow::Result<()> {
    let text = match which {
        SchemaArg::Policy => policy_schema_json()?,
        SchemaArg::AuditEvent => audit_event_schema_json()?,
    };
    println!("{text}");
    Ok(())
}

/// One seeded session, with the given policy file imported over the seed
/// policy when present.
fn load_session(seed: u64, file: Option<&camino::Utf8Path>) -> anyhow::Result<Console> {
    let mut console = Console::seeded(seed);
    if let Some(path) = file {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read policy file: {path}"))?;
        let name = path.file_name().unwrap_or(path.as_str());
        console
            .import_policy(name, &text)
            .with_context(|| format!("import policy file: {path}"))?;
    }
    Ok(console)
}

/// Parse a CLI value as JSON, falling back to a plain string for bare words.
fn parse_json_value(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

fn emit(out: Option<&camino::Utf8Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            write_text_file(path, text)?;
            eprintln!("sovcon: wrote {path}");
            Ok(())
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory: {parent}"))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("write file: {path}"))?;
    Ok(())
}
