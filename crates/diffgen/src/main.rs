use anyhow::Context as _;
use clap::Parser;
use resource_differ::{DiffConfig, Differ, ResourceKind, OWNING_LABEL};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

mod telemetry;
use telemetry::LogFormat;

/// Compare a live manifest against the desired one and print the manifest to apply.
///
/// Exits 0 when nothing changed, 1 when the updated manifest was printed, 2 on error.
#[derive(Parser, Debug)]
#[command(name = "diffgen", version)]
struct Args {
    /// Manifest as currently stored in the cluster
    current: PathBuf,

    /// Manifest built from the desired state
    expected: PathBuf,

    /// Comparison to run; detected from the manifests when omitted
    #[arg(long, value_parser = parse_kind)]
    kind: Option<ResourceKind>,

    /// Label that marks Job templates as owned by the controller
    #[arg(long, env = "DIFFGEN_OWNER_LABEL", default_value = OWNING_LABEL)]
    owner_label: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn parse_kind(s: &str) -> Result<ResourceKind, String> {
    s.parse().map_err(|e: resource_differ::Error| e.to_string())
}

fn read_manifest(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let current = read_manifest(&args.current)?;
    let expected = read_manifest(&args.expected)?;

    let differ = Differ::new(DiffConfig::with_owner_label(args.owner_label.clone()));
    match differ.diff_manifests(args.kind, &current, &expected)? {
        Some(updated) => {
            info!("'{}' differs from '{}'", args.current.display(), args.expected.display());
            print!("{updated}");
            Ok(true)
        }
        None => {
            info!("'{}' is up to date", args.current.display());
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = telemetry::init(args.log_format) {
        eprintln!("failed to initialize logging: {e:#}");
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            let label = e
                .downcast_ref::<resource_differ::Error>()
                .map_or_else(|| "io".to_string(), resource_differ::Error::metric_label);
            error!(error = %label, "{e:#}");
            ExitCode::from(2)
        }
    }
}
