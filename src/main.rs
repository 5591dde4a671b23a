use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sprite_tools::cli::{CliArgs, Command, Connectivity, IndexArgs, RefsArgs, RenameArgs, SliceArgs};
use sprite_tools::config::{CompressConfig, LoadedConfig};
use sprite_tools::index::write_index;
use sprite_tools::refs::{ReferenceScanner, build_report, format_report};
use sprite_tools::rename::{MoveStrategy, apply_renames, load_mapping};
use sprite_tools::slice::{
    DEFAULT_ALPHA_THRESHOLD, DEFAULT_MIN_AREA, DEFAULT_PADDING, ExportOptions, SheetSlicer,
};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match &cli.command {
        Command::Slice(args) => {
            // Resolve settings before logging starts so a bad config is reported plainly
            let merged = merge_config_with_args(args)?;
            init_logging(cli.verbose);
            run_slice(merged)
        }
        Command::Index(args) => {
            init_logging(cli.verbose);
            run_index(args)
        }
        Command::Refs(args) => {
            init_logging(cli.verbose);
            run_refs(args)
        }
        Command::Rename(args) => {
            init_logging(cli.verbose);
            run_rename(args)
        }
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[allow(clippy::print_stdout)]
fn run_slice(merged: MergedConfig) -> Result<()> {
    info!(
        "Slicing {} (alpha >= {}, pad {}, min area {})",
        merged.input.display(),
        merged.slicer.alpha_threshold,
        merged.slicer.padding,
        merged.slicer.min_area
    );

    let report = merged
        .slicer
        .export(&merged.input, &merged.output, &merged.export)?;

    println!(
        "Done. exported={} -> {}",
        report.exported(),
        report.output_dir.display()
    );
    Ok(())
}

fn run_index(args: &IndexArgs) -> Result<()> {
    let out = write_index(&args.folder, &args.out)?;
    info!("Wrote: {}", out.display());
    Ok(())
}

#[allow(clippy::print_stdout)]
fn run_refs(args: &RefsArgs) -> Result<()> {
    let mut scanner = ReferenceScanner::new(args.only_assets_v1)?;
    scanner.scan_tree(&args.root)?;

    let public_dir = args.root.join(&args.public);
    let report = build_report(scanner.references(), &public_dir);
    print!("{}", format_report(&report));
    Ok(())
}

fn run_rename(args: &RenameArgs) -> Result<()> {
    let entries = load_mapping(&args.csv)?;
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let strategy = MoveStrategy::detect(&cwd);

    apply_renames(&args.folder, &entries, args.dry, strategy)?;
    info!("Done.");
    Ok(())
}

/// Merged slice settings from CLI args and optional config file.
#[derive(Debug)]
struct MergedConfig {
    input: PathBuf,
    output: PathBuf,
    slicer: SheetSlicer,
    export: ExportOptions,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &SliceArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Paths: CLI > config; clap requires them when no config is given
    let input = args
        .input
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_input))
        .context("no input sheet given on the command line or in the config")?;

    let output = args
        .output
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_output_dir))
        .context("no output directory given on the command line or in the config")?;

    // For numeric fields: CLI > config > default
    let alpha_threshold = args.alpha.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.alpha)
            .unwrap_or(DEFAULT_ALPHA_THRESHOLD)
    });

    let padding = args.pad.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.padding)
            .unwrap_or(DEFAULT_PADDING)
    });

    let min_area = args.min_area.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.min_area)
            .unwrap_or(DEFAULT_MIN_AREA)
    });

    let max_count = args.max_count.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.max_count)
            .unwrap_or(0)
    });

    let connectivity = if let Some(c) = args.connectivity {
        c
    } else if let Some(ref lc) = loaded_config {
        parse_connectivity(&lc.config.connectivity).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown connectivity '{}' in config file. Valid values: four, eight",
                lc.config.connectivity
            )
        })?
    } else {
        Connectivity::Four
    };

    // Boolean flags: CLI presence sets them to true, otherwise use config
    let manifest = args.manifest || loaded_config.as_ref().is_some_and(|lc| lc.config.manifest);
    let clean = args.clean || loaded_config.as_ref().is_some_and(|lc| lc.config.clean);

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        lc.config
            .compress
            .as_ref()
            .map(CompressConfig::to_level)
            .transpose()
            .map_err(|e| anyhow::anyhow!("{} in config file", e))?
    } else {
        None
    };

    Ok(MergedConfig {
        input,
        output,
        slicer: SheetSlicer::new()
            .alpha_threshold(alpha_threshold)
            .padding(padding)
            .min_area(min_area)
            .max_count(max_count)
            .connectivity(connectivity),
        export: ExportOptions {
            compress,
            manifest,
            clean,
        },
    })
}

fn parse_connectivity(s: &str) -> Option<Connectivity> {
    match s {
        "four" | "4" => Some(Connectivity::Four),
        "eight" | "8" => Some(Connectivity::Eight),
        _ => None,
    }
}
