//! Command-line interface for docfill.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::annotate::{collect_files, exclusion_set, Annotator};
use crate::config::Config;
use crate::detect::DetectorKind;
use crate::report;
use crate::synth::Strategy;

/// Exit codes. Any file that could not be read or written yields
/// `EXIT_ERROR` after the remaining files are processed.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Starter configuration written by `init`.
const CONFIG_TEMPLATE: &str = include_str!("templates/docfill.yaml");

/// Javadoc gap filler - document undocumented public Java declarations.
///
/// Docfill scans Java sources for public types, constructors, methods and
/// fields without a preceding comment and inserts a synthesized Javadoc
/// block above each one. Re-running it is safe: documented declarations
/// are left alone.
#[derive(Parser)]
#[command(name = "docfill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert documentation comments above undocumented declarations
    #[command(visible_alias = "run")]
    Annotate(AnnotateArgs),
    /// Create a docfill configuration file
    Init(InitArgs),
}

/// Arguments for the annotate command.
#[derive(Parser)]
pub struct AnnotateArgs {
    /// Path to annotate (file or directory; default: config root or src/main/java)
    pub path: Option<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comment strategy: boilerplate, randomized, or name-derived
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Declaration detector: line or structural
    #[arg(short, long)]
    pub detector: Option<DetectorKind>,

    /// Seed for the randomized strategy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Like --dry-run, but exit non-zero if any declaration is undocumented
    #[arg(long)]
    pub check: bool,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// List every inserted comment in pretty output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "docfill.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Load the configuration and apply command-line overrides.
fn resolve_config(args: &AnnotateArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::parse_file(path)?,
        None => match Config::discover(Path::new(".")) {
            Some(path) => Config::parse_file(&path)?,
            None => Config::default(),
        },
    };

    if let Some(path) = &args.path {
        config.root = path.clone();
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(detector) = args.detector {
        config.detector = detector;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.dry_run || args.check {
        config.dry_run = true;
    }
    if args.parallel {
        config.parallel = true;
    }

    Ok(config)
}

/// Run the annotate command.
pub fn run_annotate(args: &AnnotateArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match resolve_config(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: invalid configuration: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    if !config.root.exists() {
        eprintln!("Error: cannot access path {:?}", config.root);
        return Ok(EXIT_ERROR);
    }

    let excluded = match exclusion_set(&config.excluded_paths) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let files = collect_files(&config.root, &excluded)?;
    if files.is_empty() {
        eprintln!("Warning: no Java files found under {}", config.root.display());
        return Ok(EXIT_SUCCESS);
    }

    let annotator = match Annotator::from_config(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    let summary = annotator.run(&files);

    let path_str = config.root.to_string_lossy().to_string();
    match args.format.as_str() {
        "json" => report::write_json(
            &path_str,
            config.strategy.as_str(),
            config.detector.as_str(),
            &summary,
        )?,
        _ => report::write_pretty(&summary, args.verbose),
    }

    if summary.has_failures() {
        Ok(EXIT_ERROR)
    } else if args.check && summary.comments_added() > 0 {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() && !args.force {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Use --force to overwrite it or --output to choose another path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to choose a strategy and source root", args.output.display());
    println!("  2. Run: docfill annotate --config {} --dry-run", args.output.display());

    Ok(EXIT_SUCCESS)
}
