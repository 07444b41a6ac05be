use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use gh_changelog::{compound_changelog, config, ui, SnapshotSource};

#[derive(clap::Parser)]
#[command(
    name = "gh-changelog",
    version,
    about = "Generate a Markdown changelog from tags, issues and pull requests"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        default_value = "snapshot.json",
        help = "JSON snapshot with tags, issues and pull requests"
    )]
    snapshot: PathBuf,

    #[arg(short, long, default_value = "CHANGELOG.md", help = "Output file")]
    output: PathBuf,

    #[arg(long, help = "Print the changelog instead of writing a file")]
    stdout: bool,

    #[arg(long, help = "Only generate the unreleased section")]
    unreleased_only: bool,

    #[arg(long, help = "File appended verbatim after the generated sections")]
    base: Option<PathBuf>,

    #[arg(short, long, help = "Verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.unreleased_only {
        config.unreleased_only = true;
    }
    if args.base.is_some() {
        config.base = args.base.clone();
    }
    if args.verbose {
        config.verbose = true;
    }

    let filter = if config.verbose {
        "gh_changelog=debug,info"
    } else {
        "gh_changelog=info,warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !args.stdout {
        ui::display_status(&format!("Reading {}", args.snapshot.display()));
    }
    let source = match SnapshotSource::open(&args.snapshot) {
        Ok(source) => source,
        Err(e) => {
            ui::display_error(&format!("Failed to load snapshot: {}", e));
            std::process::exit(1);
        }
    };

    let changelog = match compound_changelog(&source, &config, Utc::now()) {
        Ok(log) => log,
        Err(e) => {
            ui::display_error(&format!("Failed to generate changelog: {}", e));
            std::process::exit(1);
        }
    };

    if args.stdout {
        print!("{}", changelog);
        return Ok(());
    }

    fs::write(&args.output, &changelog)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    ui::display_success(&format!("Wrote {}", args.output.display()));
    ui::display_summary(
        ui::count_sections(&changelog),
        &args.output.display().to_string(),
    );

    Ok(())
}
