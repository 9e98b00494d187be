//! CLI entry point for ttree

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use ttree::progress::LogWriter;
use ttree::tree::display_name;
use ttree::{BuildConfig, Limit, OutputConfig, Spinner, TreeBuilder, TreeFormatter, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// NO_COLOR disables color unless it is empty or "0".
fn env_requests_no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty() && v != "0")
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if env_requests_no_color() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ttree")]
#[command(about = "A directory tree that summarizes crowded directories")]
#[command(version)]
struct Args {
    /// Root directory
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Maximum number of files to list individually per directory.
    /// More files than this are shown as a summary by type, like
    /// '4 py, 2 txt files'. 0 always summarizes; 'unlimited' never does
    #[arg(
        short = 'm',
        long = "max-files-to-list",
        value_name = "N",
        default_value = "1"
    )]
    max_files_to_list: Limit,

    /// Maximum number of subdirectories to list individually per directory.
    /// More subdirectories than this are shown as 'N directories' and not
    /// scanned. 0 always summarizes; 'unlimited' never does
    #[arg(
        short = 'd',
        long = "max-dirs-to-list",
        value_name = "N",
        default_value = "20"
    )]
    max_dirs_to_list: Limit,

    /// Include dotfiles (files/dirs starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Descend into symlinked directories
    #[arg(short = 'l', long = "follow-links")]
    follow_links: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Disable colored output (same as setting NO_COLOR=1)
    #[arg(long = "no-color")]
    no_color: bool,

    /// Output the tree as JSON
    #[arg(long = "json")]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriter::default)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let use_color = !args.no_color && should_use_color(args.color);
    let config = BuildConfig {
        max_files: args.max_files_to_list,
        max_dirs: args.max_dirs_to_list,
        show_hidden: args.all,
        follow_links: args.follow_links,
    };
    let builder = TreeBuilder::new(config);

    let show_progress = !args.json && io::stdout().is_terminal() && io::stderr().is_terminal();
    let result = if show_progress {
        let spinner = Spinner::start(&display_name(&args.directory));
        let mut feed = spinner.feed();
        let result = builder.build_observed(&args.directory, &mut feed);
        spinner.finish();
        result
    } else {
        builder.build(&args.directory)
    };

    let tree = match result {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("ttree: {}", e);
            process::exit(1);
        }
    };

    let written = if args.json {
        print_json(&tree)
    } else {
        TreeFormatter::new(OutputConfig { use_color }).print(&tree)
    };

    if let Err(e) = written {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("ttree: error writing output: {}", e);
        process::exit(1);
    }
}
