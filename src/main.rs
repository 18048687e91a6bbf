//! embed-vfs - generate a Rust module that embeds a directory tree.
//!
//! Writes the generated source to stdout and diagnostics to stderr.

use anyhow::Context;
use clap::Parser;
use embed_vfs::{embed_dir, BuildConfig, Timestamps};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "embed-vfs")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Embed a directory tree into generated Rust source",
    long_about = "Packs every regular file below a directory into a gzip-compressed tar archive and prints a Rust module that serves those files from memory."
)]
struct Cli {
    /// The path of the directory to embed
    #[arg(long)]
    dir: PathBuf,

    /// The name of the module to generate
    #[arg(long)]
    pkgname: String,

    /// JSON build configuration (compression_level, mtime, normalize_mode)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stamp every file with this modification time (seconds since the Unix epoch)
    #[arg(long)]
    mtime: Option<u64>,

    /// Store 0644/0755 instead of on-disk permission bits
    #[arg(long)]
    normalize_mode: bool,

    /// gzip compression level (0-9)
    #[arg(long)]
    level: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        e.print().expect("failed to write usage to stderr");
        std::process::exit(code);
    });

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => BuildConfig::load(path)
            .with_context(|| format!("error loading config {}", path.display()))?,
        None => BuildConfig::default(),
    };
    if let Some(epoch) = cli.mtime {
        config.mtime = Timestamps::Fixed(epoch);
    }
    if cli.normalize_mode {
        config.normalize_mode = true;
    }
    if let Some(level) = cli.level {
        config.compression_level = level;
    }

    let source = embed_dir(&cli.dir, &cli.pkgname, &config).with_context(|| {
        format!(
            "error generating package {} from {}",
            cli.pkgname,
            cli.dir.display()
        )
    })?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(source.as_bytes())
        .and_then(|_| stdout.flush())
        .with_context(|| format!("error writing package {}", cli.pkgname))?;

    Ok(())
}
