//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_MANIFEST;
use crate::fetch::DEFAULT_MAX_ATTEMPTS;

use super::commands::cache::CacheArgs;

/// playfetch - Fetch remote playlists with caching and retries.
#[derive(Debug, Parser)]
#[command(name = "playfetch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Cache directory (overrides the manifest and .playlist_cache)
    #[arg(long, global = true, env = "PLAYFETCH_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch every playlist in the manifest (default if no command specified)
    Run(RunArgs),

    /// Fetch a single playlist
    Fetch(FetchArgs),

    /// Inspect the playlist cache
    Cache(CacheArgs),

    /// Write files_metadata.json and index.html for generated files
    Metadata(MetadataArgs),
}

/// Attempt budget: a positive number of requests.
fn parse_attempts(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Manifest listing the playlists to fetch
    #[arg(short, long, default_value = DEFAULT_MANIFEST, value_name = "PATH")]
    pub manifest: PathBuf,

    /// Maximum requests per playlist
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = parse_attempts)]
    pub attempts: u32,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FetchArgs {
    /// Playlist URL
    pub url: String,

    /// Destination file
    pub output: PathBuf,

    /// Maximum requests before giving up
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = parse_attempts)]
    pub attempts: u32,
}

/// Arguments for the `metadata` command.
#[derive(Debug, Clone, clap::Args)]
pub struct MetadataArgs {
    /// Directory to scan and write the report into
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,
}

impl Default for MetadataArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_has_no_command() {
        let cli = Cli::parse_from(["playfetch"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn run_defaults() {
        let cli = Cli::parse_from(["playfetch", "run"]);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.manifest, PathBuf::from("playlists.yml"));
                assert_eq!(args.attempts, 3);
            }
            other => panic!("Expected Run command, got {:?}", other),
        }
    }

    #[test]
    fn fetch_takes_url_and_output() {
        let cli = Cli::parse_from([
            "playfetch",
            "fetch",
            "https://example.com/a.m3u",
            "a.m3u",
            "--attempts",
            "5",
        ]);
        match cli.command {
            Some(Commands::Fetch(args)) => {
                assert_eq!(args.url, "https://example.com/a.m3u");
                assert_eq!(args.output, PathBuf::from("a.m3u"));
                assert_eq!(args.attempts, 5);
            }
            other => panic!("Expected Fetch command, got {:?}", other),
        }
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let result = Cli::try_parse_from(["playfetch", "fetch", "u", "o", "--attempts", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_cache_dir_after_subcommand() {
        let cli = Cli::parse_from(["playfetch", "run", "--cache-dir", "/tmp/c"]);
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/c")));
    }

    #[test]
    fn metadata_dir_default() {
        let cli = Cli::parse_from(["playfetch", "metadata"]);
        match cli.command {
            Some(Commands::Metadata(args)) => assert_eq!(args.dir, PathBuf::from(".")),
            other => panic!("Expected Metadata command, got {:?}", other),
        }
    }
}
