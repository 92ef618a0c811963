//! tileatlas CLI
//!
//! Checks configuration documents and prints the catalog they resolve to.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tileatlas::atlas::Map;
use tileatlas::{Atlas, Config, Document, ErrorPolicy, Registrar};
use tracing_subscriber::{fmt, EnvFilter};

/// tileatlas
#[derive(Parser, Debug)]
#[command(name = "tileatlas")]
#[command(about = "Validate tile server provider and map configuration")]
#[command(version)]
struct Args {
    /// Highest zoom level a layer may be served at
    #[arg(long, global = true, default_value = "22")]
    max_zoom: u8,

    /// Default tile buffer in pixels
    #[arg(long, global = true, default_value = "64")]
    tile_buffer: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that a configuration document registers
    Check {
        /// Configuration document (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Report every failing map instead of stopping at the first
        #[arg(long)]
        all_errors: bool,
    },

    /// Print the resolved catalog
    Maps {
        /// Configuration document (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Only print this map
        #[arg(short, long)]
        map: Option<String>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tileatlas=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("tileatlas v{}", tileatlas::VERSION);

    let builder = Config::builder()
        .max_zoom(args.max_zoom)
        .tile_buffer(args.tile_buffer);

    match args.command {
        Commands::Check { config, all_errors } => {
            let policy = if all_errors {
                ErrorPolicy::CollectAll
            } else {
                ErrorPolicy::FailFast
            };
            check(Registrar::new(builder.error_policy(policy).build()), &config)
        }
        Commands::Maps { config, map } => {
            print_maps(Registrar::new(builder.build()), &config, map.as_deref())
        }
    }
}

fn load(path: &Path) -> Option<Document> {
    tracing::info!("Configuration: {}", path.display());
    match Document::load(path) {
        Ok(document) => Some(document),
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            None
        }
    }
}

fn check(registrar: Registrar, path: &Path) -> ExitCode {
    let Some(document) = load(path) else {
        return ExitCode::FAILURE;
    };

    match registrar.register(&document) {
        Ok(atlas) => {
            println!("ok: {} map(s) registered", atlas.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            for error in e.errors() {
                println!("error: {}", error);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_maps(registrar: Registrar, path: &Path, only: Option<&str>) -> ExitCode {
    let Some(document) = load(path) else {
        return ExitCode::FAILURE;
    };

    let atlas = match registrar.register(&document) {
        Ok(atlas) => atlas,
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match only {
        Some(name) => match atlas.map(name) {
            Some(map) => print_map(map),
            None => {
                tracing::error!("Map ({}) not found", name);
                return ExitCode::FAILURE;
            }
        },
        None => print_atlas(&atlas),
    }

    ExitCode::SUCCESS
}

fn print_atlas(atlas: &Atlas) {
    match atlas.fingerprint() {
        Ok(fingerprint) => println!("atlas {:08x} ({} maps)", fingerprint, atlas.len()),
        Err(_) => println!("atlas ({} maps)", atlas.len()),
    }
    for map in atlas.maps() {
        print_map(map);
    }
}

fn print_map(map: &Map) {
    println!("map {} [{}]", map.name(), map.projection());
    if let Some(attribution) = map.attribution() {
        println!("  attribution: {}", attribution);
    }
    for layer in map.layers() {
        let tags = serde_json::to_string(layer.default_tags()).unwrap_or_default();
        println!(
            "  {} <- {} z{}-{} tags={}",
            layer.name(),
            layer.reference(),
            layer.min_zoom(),
            layer.max_zoom(),
            tags
        );
    }
}
