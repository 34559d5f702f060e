//! oemesh - inspector for .oemesh model files
//!
//! # Commands
//!
//! - `oemesh info <FILE>` - Print texture, mesh tree and animation clips
//! - `oemesh check <FILE>...` - Decode each file and report failures
//! - `oemesh dump <FILE>` - Print a JSON summary of the model

mod summary;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oemesh::{Model, load_model_from_file_with_limit};

use summary::ModelSummary;

#[derive(Parser)]
#[command(name = "oemesh")]
#[command(about = "Inspect .oemesh box-mesh model files")]
#[command(version)]
struct Cli {
    /// Largest file to read, in bytes
    #[arg(long, global = true, default_value_t = oemesh::MAX_MODEL_BYTES)]
    max_bytes: u64,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print texture, mesh tree and animation clips
    Info {
        /// Input .oemesh file
        input: PathBuf,
    },

    /// Decode files and report any that fail
    Check {
        /// Input .oemesh files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print a JSON summary of the model
    Dump {
        /// Input .oemesh file
        input: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info { input } => {
            let model = load(&input, cli.max_bytes)?;
            print_info(&input, &model);
            model.unload();
        }

        Commands::Check { inputs } => {
            let mut failed = 0;
            for input in &inputs {
                match load(input, cli.max_bytes) {
                    Ok(model) => {
                        tracing::info!(
                            "{}: ok ({} meshes, {} animations)",
                            input.display(),
                            model.meshes.len(),
                            model.animations.len()
                        );
                    }
                    Err(e) => {
                        tracing::error!("{}: {:#}", input.display(), e);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{} of {} files failed to decode", failed, inputs.len());
            }
            tracing::info!("All {} files are valid!", inputs.len());
        }

        Commands::Dump { input, pretty } => {
            let model = load(&input, cli.max_bytes)?;
            let summary = ModelSummary::from(&model);
            let json = if pretty {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string(&summary)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

fn load(path: &Path, max_bytes: u64) -> Result<Model> {
    load_model_from_file_with_limit(path, max_bytes)
        .with_context(|| format!("Failed to load model: {}", path.display()))
}

fn print_info(path: &Path, model: &Model) {
    println!("{} (version {})", path.display(), model.version);
    println!(
        "Texture: {}x{} ({} bytes)",
        model.texture.width,
        model.texture.height,
        model.texture.as_bytes().len()
    );

    println!("Meshes: {}", model.meshes.len());
    for root in model.roots() {
        print_mesh_tree(model, root, 1);
    }

    println!("Animations: {}", model.animations.len());
    for anim in &model.animations {
        println!(
            "  '{}': {} frames, {:.3}s",
            anim.name_str(),
            anim.frames.len(),
            anim.duration()
        );
    }
}

fn print_mesh_tree(model: &Model, index: usize, depth: usize) {
    let mesh = &model.meshes[index];
    println!(
        "{:indent$}[{}] '{}' size {}",
        "",
        index,
        mesh.name_str(),
        mesh.size,
        indent = depth * 2
    );
    for child in model.children(index) {
        print_mesh_tree(model, child, depth + 1);
    }
}
