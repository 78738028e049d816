#![deny(unsafe_code)]
//! CLI binary for the sapling tree sketcher.
//!
//! Subcommands:
//! - `render <seed>` — grow a tree, rasterize it, write a PNG
//! - `inspect <seed>` — grow a tree and print its segments
//! - `list` — print available curve algorithms

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use sapling_core::{Seed, Srgb};
use sapling_curves::Algorithm;
use sapling_render::{default_root, sketch, DepthTaper};
use sapling_tree::{grow, GrowthParams};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "sapling", about = "Procedural branching-tree sketcher")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Grow a tree from a seed string and write a PNG sketch.
    Render {
        /// Seed string; the same seed always sketches the same tree.
        seed: String,

        /// Curve algorithm (bezier, catmull-rom, chaikin).
        #[arg(short, long, default_value = "chaikin")]
        algorithm: String,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 512)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 512)]
        height: usize,

        /// Raster cell size in pixels.
        #[arg(short, long, default_value_t = 3)]
        step: usize,

        /// Branch paint color as a hex string.
        #[arg(short, long, default_value = "#228b22")]
        color: String,

        /// Background color as a hex string.
        #[arg(short, long, default_value = "#ffffff")]
        background: String,

        /// Output file path.
        #[arg(short, long, default_value = "sapling.png")]
        output: PathBuf,

        /// Growth and fitter parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Grow a tree and print its branch segments without rasterizing.
    Inspect {
        /// Seed string.
        seed: String,

        /// Canvas width in pixels (positions the root).
        #[arg(short = 'W', long, default_value_t = 512)]
        width: usize,

        /// Canvas height in pixels (positions the root).
        #[arg(short = 'H', long, default_value_t = 512)]
        height: usize,

        /// Growth parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available curve algorithms.
    List,
}

fn parse_params(raw: &str) -> Result<serde_json::Value, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let algorithms = Algorithm::list_names();
            if cli.json {
                let info = serde_json::json!({ "algorithms": algorithms });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Algorithms:");
                for name in algorithms {
                    println!("  {name}");
                }
            }
        }
        Command::Inspect {
            seed,
            width,
            height,
            params,
        } => {
            let params = parse_params(&params)?;
            let growth = GrowthParams::from_json(&params);
            let ctx = grow(&seed, default_root(width, height), &growth);

            if cli.json {
                let segments: Vec<serde_json::Value> = ctx
                    .segments
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "parent": s.parent,
                            "tip_depth": s.tip_depth,
                            "nodes": s
                                .positions(&ctx.tree)
                                .iter()
                                .map(|p| [p.x, p.y])
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                let info = serde_json::json!({
                    "seed": seed,
                    "nodes": ctx.tree.len(),
                    "segments": segments,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "seed {seed:?}: {} nodes, {} segments",
                    ctx.tree.len(),
                    ctx.segments.len()
                );
                for (i, s) in ctx.segments.iter().enumerate() {
                    match s.parent {
                        Some(p) => println!("branch {i} ({} nodes, off branch {p})", s.nodes.len()),
                        None => println!("branch {i} ({} nodes, trunk)", s.nodes.len()),
                    }
                    for pos in s.positions(&ctx.tree) {
                        println!("  {:.0} | {:.0}", pos.x, pos.y);
                    }
                }
            }
        }
        Command::Render {
            seed,
            algorithm,
            width,
            height,
            step,
            color,
            background,
            output,
            params,
        } => {
            let params = parse_params(&params)?;
            let paint = Srgb::from_hex(&color).map_err(|e| CliError::Input(e.to_string()))?;
            let background =
                Srgb::from_hex(&background).map_err(|e| CliError::Input(e.to_string()))?;

            let mut spec = Seed::new(&seed, &algorithm, width, height);
            spec.step = step;
            spec.params = params;

            let brush = DepthTaper::from_json(&spec.params).with_color(paint);
            let result = sketch(&spec, &brush)?;

            sapling_render::snapshot::write_png(
                &result.raster,
                width,
                height,
                background,
                paint,
                &output,
            )?;

            if cli.json {
                let info = serde_json::json!({
                    "seed": seed,
                    "algorithm": result.algorithm.name(),
                    "width": width,
                    "height": height,
                    "step": step,
                    "nodes": result.context.tree.len(),
                    "segments": result.context.segments.len(),
                    "painted_cells": result.raster.painted_count(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "sketched {} ({width}x{height}, seed {seed:?}): {} nodes, {} segments -> {}",
                    result.algorithm.name(),
                    result.context.tree.len(),
                    result.context.segments.len(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
