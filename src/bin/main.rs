//! Voxel Flame CLI
//!
//! Command-line host for the flame voxelizer: evaluates frames, lists and
//! exports presets, and benchmarks the grid scan.
//!
//! Author: Moroya Sakamoto

#![allow(
    clippy::uninlined_format_args,
    clippy::needless_pass_by_value,
    clippy::cast_precision_loss,
    clippy::doc_markdown
)]

#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use voxel_flame::prelude::*;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "voxel-flame")]
#[command(author = "Moroya Sakamoto")]
#[command(version = voxel_flame::VERSION)]
#[command(about = "Voxel Flame: real-time SDF flame voxelizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List built-in presets
    Presets,

    /// Evaluate a single frame
    Frame {
        /// Preset name or label
        #[arg(short, long, conflicts_with = "config")]
        preset: Option<Preset>,
        /// Parameter file (.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Elapsed time in seconds
        #[arg(short, long, default_value = "0.0")]
        time: f32,
        /// Evaluate on all cores
        #[arg(long)]
        parallel: bool,
        /// Write the instance list as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Benchmark frame evaluation
    Bench {
        /// Preset name or label
        #[arg(short, long, default_value = "standard")]
        preset: Preset,
        /// Number of frames per mode
        #[arg(short, long, default_value = "60")]
        frames: usize,
    },

    /// Write a preset as a JSON parameter file
    ExportConfig {
        /// Preset name or label
        #[arg(short, long, default_value = "standard")]
        preset: Preset,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Presets => cmd_presets(),
        Commands::Frame {
            preset,
            config,
            time,
            parallel,
            output,
        } => cmd_frame(preset, config, time, parallel, output),
        Commands::Bench { preset, frames } => cmd_bench(preset, frames),
        Commands::ExportConfig { preset, output } => cmd_export_config(preset, output),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn cmd_presets() {
    for preset in Preset::ALL {
        let p = preset.params();
        println!(
            "{:<10} {:<16} res={:<3} sphere={:.1} capsule={:.1}x{:.1} blend={:.2} threshold={:.2}",
            preset.name(),
            preset.label(),
            p.resolution,
            p.sphere_radius,
            p.capsule_height,
            p.capsule_radius,
            p.blend,
            p.threshold
        );
    }
}

#[cfg(feature = "cli")]
fn cmd_frame(
    preset: Option<Preset>,
    config: Option<PathBuf>,
    time: f32,
    parallel: bool,
    output: Option<PathBuf>,
) {
    let params = match (preset, config) {
        (_, Some(path)) => match load_params(&path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Load error: {}", e);
                std::process::exit(1);
            }
        },
        (Some(preset), None) => preset.params(),
        (None, None) => ParameterSet::default(),
    };

    let voxelizer = Voxelizer::new();
    let start = std::time::Instant::now();
    let result = if parallel {
        voxelizer.evaluate_parallel(&params, time)
    } else {
        voxelizer.evaluate(&params, time)
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let instances = match result {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    let stats = FrameStats::from_instances(&instances);
    println!(
        "Frame t={:.3}s: {} / {} cells survived ({:.1} ms)",
        time,
        stats.count,
        params.cell_count(),
        elapsed_ms
    );
    if stats.count > 0 {
        println!("  bounds: {:?} .. {:?}", stats.min, stats.max);
        println!("  mean scale: {:.4}", stats.mean_scale);
    }

    if let Some(path) = output {
        let file = match std::fs::File::create(&path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Write error: {}", e);
                std::process::exit(1);
            }
        };
        let writer = std::io::BufWriter::new(file);
        match serde_json::to_writer(writer, &instances) {
            Ok(_) => println!("Wrote {} instances to {}", instances.len(), path.display()),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_bench(preset: Preset, frames: usize) {
    let params = preset.params();
    let voxelizer = Voxelizer::new();
    let frames = frames.max(1);
    let mut buffer = Vec::with_capacity(params.cell_count());

    println!(
        "Benchmarking {} ({}³ = {} cells, noise seed {}), {} frames",
        preset.label(),
        params.resolution,
        params.cell_count(),
        voxelizer.noise().table().seed(),
        frames
    );

    let mut survivors = 0;
    let start = std::time::Instant::now();
    for i in 0..frames {
        let t = i as f32 / 60.0;
        match voxelizer.evaluate_into(&params, t, &mut buffer) {
            Ok(n) => survivors += n,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(1);
            }
        }
    }
    let seq = start.elapsed().as_secs_f64();

    let start = std::time::Instant::now();
    for i in 0..frames {
        let t = i as f32 / 60.0;
        if let Err(e) = voxelizer.evaluate_into_parallel(&params, t, &mut buffer) {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    }
    let par = start.elapsed().as_secs_f64();

    let cells = (params.cell_count() * frames) as f64;
    println!(
        "  sequential: {:.2} ms/frame ({:.1} M cells/sec)",
        seq * 1000.0 / frames as f64,
        cells / seq / 1_000_000.0
    );
    println!(
        "  parallel:   {:.2} ms/frame ({:.1} M cells/sec)",
        par * 1000.0 / frames as f64,
        cells / par / 1_000_000.0
    );
    println!("  mean survivors: {}", survivors / frames);
}

#[cfg(feature = "cli")]
fn cmd_export_config(preset: Preset, output: PathBuf) {
    match save_params(&preset.params(), &output) {
        Ok(_) => println!("Saved {} to {}", preset.label(), output.display()),
        Err(e) => {
            eprintln!("Save error: {}", e);
            std::process::exit(1);
        }
    }
}
