use cellgrid::config::{load_config, RuntimeConfig};
use cellgrid::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use cellgrid::overlay::{lattice_points, matching_points, render_overlay};
use cellgrid::{GridAnalysis, GridAnalyzer};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(about = "Recover grid step, phase and dominant cell color from an image")]
#[command(version)]
struct Cli {
    /// Input image path.
    input: PathBuf,

    /// JSON runtime configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use this step instead of searching for it.
    #[arg(long)]
    step: Option<usize>,

    /// Write a copy of the input with the grid points marked.
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Write the analysis report as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Luminance distance from the dominant color for a point to be marked.
    #[arg(long)]
    match_tolerance: Option<u8>,

    /// Mark every lattice point, not only those matching the dominant color.
    #[arg(long)]
    all_points: bool,

    /// Suppress the text summary.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RuntimeConfig::default(),
    };
    if cli.step.is_some() {
        config.analyzer.fixed_step = cli.step;
    }
    if let Some(tolerance) = cli.match_tolerance {
        config.overlay.match_tolerance = tolerance;
    }
    config.overlay.all_points |= cli.all_points;

    let rgb = load_rgb_image(&cli.input)?;
    let view = rgb.as_view();
    let analyzer = GridAnalyzer::new(config.analyzer.clone());
    let analysis = analyzer
        .analyze(&view)
        .map_err(|e| format!("Analysis of {} failed: {e}", cli.input.display()))?;

    let points = if config.overlay.all_points {
        lattice_points(analysis.width, analysis.height, &analysis.geometry)
    } else {
        matching_points(&view, &analysis.geometry, config.overlay.match_tolerance)
    };

    if !cli.quiet {
        print_text_summary(&analysis, points.len());
    }

    if let Some(path) = &cli.json {
        write_json_file(path, &analysis)?;
        if !cli.quiet {
            println!("JSON report written to {}", path.display());
        }
    }

    if let Some(path) = &cli.overlay {
        let canvas = rgb.to_rgb_image();
        let marked = render_overlay(&canvas, &points, &analysis.geometry, config.overlay.marker);
        save_rgb_image(&marked, path)?;
        if !cli.quiet {
            println!("Overlay written to {}", path.display());
        }
    }

    Ok(())
}

fn print_text_summary(analysis: &GridAnalysis, marked: usize) {
    let g = &analysis.geometry;
    println!("Grid analysis {}x{}", analysis.width, analysis.height);
    println!(
        "  step: {}{}",
        g.step,
        if analysis.step_searched { "" } else { " (fixed)" }
    );
    println!("  shift: ({}, {})", g.shift_x, g.shift_y);
    println!("  dominant_color: {}", g.dominant_color);
    println!(
        "  support: {}/{} ({:.1}%)",
        analysis.support,
        analysis.cells,
        analysis.coverage() * 100.0
    );
    if analysis.tied_buckets > 1 {
        println!("  note: {} colors tie for dominant", analysis.tied_buckets);
    }
    println!("  marked points: {marked}");
    println!(
        "Timings (ms): step={:.3} shift={:.3} total={:.3}",
        analysis.timings.step_ms, analysis.timings.shift_ms, analysis.timings.total_ms
    );
}
