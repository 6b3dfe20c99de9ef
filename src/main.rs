use clap::Parser;
use freehand_fit::output::svg::{self, SvgOptions};
use freehand_fit::kurbo::{BezPath, CubicBez, PathSeg};
use freehand_fit::{eval, input, FitConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "freehand-fit", about = "Fit digitized point strokes with cubic bezier curves")]
struct Cli {
    /// Point file: one "x y" or "x,y" per line, blank line between strokes ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output SVG path (prints path data to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum distance from any input point to the curve
    #[arg(short, long, default_value = "1.0")]
    tolerance: f64,

    /// Newton-Raphson refinement rounds before splitting a segment
    #[arg(long, default_value = "4")]
    max_iterations: usize,

    /// Split failed fits immediately instead of refining first
    #[arg(long)]
    no_reparameterize: bool,

    /// Draw the input points into the SVG output
    #[arg(long)]
    show_points: bool,

    /// Print a deviation report for each stroke
    #[arg(long)]
    report: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = FitConfig {
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
        reparameterize: !cli.no_reparameterize,
    };

    let t_start = Instant::now();
    let strokes = input::read_strokes(&cli.input)?;
    let n_points: usize = strokes.iter().map(Vec::len).sum();
    eprintln!();
    eprintln!("  Load        {} strokes \u{00b7} {} points", strokes.len(), n_points);

    // (stroke index, fitted path) for every stroke that could be fitted.
    let mut fitted: Vec<(usize, BezPath)> = Vec::with_capacity(strokes.len());
    for (i, result) in freehand_fit::fit_strokes(&strokes, &config).into_iter().enumerate() {
        match result {
            Ok(path) => fitted.push((i, path)),
            Err(e) => eprintln!("  Skip        stroke {}: {}", i, e),
        }
    }
    let paths: Vec<BezPath> = fitted.iter().map(|(_, p)| p.clone()).collect();

    let n_segments: usize = paths.iter().map(|p| p.elements().len().saturating_sub(1)).sum();
    eprintln!(
        "  Fit         {} segments  (tolerance {}, {}ms)",
        n_segments,
        config.tolerance,
        t_start.elapsed().as_millis(),
    );

    if cli.report {
        for (i, path) in &fitted {
            let segments: Vec<CubicBez> = path
                .segments()
                .filter_map(|seg| match seg {
                    PathSeg::Cubic(c) => Some(c),
                    _ => None,
                })
                .collect();
            eprintln!("  Stroke {}", i);
            eprint!("{}", eval::evaluate(&strokes[*i], &segments));
        }
    }

    match &cli.output {
        Some(out) => {
            let options = SvgOptions {
                stroke_width: (config.tolerance / 2.0).max(0.5),
                points: if cli.show_points {
                    strokes.iter().flatten().copied().collect()
                } else {
                    vec![]
                },
                ..SvgOptions::default()
            };
            std::fs::write(out, svg::to_document(&paths, &options))?;
            eprintln!();
            eprintln!("  \u{2713} {}", out.display());
        }
        None => {
            for path in &paths {
                println!("{}", path.to_svg());
            }
        }
    }
    eprintln!();

    Ok(())
}
