use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use morphkit::{CellSize, CurveConfig, Ease, GridShape, SheetConfig};

#[derive(Parser, Debug)]
#[command(name = "morphkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite sorted PNG frames into a single contact-sheet image.
    Sheet(SheetArgs),
    /// Plot the De Casteljau construction of a quadratic Bezier curve.
    Curve(CurveArgs),
}

#[derive(Parser, Debug)]
struct SheetArgs {
    /// Sheet job JSON; cannot be combined with the inline flags.
    #[arg(
        long,
        conflicts_with_all = ["input_dir", "out", "cell_width", "cell_height", "take", "rows", "cols"]
    )]
    config: Option<PathBuf>,

    /// Directory scanned for *.png frames.
    #[arg(long, default_value = "images")]
    input_dir: PathBuf,

    /// Output image path (.jpg, .jpeg or .png).
    #[arg(long, default_value = "image.jpg")]
    out: PathBuf,

    /// Cell width in pixels.
    #[arg(long, default_value_t = 1000)]
    cell_width: u32,

    /// Cell height in pixels.
    #[arg(long, default_value_t = 1000)]
    cell_height: u32,

    /// Number of sorted frames to composite.
    #[arg(long, default_value_t = 24)]
    take: usize,

    /// Grid rows; defaults to a single row of all taken frames.
    #[arg(long, requires = "cols")]
    rows: Option<u32>,

    /// Grid columns.
    #[arg(long, requires = "rows")]
    cols: Option<u32>,
}

#[derive(Parser, Debug)]
struct CurveArgs {
    /// Curve job JSON; cannot be combined with the inline flags.
    #[arg(long, conflicts_with_all = ["out", "samples", "ease", "p0", "p1", "p2"])]
    config: Option<PathBuf>,

    /// Output figure path (.png).
    #[arg(long, default_value = "de_casteljau.png")]
    out: PathBuf,

    /// Sample count over [0, 1], endpoints included.
    #[arg(long, default_value_t = 50)]
    samples: usize,

    /// Sample spacing: linear, quad-in(-out), cubic-in(-out), ...
    #[arg(long, default_value = "linear")]
    ease: Ease,

    /// First control point as "x,y".
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    p0: kurbo::Point,

    /// Middle control point as "x,y".
    #[arg(long, value_parser = parse_point, default_value = "0.5,1")]
    p1: kurbo::Point,

    /// Last control point as "x,y".
    #[arg(long, value_parser = parse_point, default_value = "1,0")]
    p2: kurbo::Point,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sheet(args) => cmd_sheet(args),
        Command::Curve(args) => cmd_curve(args),
    }
}

fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => read_job_json::<SheetConfig>(path)?,
        None => SheetConfig {
            input_dir: args.input_dir,
            output_path: args.out,
            cell: CellSize::new(args.cell_width, args.cell_height)?,
            take: args.take,
            shape: match (args.rows, args.cols) {
                (Some(rows), Some(cols)) => Some(GridShape::new(rows, cols)?),
                _ => None,
            },
        },
    };

    let sheet = morphkit::compose_sheet(&config)?;
    morphkit::write_sheet(&sheet, &config.output_path)?;

    eprintln!("wrote {}", config.output_path.display());
    Ok(())
}

fn cmd_curve(args: CurveArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => read_job_json::<CurveConfig>(path)?,
        None => CurveConfig {
            p0: args.p0,
            p1: args.p1,
            p2: args.p2,
            samples: args.samples,
            ease: args.ease,
            output_path: args.out,
        },
    };

    let samples = morphkit::sample_quadratic(&config)?;
    morphkit::render_curve_figure(&config, &samples)?;

    eprintln!("wrote {}", config.output_path.display());
    Ok(())
}

fn read_job_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open job config '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| "parse job config JSON")
}

fn parse_point(s: &str) -> Result<kurbo::Point, String> {
    let mut parts = s.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected 'x,y', got '{s}'"));
    };
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(kurbo::Point::new(x, y))
}
