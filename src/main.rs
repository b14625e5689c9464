//! Knotwork CLI
//!
//! Usage:
//!   knotwork [OPTIONS] [FILE]
//!
//! Reads a border spec (TOML) from FILE or stdin, applies command-line
//! overrides and writes the SVG border to stdout.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use knotwork::layout::classification_map;
use knotwork::{
    compute, render_svg, BorderSpec, CornerStyle, Emblem, EmblemPlacement, Pattern, SvgConfig,
};

#[derive(Parser)]
#[command(name = "knotwork")]
#[command(about = "Procedural Celtic-knot borders as SVG")]
struct Cli {
    /// Border spec file in TOML (reads from stdin when piped)
    input: Option<PathBuf>,

    /// Rectangle width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Rectangle height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<f64>,

    /// Band thickness in cells (1-3)
    #[arg(short, long)]
    thickness: Option<u32>,

    /// Padding between the rectangle edge and the border
    #[arg(long)]
    inset: Option<f64>,

    /// Fill pattern: braid, twist-x, twist-y, box
    #[arg(short, long)]
    pattern: Option<String>,

    /// Corner style: round, sharp, box
    #[arg(short, long)]
    corner_style: Option<String>,

    /// Strand color
    #[arg(long)]
    stroke_color: Option<String>,

    /// Strand width in pixels
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Ribbon color drawn inside each strand
    #[arg(long)]
    ribbon_color: Option<String>,

    /// Emblem placement (top-left, top-right, bottom-center, watermark,
    /// signature-left, signature-right)
    #[arg(long)]
    emblem: Option<EmblemPlacement>,

    /// Emblem display scale
    #[arg(long)]
    emblem_scale: Option<f64>,

    /// Prefix for definition ids
    #[arg(long)]
    id_prefix: Option<String>,

    /// Write the SVG on a single line
    #[arg(long)]
    compact: bool,

    /// Print grid size, tile counts and the classification map to stderr
    #[arg(short, long)]
    summary: bool,

    /// Log pipeline steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let mut spec = match load_spec(&cli) {
        Ok(spec) => spec,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };
    apply_overrides(&mut spec, &cli);

    let mut config = SvgConfig::new().with_pretty_print(!cli.compact);
    if let Some(prefix) = &cli.id_prefix {
        config = config.with_id_prefix(prefix.clone());
    }

    let layout = compute(&spec);
    if cli.summary {
        print_summary(&spec, &layout);
    }

    println!("{}", render_svg(&layout, &spec, &config));
}

fn load_spec(cli: &Cli) -> Result<BorderSpec, String> {
    match &cli.input {
        Some(path) => BorderSpec::from_file(path)
            .map_err(|e| format!("loading border spec '{}': {}", path.display(), e)),
        None if !io::stdin().is_terminal() => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("reading from stdin: {}", e))?;
            BorderSpec::from_str(&buffer).map_err(|e| format!("parsing stdin: {}", e))
        }
        None => Ok(BorderSpec::default()),
    }
}

fn apply_overrides(spec: &mut BorderSpec, cli: &Cli) {
    if let Some(width) = cli.width {
        spec.outer_width = width;
    }
    if let Some(height) = cli.height {
        spec.outer_height = height;
    }
    if let Some(cell_size) = cli.cell_size {
        spec.cell_size = cell_size;
    }
    if let Some(thickness) = cli.thickness {
        spec.thickness = thickness;
    }
    if let Some(inset) = cli.inset {
        spec.inset = inset;
    }
    if let Some(pattern) = &cli.pattern {
        spec.pattern = Pattern::parse_lenient(pattern);
    }
    if let Some(style) = &cli.corner_style {
        spec.corner_style = CornerStyle::parse_lenient(style);
    }
    if let Some(color) = &cli.stroke_color {
        spec.stroke_color = color.clone();
    }
    if let Some(width) = cli.stroke_width {
        spec.stroke_width = width;
    }
    if let Some(color) = &cli.ribbon_color {
        spec.ribbon_color = Some(color.clone());
    }
    if let Some(placement) = cli.emblem {
        let scale = spec.emblem.map(|e| e.scale).unwrap_or(1.0);
        spec.emblem = Some(Emblem::new(placement).with_scale(scale));
    }
    if let (Some(scale), Some(emblem)) = (cli.emblem_scale, spec.emblem.as_mut()) {
        emblem.scale = scale;
    }
}

fn print_summary(spec: &BorderSpec, layout: &knotwork::BorderLayout) {
    let Some(grid) = &layout.grid else {
        eprintln!("empty border ({} x {})", layout.width, layout.height);
        return;
    };
    eprintln!(
        "grid {} x {} at ({}, {}), {} tiles",
        grid.cols,
        grid.rows,
        grid.x_offset,
        grid.y_offset,
        layout.tiles.len()
    );
    for (archetype, count) in layout.archetype_counts() {
        eprintln!("  {:<16} {}", archetype.to_string(), count);
    }
    eprintln!(
        "{}",
        classification_map(grid, spec.thickness_rows(), spec.pattern)
    );
}
