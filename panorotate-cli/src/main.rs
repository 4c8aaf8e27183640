use clap::Parser;
use panorotate::io::{load, SaveFormat, SaveParams};
use panorotate::{
    deg_to_rad, double_rotate_test, remap_with, rot_x, PixelGrid, RemapConfig, RemapMode,
    RotationOrder,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(
    name = "panorotate",
    author,
    version,
    about = "Rotate equirectangular (lat/long) panoramas",
    allow_negative_numbers = true
)]
struct Cli {
    /// Input image.
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Output image (required except for --test).
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Output format; see --list-formats (default TIFF).
    #[arg(short = 'f', long)]
    format: Option<String>,
    /// JPEG quality percent (default 90).
    #[arg(short = 'q', long)]
    quality: Option<u8>,
    /// Rotate, rotate back, and print difference statistics.
    ///
    /// Without angles a 90 degree roll is used.
    #[arg(long)]
    test: bool,
    /// One sample per output pixel for a quick preview.
    #[arg(long)]
    preview: bool,
    /// Use the legacy 6x6 uniform supersampler (for comparisons).
    #[arg(long, conflicts_with = "preview")]
    uniform: bool,
    /// Rotation sequence of R (roll), P (pitch) and Y (yaw), e.g. RPY, RPR.
    #[arg(long)]
    order: Option<String>,
    /// Gaussian filter sigma for the filtered engine.
    #[arg(long)]
    sigma: Option<f64>,
    /// Subsamples per axis for the filtered engine (odd).
    #[arg(long)]
    subsamples: Option<usize>,
    /// Process rows on a single thread.
    #[arg(long)]
    sequential: bool,
    /// Optional JSON config; command-line flags take precedence.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Print the recognized save formats and exit.
    #[arg(long)]
    list_formats: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
    /// Rotation angles in degrees, one per step of --order.
    ///
    /// Missing angles are zero; extra angles are ignored.
    angles: Vec<f64>,
}

fn default_sigma() -> f64 {
    RemapMode::DEFAULT_SIGMA
}

fn default_subsamples() -> usize {
    RemapMode::DEFAULT_SUBSAMPLES
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ModeConfig {
    Filtered {
        #[serde(default = "default_sigma")]
        sigma: f64,
        #[serde(default = "default_subsamples")]
        subsamples: usize,
    },
    Uniform,
    Preview,
}

impl From<ModeConfig> for RemapMode {
    fn from(value: ModeConfig) -> Self {
        match value {
            ModeConfig::Filtered { sigma, subsamples } => RemapMode::Filtered { sigma, subsamples },
            ModeConfig::Uniform => RemapMode::Uniform,
            ModeConfig::Preview => RemapMode::Preview,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
    quality: Option<u8>,
    order: Option<String>,
    angles: Vec<f64>,
    mode: Option<ModeConfig>,
    parallel: Option<bool>,
}

fn print_formats() {
    println!("Recognized save format flags (for -f):");
    let width = SaveFormat::TABLE
        .iter()
        .map(|(name, _, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, _, description) in SaveFormat::TABLE {
        println!("    {name:<pad$}{description}", pad = width + 4);
    }
}

fn resolve_mode(cli: &Cli, config_mode: Option<ModeConfig>) -> RemapMode {
    if cli.preview {
        return RemapMode::Preview;
    }
    if cli.uniform {
        return RemapMode::Uniform;
    }
    let base = config_mode.map(RemapMode::from).unwrap_or_default();
    let (sigma, subsamples) = match base {
        RemapMode::Filtered { sigma, subsamples } => (sigma, subsamples),
        _ if cli.sigma.is_none() && cli.subsamples.is_none() => return base,
        _ => (RemapMode::DEFAULT_SIGMA, RemapMode::DEFAULT_SUBSAMPLES),
    };
    RemapMode::Filtered {
        sigma: cli.sigma.unwrap_or(sigma),
        subsamples: cli.subsamples.unwrap_or(subsamples),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut filter = EnvFilter::from_default_env().add_directive("warn".parse()?);
    if cli.trace {
        filter = filter.add_directive("panorotate=info".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }
    if cli.list_formats {
        print_formats();
        return Ok(());
    }

    let config: Config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    let format: SaveFormat = cli
        .format
        .as_deref()
        .or(config.format.as_deref())
        .unwrap_or("TIFF")
        .parse()
        .inspect_err(|_| print_formats())?;
    let quality = cli.quality.or(config.quality).unwrap_or(90);
    let order: RotationOrder = cli
        .order
        .as_deref()
        .or(config.order.as_deref())
        .unwrap_or("RPY")
        .parse()?;
    let angles = if cli.angles.is_empty() {
        config.angles
    } else {
        cli.angles.clone()
    };
    let input = cli.input.clone().or(config.input);
    let output = cli.output.clone().or(config.output);
    let parallel = !cli.sequential && config.parallel.unwrap_or(true);
    let mode = resolve_mode(&cli, config.mode);
    let remap_cfg = RemapConfig { mode, parallel };

    let composition = order.compose(&angles);
    if composition.defaulted > 0 {
        tracing::warn!("assuming unspecified angles are 0");
    }
    if composition.ignored > 0 {
        tracing::warn!("extra angles are being ignored");
    }

    let input = input.ok_or("cannot proceed without input file (-i)")?;
    if !cli.test && output.is_none() {
        return Err("no output filename specified (-o)".into());
    }

    let loaded = load(&input)?;
    let src = loaded.grid;

    if cli.test {
        let rotation = if angles.is_empty() {
            rot_x(deg_to_rad(90.0))
        } else {
            composition.matrix
        };
        println!("Rotating and rotating back ({})...", remap_cfg.mode.name());
        let stats = double_rotate_test(&src, &rotation, &remap_cfg)?;
        println!();
        print!("{stats}");
        return Ok(());
    }

    let output = output.ok_or("no output filename specified (-o)")?;
    println!("Input:       {}", input.display());
    println!("Output:      {}", output.display());
    println!("Output type: {format}");
    println!("Size:        {} {}", src.width(), src.height());
    println!("Order:       {order}");
    let rendered: Vec<String> = composition
        .angles_deg
        .iter()
        .enumerate()
        .map(|(idx, angle)| {
            let marker = if idx >= angles.len() { "(auto)" } else { "" };
            format!("{angle}{marker}")
        })
        .chain(
            angles
                .iter()
                .skip(order.len())
                .map(|angle| format!("{angle}(!)")),
        )
        .collect();
    println!("Angles:      {}", rendered.join(" "));

    if matches!(remap_cfg.mode, RemapMode::Preview) {
        println!("Preview mode enabled -- quality may be reduced to produce results faster");
    }

    let mut dst = PixelGrid::new(src.width(), src.height())?;
    remap_with(&mut dst, &src, &composition.matrix, &remap_cfg)?;

    let params = SaveParams {
        bit_depth: loaded.bit_depth,
        channels: loaded.channels,
        quality,
    };
    format.save(&dst, &output, params)?;

    Ok(())
}
