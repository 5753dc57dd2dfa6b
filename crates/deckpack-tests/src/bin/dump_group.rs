//! dump_group - print the packed bytes of a solid-color row
//!
//! Handy when comparing against a hardware capture or an SDK sample.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deckpack_codec::{pack, PackerRegistry};
use deckpack_core::{FormatDescriptor, RowGeometry};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dump_group")]
#[command(author, version, about = "Dump packed wire-format bytes for a solid color")]
#[command(long_about = "
Packs a solid-color frame into a video wire format and prints the bytes.

Examples:
  dump_group -f R12L -c 4095,0,0          # one 12-bit group, red
  dump_group -f r210 -w 65 -c 1023,0,0    # shows the 256-byte row padding
  dump_group -f 2vuy -w 3 -c 235,128,128 --json
")]
struct Cli {
    /// Format: FourCC (R12L), symbolic name (12BIT_RGBLE) or numeric code
    #[arg(short, long)]
    format: String,

    /// Width in pixels (defaults to one packing block)
    #[arg(short, long)]
    width: Option<u32>,

    /// Rows to pack
    #[arg(long, default_value = "1")]
    rows: u32,

    /// Sample values in format channel order (R,G,B or Y,U,V)
    #[arg(short, long, value_delimiter = ',', default_values_t = [0u16, 0, 0])]
    color: Vec<u16>,

    /// Row stride in bytes (defaults to the minimum)
    #[arg(short, long)]
    stride: Option<usize>,

    /// Print a JSON report instead of hex
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    descriptor: &'a FormatDescriptor,
    width: u32,
    height: u32,
    stride: usize,
    data_bytes: usize,
    rows: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let info = PackerRegistry::global()
        .resolve(&cli.format)
        .with_context(|| format!("Cannot resolve format '{}'", cli.format))?;
    let desc = info.descriptor;

    let width = cli.width.unwrap_or(desc.packing.pixels());
    let geometry = match cli.stride {
        Some(stride) => RowGeometry::with_stride(desc.format, width, stride),
        None => RowGeometry::new(desc.format, width),
    }
    .context("Invalid row geometry")?;
    let frame_len = geometry.frame_bytes(cli.rows).context("Invalid frame height")?;

    let [a, b, c] = cli.color[..] else {
        bail!("--color takes exactly three values, got {}", cli.color.len());
    };
    if [a, b, c].iter().any(|&v| !desc.depth.contains(v)) {
        info!(depth = %desc.depth, "Color exceeds format depth, samples will be clamped");
    }

    let samples: Vec<u16> = std::iter::repeat([a, b, c])
        .take(width as usize * cli.rows as usize)
        .flatten()
        .collect();
    let mut frame = vec![0u8; frame_len];
    pack(desc.format, &samples, width, cli.rows, &mut frame, geometry.stride)
        .with_context(|| format!("Failed to pack {} frame", desc.fourcc))?;
    debug!(format = %desc.format, width, stride = geometry.stride, frame_len, "Packed");

    let rows: Vec<String> = frame.chunks(geometry.stride).map(hex_row).collect();

    if cli.json {
        let report = Report {
            descriptor: desc,
            width,
            height: cli.rows,
            stride: geometry.stride,
            data_bytes: geometry.data_bytes(),
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} ({}), {}x{}, stride {} bytes, {} data bytes per row",
        desc.fourcc,
        desc.name,
        width,
        cli.rows,
        geometry.stride,
        geometry.data_bytes()
    );
    for (y, row) in rows.iter().enumerate() {
        println!("row {y}:");
        for (i, line) in row.split(' ').collect::<Vec<_>>().chunks(8).enumerate() {
            println!("  {:06x}: {}", i * 32, line.join(" "));
        }
    }
    Ok(())
}

/// Hex dump of one row, 32-bit words separated by spaces.
fn hex_row(row: &[u8]) -> String {
    row.chunks(4)
        .map(|word| word.iter().map(|b| format!("{b:02x}")).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
