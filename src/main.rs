use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use cadvault::{init_logging, CadImporter, BUILD_DATE, VERSION};

/// Inspect a CAD file the way the ingestion pipeline sees it.
///
/// Parses the file through the format dispatcher and prints a JSON summary
/// of the normalized scene (or the full scene graph with `--full`).
#[derive(Parser)]
#[command(name = "cadvault", version, about)]
struct Cli {
    /// Path to the CAD file to inspect
    file: PathBuf,

    /// Print the full scene graph instead of the summary
    #[arg(long)]
    full: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    tracing::info!("cadvault {} (built {})", VERSION, BUILD_DATE);

    let importer = CadImporter::new();
    let scene = importer
        .parse_file(&cli.file)
        .with_context(|| format!("Could not ingest {}", cli.file.display()))?;

    let output = if cli.full {
        serde_json::to_string_pretty(&scene)?
    } else {
        let summary = json!({
            "file": cli.file.display().to_string(),
            "format": scene.metadata.get("format"),
            "units": scene.units,
            "layerCount": scene.layers.len(),
            "objectCount": scene.object_count(),
            "boundingBox": scene.bounding_box,
            "metadata": scene.metadata,
        });
        serde_json::to_string_pretty(&summary)?
    };
    println!("{}", output);

    Ok(())
}
