use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use generator::phantom::{build_phantom, PhantomConfig};
use raster::image::{load_image, normalize_to_u16, rescale_to_peak, save_image};
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod raster;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Non-interactive filtered-backprojection driver")]
struct Args {
    /// Input 16-bit grayscale image (square); omit when using --phantom
    input: Option<PathBuf>,
    /// Output path for the sinogram
    #[arg(long, default_value = "sinogram.png")]
    sinogram: PathBuf,
    /// Output path for the unfiltered backprojection
    #[arg(long, default_value = "backprojection.png")]
    backprojection: PathBuf,
    /// Output path for the filtered sinogram
    #[arg(long, default_value = "sinogram_filtered.png")]
    filtered_sinogram: PathBuf,
    /// Output path for the filtered backprojection
    #[arg(long, default_value = "backprojection_filtered.png")]
    filtered_backprojection: PathBuf,
    /// Number of projection angles over [0, 180)
    #[arg(long, default_value_t = 64)]
    sino_rows: usize,
    /// Load the workflow config from YAML instead of the CLI flags
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Synthesize a square phantom of this side length instead of reading input
    #[arg(long)]
    phantom: Option<usize>,
    /// Write a JSON run summary to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.sino_rows)
    };

    let image = match (&args.input, args.phantom) {
        (_, Some(dim)) => build_phantom(&PhantomConfig {
            dim,
            ..Default::default()
        })?,
        (Some(path), None) => rescale_to_peak(&load_image(path)?),
        (None, None) => anyhow::bail!("either an input image or --phantom is required"),
    };

    let runner = Runner::new(config);
    let result = runner.execute(&image)?;

    save_image(&args.sinogram, &normalize_to_u16(&result.sinogram))?;
    save_image(&args.backprojection, &normalize_to_u16(&result.backprojection))?;
    save_image(
        &args.filtered_sinogram,
        &normalize_to_u16(&result.filtered_sinogram),
    )?;
    save_image(
        &args.filtered_backprojection,
        &normalize_to_u16(&result.filtered_backprojection),
    )?;

    println!(
        "Reconstruction done -> dim {}, angles {}, stages {}",
        result.report.dim,
        result.report.sino_rows,
        result.report.stages.len()
    );

    if let Some(path) = &args.report {
        let json =
            serde_json::to_string_pretty(&result.report).context("serializing run report")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json).with_context(|| format!("writing report {}", path.display()))?;
    }

    Ok(())
}
