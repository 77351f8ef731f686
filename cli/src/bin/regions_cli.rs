use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use cli::{overlay_geojson, render_mask, AxisSpec, RegionReport};
use color_eyre::eyre::{Result, WrapErr};
use regions::{index_axis, io, Region, RegionConfig, Shape};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the mask of a region over a sampling grid
    Mask {
        /// Path to the region configuration (.json or .toml)
        #[arg(short, long)]
        region: PathBuf,
        /// Lateral axis as start:stop:num
        #[arg(long)]
        x_axis: AxisSpec,
        /// Axial axis as start:stop:num
        #[arg(long)]
        z_axis: AxisSpec,
        /// Write the mask as an image instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract the image values inside a region
    Extract {
        /// Path to the region configuration (.json or .toml)
        #[arg(short, long)]
        region: PathBuf,
        /// Image to sample
        #[arg(short, long)]
        image: PathBuf,
        /// Lateral axis as start:stop:num (defaults to pixel columns)
        #[arg(long)]
        x_axis: Option<AxisSpec>,
        /// Axial axis as start:stop:num (defaults to pixel rows)
        #[arg(long)]
        z_axis: Option<AxisSpec>,
    },
    /// Describe a region
    Info {
        /// Path to the region configuration (.json or .toml)
        #[arg(short, long)]
        region: PathBuf,
        /// Also summarise the mask over this lateral axis
        #[arg(long, requires = "z_axis")]
        x_axis: Option<AxisSpec>,
        /// Also summarise the mask over this axial axis
        #[arg(long, requires = "x_axis")]
        z_axis: Option<AxisSpec>,
    },
    /// Print the region outline as GeoJSON
    Overlay {
        /// Path to the region configuration (.json or .toml)
        #[arg(short, long)]
        region: PathBuf,
        /// Number of points used to sample curved edges
        #[arg(long, default_value = "64")]
        segments: usize,
    },
    /// Print the JSON schema of region configurations
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Mask { region, x_axis, z_axis, output } => {
            let shape = load_region(region)?;
            let mask = shape.create_mask(x_axis.to_axis().view(), z_axis.to_axis().view());
            match output {
                Some(path) => {
                    io::save_mask(&mask, path)
                        .wrap_err_with(|| format!("Failed to write mask to {}", path.display()))?;
                    info!("Mask written to {}", path.display());
                }
                None => println!("{}", render_mask(&mask)),
            }
        }
        Commands::Extract { region, image, x_axis, z_axis } => {
            let shape = load_region(region)?;
            let pixels = io::load_image(image)
                .wrap_err_with(|| format!("Failed to load image {}", image.display()))?;
            let (rows, cols) = pixels.dim();

            let x = x_axis.map_or_else(|| index_axis(cols), |spec| spec.to_axis());
            let z = z_axis.map_or_else(|| index_axis(rows), |spec| spec.to_axis());
            let values = shape.get_values_in_region(pixels.view(), x.view(), z.view())?;

            info!("Extracted {} values from {}", values.len(), image.display());
            println!("{}", serde_json::to_string(&values.to_vec())?);
        }
        Commands::Info { region, x_axis, z_axis } => {
            let shape = load_region(region)?;
            let mut report = RegionReport::new(&shape);
            if let (Some(x_axis), Some(z_axis)) = (x_axis, z_axis) {
                let mask = shape.create_mask(x_axis.to_axis().view(), z_axis.to_axis().view());
                report = report.with_mask(&mask);
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Overlay { region, segments } => {
            let shape = load_region(region)?;
            println!("{}", overlay_geojson(&shape, *segments)?);
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&RegionConfig::schema())?);
        }
    }

    Ok(())
}

fn load_region(path: &Path) -> Result<Shape> {
    let config = RegionConfig::from_file(path)
        .wrap_err_with(|| format!("Failed to read region config {}", path.display()))?;
    let shape = config.build()?;
    info!("Loaded {} region from {}", shape.name(), path.display());
    Ok(shape)
}
