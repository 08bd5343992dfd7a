use crate::catalog;
use crate::config::{Edition, load_config};
use crate::layout::compute_layout;
use crate::parser;
use crate::render::{load_logo, render_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "toolscape",
    version,
    about = "Data-infrastructure landscape diagram generator"
)]
pub struct Args {
    /// Directory holding the numbered category markdown files and logo.png
    #[arg(short = 'd', long = "data-dir", default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory the SVG/PNG files are written into
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Landscape edition (selects data source, theme and output names)
    #[arg(short = 'e', long = "edition", value_enum, default_value = "oss")]
    pub edition: Edition,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "both")]
    pub format: OutputFormat,

    /// Config JSON file (camelCase themeVariables)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Raster scale factor (overrides the edition default)
    #[arg(short = 's', long = "scale")]
    pub scale: Option<f32>,

    /// Canvas width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Canvas height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Both,
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref(), args.edition)?;
    if let Some(width) = args.width {
        config.layout.width = width;
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.layout.height = height;
        config.render.height = height;
    }
    if let Some(scale) = args.scale {
        config.render.scale = scale;
    }

    let catalog = match args.edition {
        Edition::Oss => parser::load_catalog(&args.data_dir),
        Edition::Commercial => catalog::commercial_catalog().clone(),
    };

    let layout = compute_layout(
        &catalog,
        args.edition.diagram_title(),
        &config.theme,
        &config.layout,
    );
    let logo = load_logo(&args.data_dir.join("logo.png"));
    let svg = render_svg(&layout, &config.theme, logo.as_ref());

    if matches!(args.format, OutputFormat::Svg | OutputFormat::Both) {
        let path = args.out_dir.join(args.edition.svg_file_name());
        write_output_svg(&svg, Some(&path))?;
        info!("SVG written to {}", path.display());
    }

    if matches!(args.format, OutputFormat::Png | OutputFormat::Both) {
        #[cfg(feature = "png")]
        {
            let path = args.out_dir.join(args.edition.png_file_name());
            crate::render::write_output_png(&svg, &path, &config.render, &config.theme)?;
            info!("PNG written to {}", path.display());
        }
        #[cfg(not(feature = "png"))]
        return Err(anyhow::anyhow!(
            "PNG output requested but the binary was built without the 'png' feature"
        ));
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
