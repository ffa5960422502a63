use clap::{Args, Parser, Subcommand};
use mosaic_core::CropMode;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brickmosaic::assets::{AssetCategory, AssetLoader, AssetSource};
use brickmosaic::models::{load_palette, AppConfig, CropSetting};
use brickmosaic::services::MosaicService;

#[derive(Parser)]
#[command(name = "brickmosaic")]
#[command(about = "Turn photos into brick mosaics built from a fixed color catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mosaic from an image and render it to PNG
    Generate(GenerateArgs),
    /// List the color catalog
    Palette {
        /// Palette file (default: config.yaml's palette, or the built-in catalog)
        #[arg(long)]
        palette: Option<PathBuf>,

        /// Config file (default: CONFIG_FILE, or the built-in config)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Extract embedded defaults to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract palette.yaml
        #[arg(long)]
        palette: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Source image (PNG, JPEG, BMP or GIF)
    input: PathBuf,

    /// Output PNG file path
    #[arg(short, long)]
    output: PathBuf,

    /// Mosaic width in bricks
    #[arg(long)]
    width: Option<u32>,

    /// Mosaic height in bricks
    #[arg(long)]
    height: Option<u32>,

    /// Square mosaic of N x N bricks
    #[arg(long, conflicts_with_all = ["width", "height"])]
    size: Option<u32>,

    /// Crop strategy: "aspect" or "square"
    #[arg(long)]
    crop: Option<CropMode>,

    /// Disable error diffusion
    #[arg(long)]
    no_dither: bool,

    /// Disable the hue-family bonus
    #[arg(long)]
    no_hue_bonus: bool,

    /// Match near-white pixels like any other pixel
    #[arg(long)]
    no_background: bool,

    /// Pixels per brick in the PNG
    #[arg(long)]
    cell_size: Option<u32>,

    /// Grid line color between bricks (e.g. "#303030")
    #[arg(long)]
    grid_line: Option<String>,

    /// Skip oxipng re-compression
    #[arg(long)]
    no_optimize: bool,

    /// Write the color usage histogram as JSON
    #[arg(long)]
    histogram: Option<PathBuf>,

    /// Palette file (overrides config.yaml)
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Config file (default: CONFIG_FILE, or the built-in config)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Command-line flags win over config.yaml
    fn apply(&self, config: &mut AppConfig) {
        let generation = &mut config.generation;
        if let Some(size) = self.size {
            generation.width = size;
            generation.height = size;
        }
        if let Some(width) = self.width {
            generation.width = width;
        }
        if let Some(height) = self.height {
            generation.height = height;
        }
        if let Some(crop) = self.crop {
            generation.crop = match crop {
                CropMode::Aspect => CropSetting::Aspect,
                CropMode::Square => CropSetting::Square,
            };
        }
        if self.no_dither {
            generation.dither = false;
        }
        if self.no_hue_bonus {
            generation.hue_bonus = false;
        }
        if self.no_background {
            generation.preserve_background = false;
        }

        let render = &mut config.render;
        if let Some(cell_size) = self.cell_size {
            render.cell_size = cell_size;
        }
        if let Some(ref grid_line) = self.grid_line {
            render.grid_line = Some(grid_line.clone());
        }
        if self.no_optimize {
            render.optimize = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => run_generate_command(args),
        Some(Commands::Palette { palette, config }) => run_palette_command(palette, config),
        Some(Commands::Init {
            config,
            palette,
            all,
            force,
            list,
        }) => run_init_command(config, palette, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Logging for CLI commands: no timestamps, RUST_LOG overrides the default
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brickmosaic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name).map(PathBuf::from)
}

/// Load config, then pick the palette: flag, then PALETTE_FILE, then config.yaml
fn load_settings(
    config_flag: Option<PathBuf>,
    palette_flag: Option<PathBuf>,
) -> anyhow::Result<(AppConfig, AssetLoader)> {
    let config_file = config_flag.or_else(|| env_path("CONFIG_FILE"));
    let loader = AssetLoader::new(config_file.clone(), None);
    let config = AppConfig::load_from_assets(&loader)?;

    let from_config = config
        .palette
        .as_deref()
        .map(|p| relative_to_config(config_file.as_deref(), p));
    let palette_file = palette_flag
        .or_else(|| env_path("PALETTE_FILE"))
        .or(from_config);

    Ok((config, loader.with_palette_file(palette_file)))
}

/// A palette path in an external config file is relative to that file
fn relative_to_config(config_file: Option<&Path>, palette: &Path) -> PathBuf {
    match config_file.and_then(Path::parent) {
        Some(dir) if palette.is_relative() => dir.join(palette),
        _ => palette.to_path_buf(),
    }
}

/// Generate a mosaic and write the PNG (and optionally the histogram)
fn run_generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    init_tracing();

    let (mut config, loader) = load_settings(args.config.clone(), args.palette.clone())?;
    args.apply(&mut config);
    config.validate()?;

    let palette = load_palette(&loader)?;
    let service = MosaicService::from_config(&config, palette)?;

    let width = config.generation.width;
    let height = config.generation.height;
    let result = service.generate_file(&args.input, width, height)?;

    std::fs::write(&args.output, &result.png_bytes)?;

    println!(
        "Generated {width}x{height} mosaic: {} ({} bytes)",
        args.output.display(),
        result.png_bytes.len()
    );
    println!("Fingerprint: {}", result.fingerprint);
    println!(
        "Bricks: {} ({} background), {} colors",
        result.histogram.total(),
        result.histogram.background(),
        result.histogram.len()
    );
    println!();
    for usage in result.histogram.by_count() {
        println!(
            "  {:>6}  {}  {}",
            usage.count,
            usage.rgb.to_hex(),
            usage.name
        );
    }

    if let Some(ref path) = args.histogram {
        result.report().write_to(path)?;
        println!("\nHistogram written to {}", path.display());
    }

    Ok(())
}

/// List catalog entries
fn run_palette_command(palette: Option<PathBuf>, config: Option<PathBuf>) -> anyhow::Result<()> {
    init_tracing();

    let (_, loader) = load_settings(config, palette)?;
    let catalog = load_palette(&loader)?;

    println!("Palette: {} ({} colors)\n", loader.palette_source(), catalog.len());
    for (index, entry) in catalog.iter().enumerate() {
        println!(
            "  {index:>3}  {}  {:<8} {}",
            entry.rgb().to_hex(),
            entry.family().as_str(),
            entry.name()
        );
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    config: bool,
    palette: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || config {
        categories.push(AssetCategory::Config);
    }
    if all || palette {
        categories.push(AssetCategory::Palette);
    }

    if categories.is_empty() {
        anyhow::bail!(
            "No assets specified. Use --all, --config or --palette \
             (run 'brickmosaic init --list' to see embedded assets)"
        );
    }

    let loader = AssetLoader::new(env_path("CONFIG_FILE"), env_path("PALETTE_FILE"));
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = env_path("CONFIG_FILE");
    let palette_file = env_path("PALETTE_FILE");

    println!("Brickmosaic v{VERSION}");
    println!("Photos to brick mosaics from a fixed color catalog\n");

    println!("Environment Variables:");
    for (name, value) in [("CONFIG_FILE ", &config_file), ("PALETTE_FILE", &palette_file)] {
        println!(
            "  {name} = {}",
            value
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        );
    }

    println!("\nAsset Sources:");
    let describe = |path: &Option<PathBuf>| match path {
        Some(p) if p.exists() => AssetSource::File(p.clone()).to_string(),
        Some(p) => format!("{} (file not found)", p.display()),
        None => AssetSource::Embedded.to_string(),
    };
    println!("  Config:  {}", describe(&config_file));
    println!("  Palette: {}", describe(&palette_file));

    println!("\nCommands:");
    println!("  brickmosaic generate   Generate a mosaic PNG from an image");
    println!("  brickmosaic palette    List the color catalog");
    println!("  brickmosaic init       Extract embedded config and palette");
    println!("\nRun 'brickmosaic --help' for more details.");
}
