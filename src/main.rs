use anyhow::Context;
use clap::{Parser, Subcommand};
use gif_quant::{Ditherer, EncodeOptions, PaletteStrategy};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgedit::codec::decode_image;
use imgedit::models::AppConfig;
use imgedit::services::{
    convert_to_gif, convert_to_png, default_output_path, read_image_file, write_image_file,
    PaletteReport,
};

#[derive(Parser)]
#[command(name = "imgedit")]
#[command(about = "Convert images to GIF or PNG")]
struct Cli {
    /// YAML config file (defaults to $IMGEDIT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to GIF
    Gif {
        /// Input PNG or GIF file
        input: PathBuf,

        /// Output file path (default: <name>_imgedit.gif next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        encode: EncodeArgs,
    },
    /// Convert an image to PNG
    Png {
        /// Input PNG or GIF file
        input: PathBuf,

        /// Output file path (default: <name>_imgedit.png next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the palette the GIF encoder would build
    Palette {
        /// Input PNG or GIF file
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        encode: EncodeArgs,
    },
}

/// GIF encoder flags, overriding the config file
#[derive(clap::Args)]
struct EncodeArgs {
    /// Palette size, 1-256 (anything else means 256)
    #[arg(short, long)]
    colors: Option<usize>,

    /// Ditherer: floyd-steinberg, jarvis-judice-ninke, sierra, atkinson, none
    #[arg(short, long)]
    dither: Option<Ditherer>,

    /// Palette strategy: frequency, plan9
    #[arg(short, long)]
    palette: Option<PaletteStrategy>,
}

impl EncodeArgs {
    fn apply(&self, mut options: EncodeOptions) -> EncodeOptions {
        if let Some(colors) = self.colors {
            options = options.num_colors(colors);
        }
        if let Some(ditherer) = self.dither {
            options = options.ditherer(ditherer);
        }
        if let Some(strategy) = self.palette {
            options = options.palette_strategy(strategy);
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("IMGEDIT_CONFIG").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Commands::Gif {
            input,
            output,
            encode,
        } => {
            let options = encode.apply(config.encode_options()?);
            run_gif_command(&input, output, &options)
        }
        Commands::Png { input, output } => run_png_command(&input, output),
        Commands::Palette {
            input,
            json,
            encode,
        } => {
            let options = encode.apply(config.encode_options()?);
            run_palette_command(&input, json, &options)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "imgedit=debug,gif_quant=debug"
    } else {
        "imgedit=warn,gif_quant=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn read_input(input: &Path) -> anyhow::Result<Vec<u8>> {
    read_image_file(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    write_image_file(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("save convert file: {}", path.display());
    Ok(())
}

/// Encode an image file as GIF
fn run_gif_command(
    input: &Path,
    output: Option<PathBuf>,
    options: &EncodeOptions,
) -> anyhow::Result<()> {
    let bytes = read_input(input)?;
    let gif = convert_to_gif(&bytes, options)
        .with_context(|| format!("Failed to convert {} to GIF", input.display()))?;

    let output = output.unwrap_or_else(|| default_output_path(input, "gif"));
    write_output(&output, &gif)
}

/// Encode an image file as PNG
fn run_png_command(input: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let bytes = read_input(input)?;
    let png = convert_to_png(&bytes)
        .with_context(|| format!("Failed to convert {} to PNG", input.display()))?;

    let output = output.unwrap_or_else(|| default_output_path(input, "png"));
    write_output(&output, &png)
}

/// Print the palette report for an image file
fn run_palette_command(input: &Path, json: bool, options: &EncodeOptions) -> anyhow::Result<()> {
    let bytes = read_input(input)?;
    let (source, _) =
        decode_image(&bytes).with_context(|| format!("Failed to decode {}", input.display()))?;
    let report = PaletteReport::build(&source, options)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}
