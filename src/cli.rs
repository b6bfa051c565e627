use std::path::PathBuf;

use clap::Parser;

/// Generate light/dark UI theme palettes from logo images.
#[derive(Parser, Debug)]
#[command(name = "hueforge", version, about)]
pub struct Args {
    /// Path to the logo image
    pub image: PathBuf,

    /// Write the theme JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print colored swatches of the palette to the terminal
    #[arg(long)]
    pub preview: bool,

    /// Visit every Nth pixel of the decoded image
    #[arg(long, default_value_t = 4)]
    pub stride: usize,

    /// Quantization bucket size per RGB channel
    #[arg(long, default_value_t = 8)]
    pub bucket_size: u8,

    /// Skip pixels whose alpha is below this value
    #[arg(long, default_value_t = 128)]
    pub alpha_threshold: u8,
}
