use anyhow::{Context, Result};
use clap::Parser;

use hueforge::cli::Args;
use hueforge::{preview, ExtractOptions};

fn main() -> Result<()> {
    let args = Args::parse();

    let opts = ExtractOptions {
        stride: args.stride,
        bucket_size: args.bucket_size,
        alpha_threshold: args.alpha_threshold,
        ..ExtractOptions::default()
    };

    let palette = hueforge::extract_palette(&args.image, &opts)
        .with_context(|| format!("failed to extract palette from {}", args.image.display()))?;

    if args.preview {
        preview::print_palette(&palette);
    }

    match &args.output {
        Some(path) => {
            palette
                .write_to(path)
                .with_context(|| format!("failed to write theme to {}", path.display()))?;
        }
        None => println!("{}", palette.to_json(args.pretty)?),
    }

    Ok(())
}
