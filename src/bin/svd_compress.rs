//! Compress a grayscale version of an image with a truncated SVD.
//!
//! Usage: `svd_compress <input> <output> [rank]`
//!
//! The rank is clamped to the admissible range of the image. Without a rank
//! the default rank is used. Set `RUST_LOG=debug` for details.

use anyhow::{bail, Context};
use svd_image_compression::prelude::*;

/// Require an input path, an output path and an optional rank after the
/// program name. The program name itself may be missing.
fn check_args(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 3 || args.len() > 4 {
        bail!(
            "Usage: {} <input> <output> [rank]",
            args.get(0).map_or("svd_compress", String::as_str)
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    check_args(&args)?;

    let image = load_grayscale(&args[1])
        .with_context(|| format!("Could not read image {}", args[1]))?;
    let dimension = image.dim();

    let rank = match args.get(3) {
        Some(rank) => {
            let requested: usize = rank
                .parse()
                .with_context(|| format!("Invalid rank {}", rank))?;
            let rank = clamp_rank(requested, dimension);
            if rank != requested {
                log::warn!(
                    "Rank {} clamped to {} for a {}x{} image",
                    requested,
                    rank,
                    dimension.0,
                    dimension.1
                );
            }
            rank
        }
        None => default_rank(dimension),
    };

    let compressor = ImageCompressor::new(&image)?;
    let compressed = compressor.compress(CompressionType::RANK(rank))?;

    log::info!(
        "Rank {} of {} keeps {:.2}% of the energy",
        rank,
        compressor.max_rank(),
        100.0 * compressor.energy_retained(rank)?
    );

    save_grayscale(compressed.view(), &args[2])
        .with_context(|| format!("Could not write image {}", args[2]))?;

    println!("Compressed image with {} singular values.", rank);

    Ok(())
}
