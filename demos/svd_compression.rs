// Compress a synthetic image at a few ranks and report the error.

use svd_image_compression::prelude::*;

pub fn main() {
    let dimension = (120, 80);

    let mut rng = rand::thread_rng();
    let image = f64::random_intensity_image(dimension, 1E-6, &mut rng).unwrap();

    let compressor = ImageCompressor::new(&image).unwrap();

    for &rank in [1, 5, 20, 80].iter() {
        let compressed = compressor.compress(CompressionType::RANK(rank)).unwrap();
        println!(
            "Rank {:3}: shape {}x{}, error {:.3E}, energy {:.6}",
            rank,
            compressed.nrows(),
            compressed.ncols(),
            compressor.approximation_error(rank).unwrap(),
            compressor.energy_retained(rank).unwrap()
        );
    }

    let adaptive = compressor
        .reconstruct(CompressionType::ADAPTIVE(1E-3))
        .unwrap();
    println!(
        "Adaptive: relative error {:.3E}",
        adaptive.rel_diff(&compressor.normalized()).unwrap()
    );
}
