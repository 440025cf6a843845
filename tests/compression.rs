use float_eq::assert_float_eq;
use ndarray::{array, s, Array2};
use svd_image_compression::prelude::*;

fn flat(mat: &Array2<f64>) -> Vec<f64> {
    mat.iter().copied().collect()
}

fn bright_square() -> Array2<f64> {
    array![
        [10., 10., 10., 10.],
        [10., 200., 200., 10.],
        [10., 200., 200., 10.],
        [10., 10., 10., 10.]
    ]
}

#[test]
fn test_shape_preservation() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = rand::thread_rng();
    for &dimension in [(12, 7), (7, 12), (9, 9)].iter() {
        let image = f64::random_intensity_image(dimension, 1E-2, &mut rng).unwrap();
        for rank in rank_bounds(dimension) {
            let compressed = compress(&image, rank).unwrap();
            assert_eq!(compressed.dim(), dimension);
        }
    }
}

#[test]
fn test_range_bound() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = rand::thread_rng();
    let image = f64::random_intensity_image((32, 24), 1E-3, &mut rng).unwrap();

    for &rank in [1, 2, 10, 24].iter() {
        let compressed = compress(&image, rank).unwrap();

        assert!(compressed.iter().all(|&item| (0.0..=1.0).contains(&item)));
        let min = compressed.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = compressed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_float_eq!(min, 0.0, abs <= 1E-15);
        assert_float_eq!(max, 1.0, abs <= 1E-15);
    }
}

#[test]
fn test_rank_energy_monotonicity() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = rand::thread_rng();
    let image = f64::random_intensity_image((20, 15), 1E-5, &mut rng).unwrap();

    let errors: Vec<f64> = rank_bounds(image.dim())
        .map(|rank| image.approximation_error(rank).unwrap())
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] <= pair[0] + 1E-12, "{} > {}", pair[1], pair[0]);
    }
}

#[test]
fn test_full_rank_convergence() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = rand::thread_rng();
    let image = f64::random_intensity_image((18, 11), 1E-2, &mut rng).unwrap();
    let normalized = normalize_intensity(&image).unwrap();

    let approximation = image
        .low_rank_approximation(CompressionType::RANK(max_rank(image.dim())))
        .unwrap();

    assert_float_eq!(flat(&approximation), flat(&normalized), abs_all <= 1E-10);
}

#[test]
fn test_determinism() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = rand::thread_rng();
    let image = f64::random_intensity_image((25, 25), 1E-3, &mut rng).unwrap();

    let first = compress(&image, 4).unwrap();
    let second = compress(&image, 4).unwrap();

    assert_float_eq!(flat(&first), flat(&second), abs_all <= 1E-12);
}

#[test]
fn test_bright_square_rank_one() {
    let _ = env_logger::builder().is_test(true).try_init();

    let compressed = compress(&bright_square(), 1).unwrap();
    assert_eq!(compressed.dim(), (4, 4));

    let center = compressed.slice(s![1..3, 1..3]);
    let center_min = center.iter().cloned().fold(f64::INFINITY, f64::min);

    let border_max = compressed
        .indexed_iter()
        .filter(|((row, col), _)| !(1..3).contains(row) || !(1..3).contains(col))
        .map(|(_, &item)| item)
        .fold(f64::NEG_INFINITY, f64::max);

    assert!(center_min > border_max);
    assert_float_eq!(center_min, 1.0, abs <= 1E-12);
}

#[test]
fn test_constant_image_is_degenerate() {
    let _ = env_logger::builder().is_test(true).try_init();

    let image = Array2::<f64>::from_elem((4, 4), 128.0);
    for rank in rank_bounds(image.dim()) {
        assert!(matches!(
            compress(&image, rank),
            Err(ImageCompressionError::DegenerateReconstruction)
        ));
    }

    let image = Array2::<f64>::zeros((3, 5));
    assert!(matches!(
        compress(&image, 2),
        Err(ImageCompressionError::DegenerateReconstruction)
    ));
}

#[test]
fn test_invalid_input() {
    let _ = env_logger::builder().is_test(true).try_init();

    let image = Array2::<f64>::zeros((0, 3));
    assert!(matches!(
        compress(&image, 1),
        Err(ImageCompressionError::InvalidInput(_))
    ));

    let mut image = bright_square();
    image[[2, 1]] = f64::NAN;
    assert!(matches!(
        compress(&image, 1),
        Err(ImageCompressionError::InvalidInput(_))
    ));
}

#[test]
fn test_out_of_range_rank() {
    let _ = env_logger::builder().is_test(true).try_init();

    let image = bright_square();
    assert!(matches!(
        compress(&image, 0),
        Err(ImageCompressionError::OutOfRangeRank { rank: 0, max_rank: 4 })
    ));
    assert!(matches!(
        compress(&image, 5),
        Err(ImageCompressionError::OutOfRangeRank { rank: 5, max_rank: 4 })
    ));

    // Clamping first gives the slider behavior.
    let compressed = compress(&image, clamp_rank(5, image.dim())).unwrap();
    assert_eq!(compressed.dim(), (4, 4));
}

#[test]
fn test_single_precision() {
    let _ = env_logger::builder().is_test(true).try_init();

    let image = bright_square().mapv(|item| item as f32);
    let compressed = compress(&image, 1).unwrap();

    assert!(compressed[[1, 1]] > compressed[[0, 1]]);
    assert!(compressed.iter().all(|&item| (0.0..=1.0).contains(&item)));
}

#[test]
fn test_encode_compressed_image() {
    let _ = env_logger::builder().is_test(true).try_init();

    let compressed = compress(&bright_square(), 1).unwrap();

    let bytes = encode_png(compressed.view()).unwrap();
    let decoded = decode_grayscale(&bytes).unwrap();

    assert_eq!(decoded.dim(), (4, 4));
    assert_eq!(decoded[[1, 1]], 255.0);
    assert!(decoded[[0, 0]] < decoded[[1, 1]]);
}
