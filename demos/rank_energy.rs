// Plot the reconstruction error of a synthetic image against the rank.

use plotters::prelude::*;
use svd_image_compression::prelude::*;

pub fn main() {
    let dimension = (200, 150);

    let mut rng = rand::thread_rng();
    let image = f64::random_intensity_image(dimension, 1E-8, &mut rng).unwrap();
    let compressor = ImageCompressor::new(&image).unwrap();

    let norm = compressor
        .normalized()
        .diff_fro(&ndarray::Array2::<f64>::zeros(dimension))
        .unwrap();

    let res: Vec<(usize, f64)> = (1..compressor.max_rank())
        .map(|rank| {
            (
                rank,
                (compressor.approximation_error(rank).unwrap() / norm).max(1E-18),
            )
        })
        .collect();

    let energy: Vec<(usize, f64)> = (1..compressor.max_rank())
        .map(|rank| (rank, (1.0 - compressor.energy_retained(rank).unwrap()).max(1E-18)))
        .collect();

    let root = BitMapBackend::new("rank_energy.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(20)
        .y_label_area_size(50)
        .build_cartesian_2d(1..compressor.max_rank(), (1E-18..1.0).log_scale())
        .unwrap();

    chart
        .configure_mesh()
        .x_labels(10)
        .y_labels(10)
        .y_label_formatter(&|item| format!("{:.1E}", item))
        .y_desc("Relative Error")
        .draw()
        .unwrap();
    chart
        .draw_series(LineSeries::new(res, &BLACK))
        .unwrap()
        .label("relative Frobenius error")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .draw_series(LineSeries::new(energy, &RED))
        .unwrap()
        .label("discarded energy")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart.configure_series_labels().draw().unwrap();

    println!("Rank: {}", compressor.max_rank());
}
