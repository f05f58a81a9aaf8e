extern crate mandelbrot;
extern crate rand;

use mandelbrot::planes::pixel_to_point;
use mandelbrot::{
    escape_iterations, intensity, partition, render, Pixel, PlaneWindow, RenderConfig, Renderer,
};
use rand::Rng;

#[test]
fn partition_covers_random_widths() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let width = rng.gen_range(1, 5000);
        let workers = rng.gen_range(1, 100);
        let segments = partition(width, workers);
        assert_eq!(segments.len(), workers);
        assert_eq!(segments[0].start, 0);
        assert_eq!(segments[workers - 1].end, width);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        if width >= workers {
            assert!(segments.iter().all(|s| s.end > s.start));
        }
    }
}

#[test]
fn every_pixel_holds_its_own_escape_value() {
    let window = PlaneWindow::default();
    let step = 0.0625;
    let raster = render(window, step, 5).unwrap();
    for x in 0..raster.width() {
        for y in 0..raster.height() {
            let pixel = Pixel(x, y);
            let expected = intensity(escape_iterations(pixel_to_point(&window, step, &pixel), 50), 50);
            assert_eq!(raster.get(pixel), Some(expected), "pixel {:?}", pixel);
        }
    }
}

#[test]
fn worker_count_does_not_change_the_image() {
    let window = PlaneWindow::new(-2.0, 1.0, -1.0, 1.0).unwrap();
    let config = |workers| RenderConfig::new(window, 0.03125, 50, workers).unwrap();
    let reference = Renderer::new(config(1)).render().unwrap();
    assert_eq!((reference.width(), reference.height()), (96, 64));
    for &workers in &[2, 8, 37] {
        let raster = Renderer::new(config(workers)).render().unwrap();
        assert_eq!(raster, reference, "{} workers", workers);
    }
}

#[test]
fn more_workers_than_columns() {
    let window = PlaneWindow::new(-0.5, 0.0, -0.5, 0.5).unwrap();
    let few = render(window, 0.125, 1).unwrap();
    let many = render(window, 0.125, 64).unwrap();
    assert_eq!(few.width(), 4);
    assert_eq!(few, many);
}

#[test]
fn interior_is_white() {
    let window = PlaneWindow::new(-0.25, 0.25, -0.25, 0.25).unwrap();
    let raster = render(window, 0.125, 3).unwrap();
    assert!(raster.as_column_major().iter().all(|&v| v == 255));
}
