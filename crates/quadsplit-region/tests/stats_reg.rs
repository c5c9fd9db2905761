//! Region statistics regression test
//!
//! Checks the integral-image statistics against direct scans on a synthetic
//! scene, and the statistics of known patterns.
//!
//! Run with:
//! ```
//! cargo test -p quadsplit-region --test stats_reg
//! ```

use quadsplit_core::{PixelBuffer, Rect};
use quadsplit_region::{
    IntegralImage, RegionStats, SquaredIntegralImage, average_color, channel_variance,
    mean_variance,
};
use quadsplit_test::{RegParams, synthetic_scene};

#[test]
fn stats_integral_matches_scan() {
    let mut rp = RegParams::new("stats_integral");

    let input = synthetic_scene(71, 45);
    let stats = RegionStats::new(&input);
    rp.compare_values(71.0, stats.bounds().w as f64, 0.0);
    rp.compare_values(45.0, stats.bounds().h as f64, 0.0);

    // Walk every quadtree region of the buffer
    let mut pending = vec![input.bounds()];
    let mut visited = 0;
    while let Some(rect) = pending.pop() {
        let scan_avg = average_color(&input, rect).unwrap();
        let fast_avg = stats.average_color(rect).unwrap();
        for c in 0..3 {
            rp.compare_values(scan_avg[c] as f64, fast_avg[c] as f64, 0.0);
        }
        let scan_var = mean_variance(&input, rect).unwrap();
        let fast_var = stats.mean_variance(rect).unwrap();
        rp.compare_values(scan_var, fast_var, 0.0);
        visited += 1;
        if let Some(quads) = rect.split_quadrants() {
            pending.extend(quads);
        }
    }
    eprintln!("  checked {} regions", visited);

    // Table totals match the raw data
    let ii = IntegralImage::from_buffer(&input);
    let sq = SquaredIntegralImage::from_buffer(&input);
    let mut sum = [0u64; 3];
    let mut sum_sq = [0u64; 3];
    for cell in input.data().chunks_exact(3) {
        for c in 0..3 {
            sum[c] += cell[c] as u64;
            sum_sq[c] += cell[c] as u64 * cell[c] as u64;
        }
    }
    rp.compare_values(1.0, if ii.get(71, 45) == Some(sum) { 1.0 } else { 0.0 }, 0.0);
    let total_sq = sq.sum_rect(input.bounds()).unwrap();
    rp.compare_values(1.0, if total_sq == sum_sq { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "stats integral test failed");
}

#[test]
fn stats_known_patterns() {
    let mut rp = RegParams::new("stats_patterns");

    // Vertical stripes of 0 and 200 in the red channel only
    let stripes = PixelBuffer::from_fn(8, 4, |x, _| if x % 2 == 0 { [0, 50, 50] } else { [200, 50, 50] });
    let avg = average_color(&stripes, stripes.bounds()).unwrap();
    rp.compare_values(100.0, avg[0] as f64, 0.0);
    rp.compare_values(50.0, avg[1] as f64, 0.0);
    let var = channel_variance(&stripes, stripes.bounds()).unwrap();
    rp.compare_values(10000.0, var[0], 1e-9);
    rp.compare_values(0.0, var[1], 0.0);
    rp.compare_values(0.0, var[2], 0.0);
    rp.compare_values(10000.0 / 3.0, mean_variance(&stripes, stripes.bounds()).unwrap(), 1e-9);

    // A single column holds only one stripe value
    let column = Rect::new(3, 0, 1, 4);
    rp.compare_values(0.0, mean_variance(&stripes, column).unwrap(), 0.0);

    // Truncation: 0, 1 and 1 average to 0.67, stored as 0
    let mut tiny = PixelBuffer::new(3, 1);
    tiny.set_rgb(1, 0, [1, 1, 1]).unwrap();
    tiny.set_rgb(2, 0, [1, 1, 1]).unwrap();
    let avg = RegionStats::new(&tiny).average_color(tiny.bounds()).unwrap();
    rp.compare_values(0.0, avg[0] as f64, 0.0);

    assert!(rp.cleanup(), "stats known patterns test failed");
}
