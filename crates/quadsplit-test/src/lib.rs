//! quadsplit-test - Regression test framework for the quadsplit workspace
//!
//! Supports three modes, chosen by the `REGTEST_MODE` environment variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use quadsplit_test::RegParams;
//!
//! let mut rp = RegParams::new("quadtree");
//! rp.compare_values(16.0, leaves as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use quadsplit_core::PixelBuffer;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // quadsplit-test is at crates/quadsplit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a synthetic RGB test image with smooth gradients, flat patches and
/// a hard-edged disc, so that quadtree tests see every kind of region.
pub fn synthetic_scene(width: u32, height: u32) -> PixelBuffer {
    let cx = width as f32 * 0.65;
    let cy = height as f32 * 0.4;
    let radius = width.min(height) as f32 * 0.2;
    PixelBuffer::from_fn(width, height, |x, y| {
        let fx = x as f32 / width as f32;
        let fy = y as f32 / height as f32;
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        if dx * dx + dy * dy <= radius * radius {
            [220, 40, 40]
        } else if fx < 0.25 && fy > 0.5 {
            [30, 90, 160]
        } else {
            let r = 128.0 + 60.0 * (fx * std::f32::consts::TAU).sin();
            let g = 128.0 + 40.0 * (fy * 2.0 * std::f32::consts::TAU).cos();
            let b = 64.0 + 120.0 * fx * fy;
            [r as u8, g as u8, b as u8]
        }
    })
}
