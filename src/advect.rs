use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::backend::{self, Backend};
use crate::grid::VectorField;

/// Keeps clamped trace positions strictly below W-1 so the bilinear
/// neighborhood's far corner stays in range.
const CLAMP_MARGIN: f32 = 1e-3;

/// How the backward trace samples the velocity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sampling {
    /// Trace clamped into the grid, four-corner bilinear filter. Always has
    /// valid samples.
    Bilinear,
    /// Unclamped trace averaged over a `2*reach` square neighborhood of the
    /// landing cell. A trace that leaves the grid entirely finds no samples;
    /// the recovery writes the cell's pre-advection velocity, negated.
    BoxAverage { reach: i64 },
}

/// Semi-Lagrangian advection: each cell traces `(x, y) - v * dt` back
/// through the field, samples there, and scales the result by `damping`.
///
/// Every cell is computed independently from the read buffer and written to
/// the scratch buffer; the swap happens only after the whole sweep.
pub fn advect(field: &mut VectorField, dt: f32, damping: f32, sampling: Sampling, backend: Backend) {
    let width = field.width();
    let height = field.height();
    let (read, write) = field.split();

    backend::for_each_row(backend, write, width, |y, row| {
        for x in 0..width {
            let v = read[y * width + x];
            let pos = Vec2::new(x as f32, y as f32) - v * dt;
            row[x] = match sampling {
                Sampling::Bilinear => bilinear_sample(read, width, height, pos) * damping,
                Sampling::BoxAverage { reach } => {
                    let sampled = box_sample(read, width, height, pos, reach);
                    if sampled.x.is_nan() { -v } else { sampled * damping }
                }
            };
        }
    });

    field.swap();
}

fn bilinear_sample(grid: &[Vec2], width: usize, height: usize, pos: Vec2) -> Vec2 {
    let px = pos.x.clamp(0.0, (width - 1) as f32 - CLAMP_MARGIN);
    let py = pos.y.clamp(0.0, (height - 1) as f32 - CLAMP_MARGIN);

    let x0 = px.floor() as usize;
    let y0 = py.floor() as usize;
    let sx = px - x0 as f32;
    let sy = py - y0 as f32;

    let idx = y0 * width + x0;
    (grid[idx] * (1.0 - sx) + grid[idx + 1] * sx) * (1.0 - sy)
        + (grid[idx + width] * (1.0 - sx) + grid[idx + width + 1] * sx) * sy
}

/// Averages the in-bounds cells of the half-open `[c - reach, c + reach)`
/// square around the landing cell. Cells in row 0 or column 0 never
/// contribute. Returns NaN when no cell contributes.
fn box_sample(grid: &[Vec2], width: usize, height: usize, pos: Vec2, reach: i64) -> Vec2 {
    let cx = pos.x.floor() as i64;
    let cy = pos.y.floor() as i64;

    let mut sum = Vec2::ZERO;
    let mut samples = 0u32;
    for j in (cy - reach)..(cy + reach) {
        for i in (cx - reach)..(cx + reach) {
            if i > 0 && j > 0 && i < width as i64 && j < height as i64 {
                sum += grid[j as usize * width + i as usize];
                samples += 1;
            }
        }
    }

    if samples == 0 {
        Vec2::new(f32::NAN, f32::NAN)
    } else {
        sum / samples as f32
    }
}
