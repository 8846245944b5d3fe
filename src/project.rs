use glam::Vec2;

use crate::backend::{self, Backend};
use crate::boundary;
use crate::grid::ScalarField;

/// Central-difference divergence over interior cells:
/// `0.5 * (vx(x+1,y) - vx(x-1,y)) + 0.5 * (vy(x,y+1) - vy(x,y-1))`.
///
/// Border cells are never written; they keep whatever the buffer already
/// holds there (zero at allocation, then stale from frame to frame).
pub fn compute_divergence(
    vel: &[Vec2],
    div: &mut [f32],
    width: usize,
    height: usize,
    backend: Backend,
) {
    backend::for_each_row(backend, div, width, |y, row| {
        if y == 0 || y == height - 1 {
            return;
        }
        for x in 1..width - 1 {
            let idx = y * width + x;
            row[x] = 0.5 * (vel[idx + 1].x - vel[idx - 1].x)
                + 0.5 * (vel[idx + width].y - vel[idx - width].y);
        }
    });
}

/// Jacobi relaxation of the discrete Poisson equation `laplacian(p) = div`:
/// `p_new = (p_left + p_right + p_down + p_up - div) / 4`.
///
/// The solve cold-starts from zero pressure each frame. Edge cells copy the
/// read buffer during sweeps so the stencil never sees stale scratch data;
/// the zero-gradient boundary runs once after the full sweep count.
pub fn solve_pressure(
    pressure: &mut ScalarField,
    div: &[f32],
    iterations: usize,
    backend: Backend,
) {
    let width = pressure.width();
    let height = pressure.height();
    pressure.current_mut().fill(0.0);

    for _ in 0..iterations {
        let (read, write) = pressure.split();
        backend::for_each_row(backend, write, width, |y, row| {
            if y == 0 || y == height - 1 {
                row.copy_from_slice(&read[y * width..(y + 1) * width]);
                return;
            }
            for x in 0..width {
                let idx = y * width + x;
                if x == 0 || x == width - 1 {
                    row[x] = read[idx];
                    continue;
                }
                let neighbors =
                    read[idx - 1] + read[idx + 1] + read[idx - width] + read[idx + width];
                row[x] = (neighbors - div[idx]) * 0.25;
            }
        });
        pressure.swap();
    }

    boundary::zero_gradient(pressure.current_mut(), width, height);
}

/// Subtracts the central-difference pressure gradient from interior velocity
/// cells, removing (approximately) the divergent component.
pub fn subtract_pressure_gradient(
    vel: &mut [Vec2],
    pressure: &[f32],
    width: usize,
    height: usize,
    backend: Backend,
) {
    backend::for_each_row(backend, vel, width, |y, row| {
        if y == 0 || y == height - 1 {
            return;
        }
        for x in 1..width - 1 {
            let idx = y * width + x;
            row[x] -= Vec2::new(
                0.5 * (pressure[idx + 1] - pressure[idx - 1]),
                0.5 * (pressure[idx + width] - pressure[idx - width]),
            );
        }
    });
}
