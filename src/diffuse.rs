use crate::backend::{self, Backend};
use crate::grid::VectorField;

/// Jacobi relaxation of `(1 + k) * v_new = v0 + (k/4) * sum(4-neighbors)`,
/// approximating viscous diffusion with coefficient `k`.
///
/// The source term `v0` is the field as it entered this call and stays fixed
/// across every sweep. Each sweep reads one buffer, writes the other, then
/// swaps; edge cells copy the read buffer's values, so the boundary state
/// that entered the solve survives all `iterations`.
pub fn diffuse(field: &mut VectorField, k: f32, iterations: usize, backend: Backend) {
    let width = field.width();
    let height = field.height();
    let source = field.snapshot();
    let stencil = k * 0.25;
    let norm = 1.0 / (1.0 + k);

    for _ in 0..iterations {
        let (read, write) = field.split();
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
                row[x] = (source[idx] + neighbors * stencil) * norm;
            }
        });
        field.swap();
    }
}
