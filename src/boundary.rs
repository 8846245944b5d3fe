use glam::Vec2;

/// No-slip walls: every cell in row 0, row H-1, column 0 and column W-1 is
/// overwritten with the zero vector.
pub fn no_slip(vel: &mut [Vec2], width: usize, height: usize) {
    for x in 0..width {
        vel[x] = Vec2::ZERO;
        vel[(height - 1) * width + x] = Vec2::ZERO;
    }
    for y in 0..height {
        vel[y * width] = Vec2::ZERO;
        vel[y * width + width - 1] = Vec2::ZERO;
    }
}

/// Zero normal gradient (Neumann): each edge cell copies the row/column at
/// offset 1. Corners take the value written by the second pass.
pub fn zero_gradient(field: &mut [f32], width: usize, height: usize) {
    for x in 0..width {
        field[x] = field[width + x];
        field[(height - 1) * width + x] = field[(height - 2) * width + x];
    }
    for y in 0..height {
        field[y * width] = field[y * width + 1];
        field[y * width + width - 1] = field[y * width + width - 2];
    }
}
