use glam::Vec2;

/// Adds a radius-weighted velocity impulse around `(cx, cy)`.
///
/// The raw drag delta becomes a velocity via `delta / dt`. Every cell within
/// Euclidean distance `radius` of the center (inclusive) gains
/// `velocity * strength * (1 - dist / radius)` on top of its existing value;
/// repeated injections in the same frame compound. Cells outside the radius
/// or outside the grid are skipped. A zero radius affects only the center
/// cell at full weight. An out-of-bounds center is a no-op.
#[allow(clippy::too_many_arguments)]
pub fn inject_impulse(
    vel: &mut [Vec2],
    width: usize,
    height: usize,
    cx: usize,
    cy: usize,
    delta: Vec2,
    dt: f32,
    radius: f32,
    strength: f32,
) {
    assert!(dt > 0.0, "force injection requires dt > 0, got {dt}");
    if cx >= width || cy >= height {
        return;
    }

    let velocity = delta / dt;
    let reach = radius.ceil() as i64;

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let px = cx as i64 + dx;
            let py = cy as i64 + dy;
            if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                continue;
            }

            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist > radius {
                continue;
            }

            let weight = if radius > 0.0 { 1.0 - dist / radius } else { 1.0 };
            vel[py as usize * width + px as usize] += velocity * strength * weight;
        }
    }
}
