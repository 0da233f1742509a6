use crate::{apply_boundary_as, relax, Field2, FieldKind};

/// Central-difference divergence of `(u, v)` at interior cell `(i, j)`, scaled
/// by `-0.5 / N` to match the pressure solve's right-hand side.
fn scaled_divergence(u: &Field2, v: &Field2, i: usize, j: usize, n: f32) -> f32 {
    -0.5 * (u.get(i + 1, j) - u.get(i - 1, j) + v.get(i, j + 1) - v.get(i, j - 1)) / n
}

/// Writes the scaled divergence of `(u, v)` into the interior of `out`.
pub fn divergence_into(out: &mut Field2, u: &Field2, v: &Field2) {
    out.assert_same_grid(u);
    out.assert_same_grid(v);
    let n = u.grid().n() as f32;
    out.update_interior(|i, j, _| scaled_divergence(u, v, i, j, n));
}

/// Sum of squared scaled divergence over interior cells.
pub fn divergence_energy(u: &Field2, v: &Field2) -> f32 {
    u.assert_same_grid(v);
    let grid = u.grid();
    let n = grid.n() as f32;
    grid.interior()
        .map(|(i, j)| scaled_divergence(u, v, i, j, n).powi(2))
        .sum()
}

/// Removes most of the divergence from `(u, v)` by solving for a pressure field
/// and subtracting its gradient.
///
/// `pressure` and `div` are scratch space; whatever kind they carry, both are
/// treated as scalars here. The result is only approximately divergence free,
/// bounded by the fixed relaxation count.
pub fn project(u: &mut Field2, v: &mut Field2, pressure: &mut Field2, div: &mut Field2) {
    u.assert_same_grid(v);
    u.assert_same_grid(pressure);
    u.assert_same_grid(div);
    let n = u.grid().n() as f32;

    divergence_into(div, u, v);
    pressure.fill(0.0);
    apply_boundary_as(div, FieldKind::Scalar);
    apply_boundary_as(pressure, FieldKind::Scalar);

    relax(pressure, div, 1.0, 4.0, FieldKind::Scalar);

    let p = &*pressure;
    u.update_interior(|i, j, value| value - 0.5 * n * (p.get(i + 1, j) - p.get(i - 1, j)));
    v.update_interior(|i, j, value| value - 0.5 * n * (p.get(i, j + 1) - p.get(i, j - 1)));
    apply_boundary_as(u, FieldKind::VelocityX);
    apply_boundary_as(v, FieldKind::VelocityY);
}
