use crate::{apply_boundary, Field2};

/// Moves `d0` along `(u, v)` for `dt` into `d` by tracing each interior cell
/// backwards and sampling bilinearly where it came from.
///
/// The backtraced position is clamped to `[0.5, N + 0.5]` on both axes, so any
/// finite `dt` and velocity yields a finite result.
pub fn advect(d: &mut Field2, d0: &Field2, u: &Field2, v: &Field2, dt: f32) {
    d.assert_same_grid(d0);
    d.assert_same_grid(u);
    d.assert_same_grid(v);
    let grid = d.grid();
    let n = grid.n() as f32;
    let lo = 0.5;
    let hi = n + 0.5;
    // dt·u before ·N: a zero velocity then stays 0 even when dt·N overflows
    d.update_interior(|i, j, _| {
        let x = (i as f32 - dt * u.get(i, j) * n).clamp(lo, hi);
        let y = (j as f32 - dt * v.get(i, j) * n).clamp(lo, hi);
        let i0 = x as usize;
        let j0 = y as usize;
        let i1 = i0 + 1;
        let j1 = j0 + 1;
        let s1 = x - i0 as f32;
        let s0 = 1.0 - s1;
        let t1 = y - j0 as f32;
        let t0 = 1.0 - t1;
        s0 * (t0 * d0.get(i0, j0) + t1 * d0.get(i0, j1))
            + s1 * (t0 * d0.get(i1, j0) + t1 * d0.get(i1, j1))
    });
    apply_boundary(d);
}
