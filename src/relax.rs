use crate::{apply_boundary_as, Field2, FieldKind};

/// Gauss-Seidel sweeps per solve. Fixed, never convergence-checked, so the cost
/// of a tick does not depend on the state of the fluid.
pub const RELAX_ITERATIONS: usize = 20;

/// Approximately solves `c·x[i,j] = x0[i,j] + a·(sum of the four neighbours of x)`
/// over the interior by in-place Gauss-Seidel, reapplying the wall condition for
/// `kind` after every sweep.
pub fn relax(x: &mut Field2, x0: &Field2, a: f32, c: f32, kind: FieldKind) {
    x.assert_same_grid(x0);
    let grid = x.grid();
    let n = grid.n();
    let stride = grid.extent();
    let src = x0.as_slice();
    for _ in 0..RELAX_ITERATIONS {
        let cells = x.as_mut_slice();
        for i in 1..=n {
            for j in 1..=n {
                let idx = grid.idx(i, j);
                let neighbours =
                    cells[idx - 1] + cells[idx + 1] + cells[idx - stride] + cells[idx + stride];
                cells[idx] = (src[idx] + a * neighbours) / c;
            }
        }
        apply_boundary_as(x, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid2;

    fn assert_close(a: f32, b: f32, tol: f32) {
        assert!(
            (a - b).abs() <= tol,
            "expected {a} to be within {tol} of {b}"
        );
    }

    #[test]
    fn zero_coupling_copies_source_interior() {
        let grid = Grid2::new(4).unwrap();
        let x0 = Field2::from_fn(grid, FieldKind::Scalar, |i, j| (i * 3 + j) as f32).unwrap();
        let mut x = Field2::new(grid, FieldKind::Scalar).unwrap();
        relax(&mut x, &x0, 0.0, 1.0, FieldKind::Scalar);
        for (i, j) in grid.interior() {
            assert_eq!(x.get(i, j), x0.get(i, j));
        }
    }

    #[test]
    fn constant_field_is_a_fixed_point_of_diffusion() {
        let grid = Grid2::new(6).unwrap();
        let x0 = Field2::from_fn(grid, FieldKind::Scalar, |_, _| 2.5).unwrap();
        let mut x = x0.clone();
        let a = 0.8;
        relax(&mut x, &x0, a, 1.0 + 4.0 * a, FieldKind::Scalar);
        for (i, j) in grid.interior() {
            assert_close(x.get(i, j), 2.5, 1e-5);
        }
    }

    #[test]
    fn residual_shrinks_after_relaxing() {
        let grid = Grid2::new(8).unwrap();
        let x0 = Field2::from_fn(grid, FieldKind::Scalar, |i, j| {
            if i == 4 && j == 5 {
                1.0
            } else {
                0.0
            }
        })
        .unwrap();
        let a = 0.5;
        let c = 1.0 + 4.0 * a;
        let residual = |x: &Field2| -> f32 {
            grid.interior()
                .map(|(i, j)| {
                    let lhs = c * x.get(i, j)
                        - a * (x.get(i - 1, j) + x.get(i + 1, j) + x.get(i, j - 1) + x.get(i, j + 1));
                    (lhs - x0.get(i, j)).powi(2)
                })
                .sum()
        };
        let mut x = Field2::new(grid, FieldKind::Scalar).unwrap();
        let before = residual(&x);
        relax(&mut x, &x0, a, c, FieldKind::Scalar);
        assert!(residual(&x) < before * 1e-3);
    }

    #[test]
    fn boundary_follows_requested_kind() {
        let grid = Grid2::new(3).unwrap();
        let x0 = Field2::from_fn(grid, FieldKind::VelocityX, |i, _| i as f32).unwrap();
        let mut x = Field2::new(grid, FieldKind::VelocityX).unwrap();
        relax(&mut x, &x0, 0.5, 3.0, FieldKind::VelocityX);
        for k in 1..=3 {
            assert_eq!(x.get(0, k), -x.get(1, k));
            assert_eq!(x.get(4, k), -x.get(3, k));
        }
    }
}
