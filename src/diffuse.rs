use crate::{relax, Field2};

/// Coupling past which `x0` no longer shows in an `f32` relaxation step.
const MAX_COUPLING: f32 = 1e20;

/// Implicit diffusion of `x0` into `x` at `rate` over `dt`, walls chosen by `x`'s kind.
pub fn diffuse(x: &mut Field2, x0: &Field2, rate: f32, dt: f32) {
    let n = x.grid().n() as f32;
    let a = (dt * rate * n * n).min(MAX_COUPLING);
    let kind = x.kind();
    relax(x, x0, a, 1.0 + 4.0 * a, kind);
}
