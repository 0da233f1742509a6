use std::sync::OnceLock;

const PAR_THRESHOLD_DEFAULT: usize = 262_144;
const PAR_MIN_WORK_PER_THREAD: usize = 4096;

/// Cell count below which field loops stay serial. Set `FLUID_PAR_THRESHOLD`
/// to move it; the value is read once per process.
fn parallel_threshold() -> usize {
    static THRESHOLD: OnceLock<usize> = OnceLock::new();
    *THRESHOLD.get_or_init(|| {
        std::env::var("FLUID_PAR_THRESHOLD")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(PAR_THRESHOLD_DEFAULT)
    })
}

/// Whether a cell-independent loop over `len` cells is worth handing to rayon.
///
/// Used by `Field2::update_interior` (advection, divergence, pressure gradient)
/// and `Field2::add_scaled_in_place` (source injection). Gauss-Seidel relaxation
/// never asks, since its sweeps read cells written earlier in the same sweep.
pub(crate) fn should_parallel(len: usize) -> bool {
    if len < parallel_threshold() {
        return false;
    }
    let threads = rayon::current_num_threads().max(1);
    len / threads >= PAR_MIN_WORK_PER_THREAD
}
