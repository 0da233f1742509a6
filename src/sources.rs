use crate::{Grid2, Sources};

/// Writes `amount` into the density source at `(i, j)` and its `+j` and `+i`
/// neighbours, dropping any that fall outside the grid.
pub fn splat_density(sources: &mut Sources<'_>, i: usize, j: usize, amount: f32) {
    let grid = sources.density.grid();
    for (ci, cj) in [(i, j), (i, j + 1), (i + 1, j)] {
        if ci < grid.extent() && cj < grid.extent() {
            sources.density.set(ci, cj, amount);
        }
    }
}

/// Writes a velocity impulse into the force buffers at `(i, j)`, ignoring cells
/// outside the grid.
pub fn push_velocity(sources: &mut Sources<'_>, i: usize, j: usize, fx: f32, fy: f32) {
    let extent = sources.u.grid().extent();
    if i >= extent || j >= extent {
        return;
    }
    sources.u.set(i, j, fx);
    sources.v.set(i, j, fy);
}

/// Maps a window position (origin top left, `y` down) to the interior cell under
/// it, `None` when the position is off the grid.
pub fn cell_at(grid: Grid2, x: f32, y: f32, width: f32, height: f32) -> Option<(usize, usize)> {
    if !(width > 0.0 && height > 0.0 && x.is_finite() && y.is_finite()) {
        return None;
    }
    let n = grid.n() as f32;
    let ci = (x / width * n + 1.0).floor();
    let cj = ((height - y) / height * n + 1.0).floor();
    if ci < 1.0 || cj < 1.0 || ci > n || cj > n {
        return None;
    }
    Some((ci as usize, cj as usize))
}

/// One pointer reading in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    /// Drag pushes the fluid along the pointer's motion.
    pub push: bool,
    /// Pour drops density under the pointer.
    pub pour: bool,
}

/// Turns a stream of pointer samples into per-tick sources.
#[derive(Clone, Debug)]
pub struct DragInjector {
    force: f32,
    source: f32,
    window: (f32, f32),
    last: Option<(f32, f32)>,
}

impl DragInjector {
    pub fn new(force: f32, source: f32, width: f32, height: f32) -> Self {
        Self {
            force,
            source,
            window: (width, height),
            last: None,
        }
    }

    /// Writes this sample's impulses into `sources`. Returns the cell touched, if any.
    pub fn apply(&mut self, sources: &mut Sources<'_>, sample: PointerSample) -> Option<(usize, usize)> {
        if !sample.push && !sample.pour {
            self.last = None;
            return None;
        }
        let grid = sources.density.grid();
        let (width, height) = self.window;
        let (i, j) = cell_at(grid, sample.x, sample.y, width, height)?;
        if sample.push {
            let (lx, ly) = self.last.unwrap_or((sample.x, sample.y));
            // window y grows downward, grid j grows upward
            push_velocity(
                sources,
                i,
                j,
                self.force * (sample.x - lx),
                self.force * (ly - sample.y),
            );
        }
        if sample.pour {
            splat_density(sources, i, j, self.source);
        }
        self.last = Some((sample.x, sample.y));
        Some((i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FluidState;

    #[test]
    fn splat_writes_three_cells() {
        let mut state = FluidState::new(4).unwrap();
        splat_density(&mut state.sources_mut(), 2, 3, 5.0);
        let mut sources = state.sources_mut();
        assert_eq!(sources.density.get(2, 3), 5.0);
        assert_eq!(sources.density.get(2, 4), 5.0);
        assert_eq!(sources.density.get(3, 3), 5.0);
        assert_eq!(sources.density.interior_sum(), 15.0);

        // at the far corner the neighbours land in the ghost ring, not out of bounds
        splat_density(&mut sources, 5, 5, 1.0);
        assert_eq!(sources.density.get(5, 5), 1.0);
    }

    #[test]
    fn push_outside_the_grid_is_ignored() {
        let mut state = FluidState::new(4).unwrap();
        let mut sources = state.sources_mut();
        push_velocity(&mut sources, 6, 2, 1.0, 1.0);
        push_velocity(&mut sources, 2, 100, 1.0, 1.0);
        assert!(sources.u.is_zero());
        assert!(sources.v.is_zero());

        push_velocity(&mut sources, 5, 5, 2.0, -3.0);
        assert_eq!(sources.u.get(5, 5), 2.0);
        assert_eq!(sources.v.get(5, 5), -3.0);
    }

    #[test]
    fn cell_at_maps_window_corners() {
        let grid = Grid2::new(10).unwrap();
        assert_eq!(cell_at(grid, 0.0, 599.0, 800.0, 600.0), Some((1, 1)));
        assert_eq!(cell_at(grid, 799.0, 1.0, 800.0, 600.0), Some((10, 10)));
        assert_eq!(cell_at(grid, 400.0, 300.0, 800.0, 600.0), Some((6, 6)));
        assert_eq!(cell_at(grid, 800.0, 300.0, 800.0, 600.0), None);
        assert_eq!(cell_at(grid, -1.0, 300.0, 800.0, 600.0), None);
        assert_eq!(cell_at(grid, 10.0, 10.0, 0.0, 600.0), None);
    }

    #[test]
    fn drag_pushes_along_motion() {
        let mut state = FluidState::new(10).unwrap();
        let mut injector = DragInjector::new(10.0, 50.0, 100.0, 100.0);
        let first = PointerSample {
            x: 50.0,
            y: 50.0,
            push: true,
            pour: false,
        };
        let cell = injector.apply(&mut state.sources_mut(), first).unwrap();
        assert_eq!(state.sources_mut().u.get(cell.0, cell.1), 0.0);

        let second = PointerSample {
            x: 52.0,
            y: 49.0,
            ..first
        };
        let cell = injector.apply(&mut state.sources_mut(), second).unwrap();
        let sources = state.sources_mut();
        assert_eq!(sources.u.get(cell.0, cell.1), 20.0);
        assert_eq!(sources.v.get(cell.0, cell.1), 10.0);
        assert!(sources.density.is_zero());
    }

    #[test]
    fn pour_drops_density_and_release_resets() {
        let mut state = FluidState::new(10).unwrap();
        let mut injector = DragInjector::new(10.0, 50.0, 100.0, 100.0);
        let pour = PointerSample {
            x: 25.0,
            y: 75.0,
            push: false,
            pour: true,
        };
        let (i, j) = injector.apply(&mut state.sources_mut(), pour).unwrap();
        assert_eq!(state.density().as_slice().len(), 144);
        assert_eq!(state.sources_mut().density.get(i, j), 50.0);

        let release = PointerSample {
            push: false,
            pour: false,
            ..pour
        };
        assert_eq!(injector.apply(&mut state.sources_mut(), release), None);
    }
}
