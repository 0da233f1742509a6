use crate::parallel::should_parallel;
use crate::{FieldKind, FluidError, Grid2};
use rayon::prelude::*;

/// One `(N + 2)²` buffer of a scalar quantity or of one velocity component.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2 {
    grid: Grid2,
    kind: FieldKind,
    data: Vec<f32>,
}

impl Field2 {
    /// Zero-filled field. Fails instead of aborting when the buffer cannot be reserved.
    pub fn new(grid: Grid2, kind: FieldKind) -> Result<Self, FluidError> {
        let cells = grid.size();
        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| FluidError::Allocation { cells })?;
        data.resize(cells, 0.0);
        Ok(Self { grid, kind, data })
    }

    pub fn from_fn(
        grid: Grid2,
        kind: FieldKind,
        f: impl Fn(usize, usize) -> f32,
    ) -> Result<Self, FluidError> {
        let mut field = Self::new(grid, kind)?;
        let extent = grid.extent();
        for (idx, value) in field.data.iter_mut().enumerate() {
            *value = f(idx % extent, idx / extent);
        }
        Ok(field)
    }

    pub fn grid(&self) -> Grid2 {
        self.grid
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[self.grid.idx(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        let idx = self.grid.idx(i, j);
        self.data[idx] = value;
    }

    pub fn add(&mut self, i: usize, j: usize, value: f32) {
        let idx = self.grid.idx(i, j);
        self.data[idx] += value;
    }

    /// Value at linear index `i + (N + 2)·j`.
    pub fn at(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Rewrites every interior cell from `f(i, j, old)`, leaving the ghost ring alone.
    ///
    /// `f` must not depend on other cells of `self`; rows may run in parallel.
    pub fn update_interior(&mut self, f: impl Fn(usize, usize, f32) -> f32 + Sync) {
        let n = self.grid.n();
        let extent = self.grid.extent();
        let update_row = |(j, row): (usize, &mut [f32])| {
            if j == 0 || j > n {
                return;
            }
            for (i, value) in row.iter_mut().enumerate().take(n + 1).skip(1) {
                *value = f(i, j, *value);
            }
        };
        if should_parallel(self.data.len()) {
            self.data
                .par_chunks_mut(extent)
                .enumerate()
                .for_each(update_row);
        } else {
            self.data.chunks_mut(extent).enumerate().for_each(update_row);
        }
    }

    /// `self += scale * other` over the whole buffer, ghost cells included.
    pub fn add_scaled_in_place(&mut self, other: &Self, scale: f32) {
        self.assert_same_grid(other);
        if should_parallel(self.data.len()) {
            self.data
                .par_iter_mut()
                .zip(other.data.par_iter())
                .for_each(|(value, other_value)| *value += other_value * scale);
        } else {
            for (value, other_value) in self.data.iter_mut().zip(other.data.iter()) {
                *value += other_value * scale;
            }
        }
    }

    pub fn interior_sum(&self) -> f32 {
        self.grid.interior().map(|(i, j)| self.get(i, j)).sum()
    }

    pub fn max_abs(&self) -> f32 {
        self.data.iter().fold(0.0, |acc, value| acc.max(value.abs()))
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|value| value.is_finite())
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|value| *value == 0.0)
    }

    pub(crate) fn assert_same_grid(&self, other: &Self) {
        assert_eq!(self.grid, other.grid, "field grid mismatch");
    }
}
