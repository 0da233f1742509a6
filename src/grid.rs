use crate::FluidError;

/// Square solver grid: `n × n` interior cells wrapped in one ring of ghost cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid2 {
    n: usize,
}

impl Grid2 {
    pub fn new(n: usize) -> Result<Self, FluidError> {
        if n == 0 {
            return Err(FluidError::InvalidResolution(n));
        }
        let extent = n.checked_add(2).ok_or(FluidError::Allocation { cells: usize::MAX })?;
        extent
            .checked_mul(extent)
            .ok_or(FluidError::Allocation { cells: usize::MAX })?;
        Ok(Self { n })
    }

    /// Interior resolution `N`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cells per row including the ghost ring, `N + 2`.
    pub fn extent(&self) -> usize {
        self.n + 2
    }

    pub fn size(&self) -> usize {
        self.extent() * self.extent()
    }

    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.extent() && j < self.extent());
        i + self.extent() * j
    }

    pub fn coords(&self, idx: usize) -> (usize, usize) {
        debug_assert!(idx < self.size());
        (idx % self.extent(), idx / self.extent())
    }

    pub fn is_boundary(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i == self.n + 1 || j == self.n + 1
    }

    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        (1..=self.n).contains(&i) && (1..=self.n).contains(&j)
    }

    /// Interior cells in relaxation order: `i` outer, `j` inner.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        (1..=n).flat_map(move |i| (1..=n).map(move |j| (i, j)))
    }
}
