use crate::{
    density_step, velocity_step, Field2, FieldKind, FluidConfig, FluidError, FluidStats, Grid2,
    StepParams,
};
use log::{debug, trace};

/// Mutable views of the three per-tick source buffers.
pub struct Sources<'a> {
    pub density: &'a mut Field2,
    pub u: &'a mut Field2,
    pub v: &'a mut Field2,
}

/// The six field buffers of one simulation, all on the same grid.
///
/// The `_prev` buffers carry sources into a tick and are scratch space during it.
#[derive(Clone, Debug)]
pub struct FluidState {
    grid: Grid2,
    u: Field2,
    v: Field2,
    u_prev: Field2,
    v_prev: Field2,
    dens: Field2,
    dens_prev: Field2,
}

impl FluidState {
    pub fn new(n: usize) -> Result<Self, FluidError> {
        let grid = Grid2::new(n)?;
        let state = Self {
            grid,
            u: Field2::new(grid, FieldKind::VelocityX)?,
            v: Field2::new(grid, FieldKind::VelocityY)?,
            u_prev: Field2::new(grid, FieldKind::VelocityX)?,
            v_prev: Field2::new(grid, FieldKind::VelocityY)?,
            dens: Field2::new(grid, FieldKind::Scalar)?,
            dens_prev: Field2::new(grid, FieldKind::Scalar)?,
        };
        debug!("allocated fluid state: N = {n}, {} cells per field", grid.size());
        Ok(state)
    }

    pub fn grid(&self) -> Grid2 {
        self.grid
    }

    pub fn density(&self) -> &Field2 {
        &self.dens
    }

    pub fn velocity_x(&self) -> &Field2 {
        &self.u
    }

    pub fn velocity_y(&self) -> &Field2 {
        &self.v
    }

    pub fn sources_mut(&mut self) -> Sources<'_> {
        Sources {
            density: &mut self.dens_prev,
            u: &mut self.u_prev,
            v: &mut self.v_prev,
        }
    }

    /// Zeroes every buffer.
    pub fn clear(&mut self) {
        for field in self.fields_mut() {
            field.fill(0.0);
        }
        debug!("cleared fluid state");
    }

    pub fn clear_sources(&mut self) {
        self.u_prev.fill(0.0);
        self.v_prev.fill(0.0);
        self.dens_prev.fill(0.0);
    }

    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|field| field.is_finite())
    }

    pub fn is_zero(&self) -> bool {
        self.fields().iter().all(|field| field.is_zero())
    }

    /// Velocity tick followed by density tick, both fed from the source buffers.
    pub fn step(&mut self, params: StepParams) -> Result<(), FluidError> {
        params.validate()?;
        velocity_step(
            &mut self.u,
            &mut self.v,
            &mut self.u_prev,
            &mut self.v_prev,
            params.viscosity,
            params.dt,
        )?;
        density_step(
            &mut self.dens,
            &mut self.dens_prev,
            &self.u,
            &self.v,
            params.diffusion,
            params.dt,
        )?;
        debug_assert!(self.is_finite(), "fluid state became non-finite");
        Ok(())
    }

    fn fields(&self) -> [&Field2; 6] {
        [
            &self.u,
            &self.v,
            &self.u_prev,
            &self.v_prev,
            &self.dens,
            &self.dens_prev,
        ]
    }

    fn fields_mut(&mut self) -> [&mut Field2; 6] {
        [
            &mut self.u,
            &mut self.v,
            &mut self.u_prev,
            &mut self.v_prev,
            &mut self.dens,
            &mut self.dens_prev,
        ]
    }
}

/// A fluid state together with the constants it is stepped with.
#[derive(Clone, Debug)]
pub struct FluidSim {
    state: FluidState,
    params: StepParams,
    ticks: u64,
}

impl FluidSim {
    pub fn new(config: &FluidConfig) -> Result<Self, FluidError> {
        let params = config.step_params();
        params.validate()?;
        let state = FluidState::new(config.resolution)?;
        Ok(Self {
            state,
            params,
            ticks: 0,
        })
    }

    pub fn state(&self) -> &FluidState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FluidState {
        &mut self.state
    }

    pub fn params(&self) -> StepParams {
        self.params
    }

    pub fn set_params(&mut self, params: StepParams) -> Result<(), FluidError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Elapsed wall-clock time drives `dt`, so the driver updates it every frame.
    pub fn set_dt(&mut self, dt: f32) -> Result<(), FluidError> {
        self.set_params(StepParams { dt, ..self.params })
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one tick and consumes the sources written since the previous one.
    pub fn step(&mut self) -> Result<(), FluidError> {
        self.state.step(self.params)?;
        self.state.clear_sources();
        self.ticks += 1;
        trace!("tick {} done (dt = {})", self.ticks, self.params.dt);
        Ok(())
    }

    pub fn stats(&self) -> FluidStats {
        FluidStats::from_state(&self.state)
    }
}
