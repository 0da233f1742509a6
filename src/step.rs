use crate::error::check_param;
use crate::{advect, diffuse, project, Field2, FluidError};
use std::mem;

/// Per-tick physical constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    pub diffusion: f32,
    pub viscosity: f32,
    pub dt: f32,
}

impl StepParams {
    pub fn validate(&self) -> Result<(), FluidError> {
        check_param("diffusion", self.diffusion)?;
        check_param("viscosity", self.viscosity)?;
        check_param("dt", self.dt)?;
        Ok(())
    }
}

/// Advances the density one tick: add sources, diffuse, then carry it along `(u, v)`.
///
/// `dens_prev` holds this tick's sources on entry and scratch data on return.
pub fn density_step(
    dens: &mut Field2,
    dens_prev: &mut Field2,
    u: &Field2,
    v: &Field2,
    diffusion: f32,
    dt: f32,
) -> Result<(), FluidError> {
    check_param("diffusion", diffusion)?;
    check_param("dt", dt)?;
    dens.add_scaled_in_place(dens_prev, dt);
    mem::swap(dens, dens_prev);
    diffuse(dens, dens_prev, diffusion, dt);
    mem::swap(dens, dens_prev);
    advect(dens, dens_prev, u, v, dt);
    debug_assert!(dens.is_finite(), "density became non-finite");
    Ok(())
}

/// Advances the velocity one tick: add forces, diffuse, project, self-advect, project.
///
/// `u_prev` and `v_prev` hold this tick's forces on entry and scratch data on return.
pub fn velocity_step(
    u: &mut Field2,
    v: &mut Field2,
    u_prev: &mut Field2,
    v_prev: &mut Field2,
    viscosity: f32,
    dt: f32,
) -> Result<(), FluidError> {
    check_param("viscosity", viscosity)?;
    check_param("dt", dt)?;
    u.add_scaled_in_place(u_prev, dt);
    v.add_scaled_in_place(v_prev, dt);

    mem::swap(u, u_prev);
    diffuse(u, u_prev, viscosity, dt);
    mem::swap(v, v_prev);
    diffuse(v, v_prev, viscosity, dt);
    project(u, v, u_prev, v_prev);

    mem::swap(u, u_prev);
    mem::swap(v, v_prev);
    advect(u, u_prev, u_prev, v_prev, dt);
    advect(v, v_prev, u_prev, v_prev, dt);
    project(u, v, u_prev, v_prev);

    debug_assert!(
        u.is_finite() && v.is_finite(),
        "velocity became non-finite"
    );
    Ok(())
}
