use crate::{divergence_energy, FluidState};
use std::fmt;

/// Whole-grid diagnostics over interior cells, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FluidStats {
    pub total_density: f32,
    pub max_density: f32,
    pub max_speed: f32,
    pub kinetic_energy: f32,
    pub divergence: f32,
}

impl FluidStats {
    pub fn from_state(state: &FluidState) -> Self {
        let grid = state.grid();
        let dens = state.density();
        let u = state.velocity_x();
        let v = state.velocity_y();
        let mut stats = Self::default();
        let mut max_speed_sq: f32 = 0.0;
        for (i, j) in grid.interior() {
            let d = dens.get(i, j);
            stats.total_density += d;
            stats.max_density = stats.max_density.max(d);
            let speed_sq = u.get(i, j).powi(2) + v.get(i, j).powi(2);
            max_speed_sq = max_speed_sq.max(speed_sq);
            stats.kinetic_energy += 0.5 * speed_sq;
        }
        stats.max_speed = max_speed_sq.sqrt();
        stats.divergence = divergence_energy(u, v);
        stats
    }
}

impl fmt::Display for FluidStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mass={:.4} peak={:.4} max_speed={:.4} energy={:.4e} div={:.3e}",
            self.total_density,
            self.max_density,
            self.max_speed,
            self.kinetic_energy,
            self.divergence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_zero_stats() {
        let state = FluidState::new(4).unwrap();
        assert_eq!(FluidStats::from_state(&state), FluidStats::default());
    }

    #[test]
    fn stats_track_injected_density_and_speed() {
        let mut state = FluidState::new(6).unwrap();
        {
            let sources = state.sources_mut();
            sources.density.set(3, 3, 20.0);
            sources.u.set(2, 2, 30.0);
            sources.v.set(2, 2, 40.0);
        }
        let params = crate::StepParams {
            diffusion: 0.0,
            viscosity: 0.0,
            dt: 0.1,
        };
        state.step(params).unwrap();
        let stats = FluidStats::from_state(&state);
        assert!((stats.total_density - 2.0).abs() < 0.1);
        assert!(stats.max_speed > 0.0);
        assert!(stats.kinetic_energy > 0.0);
        assert!(stats.divergence.is_finite());
        assert!(stats.to_string().starts_with("mass="));
    }
}
