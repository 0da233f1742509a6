mod advect;
mod boundary;
mod config;
mod diffuse;
mod error;
mod field;
mod grid;
mod parallel;
mod project;
mod relax;
mod sim;
mod sources;
mod stats;
mod step;

pub use advect::advect;
pub use boundary::{apply_boundary, apply_boundary_as, FieldKind};
pub use config::FluidConfig;
pub use diffuse::diffuse;
pub use error::FluidError;
pub use field::Field2;
pub use grid::Grid2;
pub use project::{divergence_energy, divergence_into, project};
pub use relax::{relax, RELAX_ITERATIONS};
pub use sim::{FluidSim, FluidState, Sources};
pub use sources::{cell_at, push_velocity, splat_density, DragInjector, PointerSample};
pub use stats::FluidStats;
pub use step::{density_step, velocity_step, StepParams};
