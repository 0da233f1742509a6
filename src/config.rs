use crate::error::check_param;
use crate::{FluidError, StepParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Solver and driver settings, loadable from TOML. Missing keys take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    /// Interior resolution `N`.
    pub resolution: usize,
    pub diffusion: f32,
    pub viscosity: f32,
    /// Seconds per tick when the driver does not measure real elapsed time.
    pub dt: f32,
    /// Scale from pointer movement (pixels) to injected velocity.
    pub force: f32,
    /// Density written by one pour.
    pub source: f32,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            resolution: 128,
            diffusion: 0.0001,
            viscosity: 0.0,
            dt: 0.1,
            force: 10.0,
            source: 50.0,
        }
    }
}

impl FluidConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, FluidError> {
        let config: Self = toml::from_str(text).map_err(|err| FluidError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FluidError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|err| FluidError::Config(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, FluidError> {
        toml::to_string_pretty(self).map_err(|err| FluidError::Config(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), FluidError> {
        if self.resolution == 0 {
            return Err(FluidError::InvalidResolution(self.resolution));
        }
        self.step_params().validate()?;
        check_param("force", self.force)?;
        check_param("source", self.source)?;
        Ok(())
    }

    pub fn step_params(&self) -> StepParams {
        StepParams {
            diffusion: self.diffusion,
            viscosity: self.viscosity,
            dt: self.dt,
        }
    }
}
