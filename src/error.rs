use thiserror::Error;

#[derive(Debug, Error)]
pub enum FluidError {
    #[error("failed to allocate field buffer of {cells} cells")]
    Allocation { cells: usize },

    #[error("grid resolution must be at least 1, got {0}")]
    InvalidResolution(usize),

    #[error("parameter `{name}` must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("config error: {0}")]
    Config(String),
}

pub(crate) fn check_param(name: &'static str, value: f32) -> Result<f32, FluidError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FluidError::InvalidParameter { name, value })
    }
}
