use thiserror::Error;

/// Failures the orb field can run into.
///
/// Only `SurfaceUnavailable` happens at runtime; the others come from
/// building a [`FieldConfig`](crate::FieldConfig) out of host-supplied values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("2d drawing context is unavailable")]
    SurfaceUnavailable,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("palette has no color pairs")]
    EmptyPalette,
    #[error("invalid band for {0}")]
    InvalidBand(&'static str),
}
