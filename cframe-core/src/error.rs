/// Error type shared by the core and the host boundaries
use thiserror::Error;

/// Failures reported by the opt-in strict constructors, property lookup and
/// scene configuration loading.
///
/// The transform math itself never fails: NaN and infinities flow through
/// matrix and vector operations unchanged.
#[derive(Debug, Error)]
pub enum CFrameError {
    /// A strict constructor received a NaN or infinite component.
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// A camera property name outside `x, y, z, rx, ry, rz`.
    #[error("unknown camera property `{0}`")]
    UnknownProperty(String),

    #[error("invalid scene configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CFrameError>;

/// Return `value` unchanged if it is finite, otherwise a `NonFinite` error
/// naming the offending component.
pub(crate) fn ensure_finite(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CFrameError::NonFinite { what, value })
    }
}
