use thiserror::Error;

/// Precondition violations raised by the curve editor core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("a cubic curve needs exactly 4 control points, got {0}")]
    InvalidPointCount(usize),

    #[error("parametric step must lie in (0, 1], got {0}")]
    InvalidStep(f64),

    #[error("control point index {0} is out of range (0..4)")]
    IndexOutOfRange(usize),
}
