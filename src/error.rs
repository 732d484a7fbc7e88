//! Error types for notation rendering.
//!
//! Pattern and configuration values are never rejected: unknown rudiments,
//! empty stickings, out-of-range bars and unknown subdivisions all fall back
//! to defaults. What remains are geometry that cannot be solved and payloads
//! that cannot be decoded or encoded at all.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotationError {
    /// The notehead rotation leaves no vertical tangent to attach a stem to
    #[error("degenerate rotation: no vertical tangent for notehead angle {angle} rad")]
    DegenerateRotation { angle: f64 },

    /// Configuration or dictionary JSON could not be decoded
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Output could not be serialized
    #[error("serialization error: {0}")]
    Serialization(String),
}
