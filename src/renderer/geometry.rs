//! Stem anchor on a rotated notehead ellipse.
//!
//! The stem attaches where the rotated ellipse has a vertical tangent on its
//! right side. With the unrotated boundary `(rx·cos t, ry·sin t)` rotated by
//! θ, the x-coordinate is `rx·cos t·cosθ − ry·sin t·sinθ`; setting its
//! derivative to zero gives `t = atan(−ry·sinθ / (rx·cosθ))`.

use crate::error::NotationError;

/// Offset from the notehead center to the stem attachment point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StemAnchor {
    /// Horizontal distance to the right-hand tangent point, always ≥ 0
    pub offset_x: f64,
    /// Vertical offset, sign preserved; added to the notehead y
    pub offset_y: f64,
}

/// Solve the stem anchor for an ellipse with semi-axes `rx`, `ry` rotated by
/// `angle` radians (counter-clockwise positive).
///
/// Fails when `rx·cosθ` is zero, where the closed form has no solution.
pub fn stem_anchor(rx: f64, ry: f64, angle: f64) -> Result<StemAnchor, NotationError> {
    let (sin_a, cos_a) = angle.sin_cos();
    let denom = rx * cos_a;
    if denom.abs() < f64::EPSILON * rx.abs().max(1.0) || !denom.is_finite() {
        return Err(NotationError::DegenerateRotation { angle });
    }

    let t = (-(ry * sin_a) / denom).atan();
    let x = rx * t.cos();
    let y = ry * t.sin();
    let rotated_x = x * cos_a - y * sin_a;
    let rotated_y = x * sin_a + y * cos_a;

    Ok(StemAnchor {
        offset_x: rotated_x.abs(),
        offset_y: rotated_y,
    })
}
