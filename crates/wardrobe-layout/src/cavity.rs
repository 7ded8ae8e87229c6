//! The usable interior of a module.

use wardrobe_core::Dimensions;

/// Interior rectangle left after subtracting the frame from the outer box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cavity {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

/// Compute the cavity for the given outer box and frame thickness.
///
/// A negative frame counts as zero. A frame thicker than half the box
/// collapses the cavity to zero width or height instead of inverting it.
pub fn inner_cavity(dimensions: Dimensions, frame_thickness: f64) -> Cavity {
    let t = frame_thickness.max(0.0);
    let left = t;
    let right = t.max(dimensions.width - t);
    let bottom = t;
    let top = t.max(dimensions.height - t);
    Cavity {
        left,
        right,
        bottom,
        top,
        inner_width: (right - left).max(0.0),
        inner_height: (top - bottom).max(0.0),
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the lower bound
/// wins, and a NaN value resolves to a bound.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}
