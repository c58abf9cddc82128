//! Segment geometry and winner lookup
//!
//! The wheel splits into equal angular segments offset by the current wheel
//! angle: participant `i` of `N` covers
//! `[i * (2π/N) + wheelAngle, (i+1) * (2π/N) + wheelAngle)` modulo 2π.
//! The winner is whichever segment sits under the fixed pointer when the
//! wheel settles.

use std::f32::consts::TAU;

use crate::wrap_angle;

/// Half-open angular interval [start, end) on the unit circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan {
    /// Start angle (radians, in [0, 2π))
    pub start: f32,
    /// End angle (radians, in [0, 2π))
    pub end: f32,
}

impl SegmentSpan {
    /// Check if an angle falls inside the span.
    ///
    /// Spans may cross the 0/2π seam, in which case `end < start` and
    /// membership becomes `theta >= start || theta < end`.
    pub fn contains(&self, theta: f32) -> bool {
        let theta = wrap_angle(theta);
        if self.end < self.start {
            theta >= self.start || theta < self.end
        } else {
            theta >= self.start && theta < self.end
        }
    }

    /// Angular width of the span (handles the wrapped case)
    pub fn width(&self) -> f32 {
        let mut span = self.end - self.start;
        if span <= 0.0 {
            span += TAU;
        }
        span
    }

    /// Mid-angle of the span, normalized to [0, 2π)
    pub fn midpoint(&self) -> f32 {
        wrap_angle(self.start + self.width() / 2.0)
    }
}

/// Angular interval covered by `index` out of `count` segments at the given
/// wheel rotation. Bounds are normalized to [0, 2π).
pub fn segment_span(index: usize, count: usize, wheel_angle: f32) -> SegmentSpan {
    debug_assert!(count > 0, "segment_span with zero participants");
    debug_assert!(index < count);

    let width = TAU / count as f32;
    let offset = wrap_angle(wheel_angle);
    SegmentSpan {
        start: wrap_angle(index as f32 * width + offset),
        end: wrap_angle((index as f32 + 1.0) * width + offset),
    }
}

/// Segment index sitting under `pointer_angle` for the given wheel rotation.
///
/// Scans indexes in order and takes the first whose half-open span contains
/// the normalized pointer. Falls back to 0 when no span reports a hit: a
/// single segment's span is formally empty (start == end), and float
/// rounding can open a sliver at the normalization seam.
pub fn winner_at(pointer_angle: f32, count: usize, wheel_angle: f32) -> usize {
    debug_assert!(count > 0, "winner_at with zero participants");

    let target = wrap_angle(pointer_angle);
    (0..count)
        .find(|&i| segment_span(i, count, wheel_angle).contains(target))
        .unwrap_or(0)
}
