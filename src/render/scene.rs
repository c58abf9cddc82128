//! Frame description
//!
//! [`build_scene`] turns the roster and current wheel angle into wedges
//! and label placements in logical pixels. No canvas types here, so the
//! layout math runs under plain `cargo test`.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::consts::{HUB_RADIUS, LABEL_RADIUS_FRACTION, WEDGE_INNER_RADIUS, WHEEL_MARGIN};
use crate::render::palette::{Rgb, segment_color};
use crate::{polar_to_cartesian, wrap_angle};

/// Logical drawing surface size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// One annular segment of the wheel
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    /// Arc start (radians, unwrapped so `end = start + width` always holds)
    pub start: f32,
    /// Arc end (radians)
    pub end: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Rgb,
}

/// A participant name placed along its segment midline
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Label center in viewport coordinates
    pub anchor: Vec2,
    /// Text rotation (radians), flipped where needed to stay readable
    pub rotation: f32,
}

/// Everything one frame needs drawn
#[derive(Debug, Clone, PartialEq)]
pub struct WheelScene {
    pub viewport: Viewport,
    pub center: Vec2,
    pub outer_radius: f32,
    pub hub_radius: f32,
    pub wedges: Vec<Wedge>,
    pub labels: Vec<Label>,
}

impl WheelScene {
    /// True when there are no participants and the empty prompt shows
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.wedges.is_empty()
    }
}

/// Lay out the wheel for the given names and rotation.
pub fn build_scene(names: &[String], wheel_angle: f32, viewport: Viewport) -> WheelScene {
    let center = viewport.center();
    let outer_radius = center.x.min(center.y) - WHEEL_MARGIN;

    let mut wedges = Vec::with_capacity(names.len());
    let mut labels = Vec::with_capacity(names.len());
    if !names.is_empty() {
        let width = TAU / names.len() as f32;
        for (index, name) in names.iter().enumerate() {
            let start = index as f32 * width + wheel_angle;
            let end = start + width;
            wedges.push(Wedge {
                start,
                end,
                inner_radius: WEDGE_INNER_RADIUS,
                outer_radius,
                color: segment_color(index),
            });

            let mid = wrap_angle(start + width / 2.0);
            labels.push(Label {
                text: name.clone(),
                anchor: center + polar_to_cartesian(outer_radius * LABEL_RADIUS_FRACTION, mid),
                rotation: upright_rotation(mid),
            });
        }
    }

    WheelScene {
        viewport,
        center,
        outer_radius,
        hub_radius: HUB_RADIUS,
        wedges,
        labels,
    }
}

/// Rotation that keeps text along the midline readable left-to-right.
/// Flipped by half a turn over the half of the circle where unflipped
/// text would run upside down.
fn upright_rotation(mid_angle: f32) -> f32 {
    let mid = wrap_angle(mid_angle);
    if mid > FRAC_PI_2 && mid < 3.0 * FRAC_PI_2 {
        mid + PI
    } else {
        mid
    }
}
