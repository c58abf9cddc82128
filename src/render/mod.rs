//! Wheel rendering
//!
//! Split in two: [`scene`] builds a plain geometric description of the
//! frame (testable anywhere), [`canvas`] paints that description onto an
//! HTML canvas and only exists on wasm.

pub mod palette;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use palette::{PALETTE, Rgb, segment_color};
pub use scene::{Label, Viewport, Wedge, WheelScene, build_scene};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
