//! Deterministic spin engine
//!
//! All selection logic lives here. This module must stay pure and deterministic:
//! - One tick per animation frame
//! - Seeded RNG only, always passed in by the caller
//! - No rendering or platform dependencies

pub mod geometry;
pub mod roster;
pub mod session;
pub mod spin;

pub use geometry::{SegmentSpan, segment_span, winner_at};
pub use roster::Roster;
pub use session::{FeedbackSink, WheelSession};
pub use spin::{SpinPhase, SpinTick, Spinner};
