//! Spin state machine
//!
//! One tick per animation frame, exponential velocity decay, done when the
//! velocity drops under the stop threshold. The wheel angle accumulates
//! across spins so the wheel never visually resets between rounds.

use rand::Rng;
use std::f32::consts::TAU;

use crate::consts::*;
use crate::wheel::geometry::winner_at;

/// Animator phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    /// No spin in progress; the wheel rests at its last angle
    Idle,
    /// Velocity decay in progress
    Spinning,
}

/// Outcome of one animation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinTick {
    /// Nothing to animate
    Idle,
    /// The wheel advanced and wants a redraw
    Advanced { wheel_angle: f32 },
    /// Velocity fell to the threshold; the wheel settled on `winner`
    Finished { winner: usize, wheel_angle: f32 },
}

/// Per-spin animation state
#[derive(Debug, Clone)]
pub struct Spinner {
    phase: SpinPhase,
    /// Cumulative rotation (radians, unbounded)
    wheel_angle: f32,
    /// Angular velocity (radians/tick); meaningful only while spinning
    velocity: f32,
    /// Total rotation requested for the current spin. Informational: the
    /// stop is decided by decay, not by reaching this target.
    requested_rotation: f32,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            phase: SpinPhase::Idle,
            wheel_angle: 0.0,
            velocity: 0.0,
            requested_rotation: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Current cumulative rotation (radians, unbounded)
    #[inline]
    pub fn wheel_angle(&self) -> f32 {
        self.wheel_angle
    }

    /// Angular velocity for the current tick (radians/tick)
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Rotation drawn at spin start (radians)
    #[inline]
    pub fn requested_rotation(&self) -> f32 {
        self.requested_rotation
    }

    /// Begin a spin. Returns false (and changes nothing) while one is active.
    ///
    /// Draws 4 to 8 full turns plus a random extra offset, then hands
    /// control to [`Spinner::tick`].
    pub fn start(&mut self, rng: &mut impl Rng) -> bool {
        if self.is_spinning() {
            return false;
        }

        let full_turns = rng.random_range(MIN_FULL_TURNS..MAX_FULL_TURNS);
        let extra = rng.random_range(0.0..TAU);
        self.requested_rotation = full_turns * TAU + extra;
        self.velocity = INITIAL_SPIN_SPEED;
        self.phase = SpinPhase::Spinning;
        true
    }

    /// Advance one animation frame.
    ///
    /// The threshold check comes first, so the finishing tick reports the
    /// settled angle without moving the wheel.
    pub fn tick(&mut self, participant_count: usize) -> SpinTick {
        match self.phase {
            SpinPhase::Idle => SpinTick::Idle,
            SpinPhase::Spinning => {
                if self.velocity > SPIN_STOP_THRESHOLD {
                    self.wheel_angle += self.velocity;
                    self.velocity *= SPIN_DECAY;
                    SpinTick::Advanced {
                        wheel_angle: self.wheel_angle,
                    }
                } else {
                    debug_assert!(participant_count > 0, "spin finished with an empty wheel");
                    self.phase = SpinPhase::Idle;
                    self.velocity = 0.0;
                    let winner = winner_at(POINTER_ANGLE, participant_count, self.wheel_angle);
                    SpinTick::Finished {
                        winner,
                        wheel_angle: self.wheel_angle,
                    }
                }
            }
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_start_transitions_to_spinning() {
        let mut spinner = Spinner::new();
        assert_eq!(spinner.phase(), SpinPhase::Idle);
        assert!(spinner.start(&mut rng()));
        assert_eq!(spinner.phase(), SpinPhase::Spinning);
        assert!((spinner.velocity() - INITIAL_SPIN_SPEED).abs() < f32::EPSILON);
    }

    #[test]
    fn test_start_while_spinning_is_noop() {
        let mut r = rng();
        let mut spinner = Spinner::new();
        assert!(spinner.start(&mut r));
        let requested = spinner.requested_rotation();
        assert!(!spinner.start(&mut r));
        assert!((spinner.requested_rotation() - requested).abs() < f32::EPSILON);
    }

    #[test]
    fn test_requested_rotation_range() {
        let mut r = rng();
        for _ in 0..200 {
            let mut spinner = Spinner::new();
            spinner.start(&mut r);
            let turns = spinner.requested_rotation() / TAU;
            assert!(
                (MIN_FULL_TURNS..MAX_FULL_TURNS + 1.0).contains(&turns),
                "requested {turns} turns"
            );
        }
    }

    #[test]
    fn test_velocity_decays_monotonically() {
        let mut spinner = Spinner::new();
        spinner.start(&mut rng());
        let mut last = spinner.velocity();
        for _ in 0..100 {
            spinner.tick(5);
            let v = spinner.velocity();
            assert!(v < last, "velocity must strictly decrease while spinning");
            last = v;
        }
    }

    #[test]
    fn test_angle_only_grows_during_spin() {
        let mut spinner = Spinner::new();
        spinner.start(&mut rng());
        let mut last = spinner.wheel_angle();
        loop {
            match spinner.tick(3) {
                SpinTick::Advanced { wheel_angle } => {
                    assert!(wheel_angle > last);
                    last = wheel_angle;
                }
                SpinTick::Finished { wheel_angle, .. } => {
                    assert!((wheel_angle - last).abs() < f32::EPSILON);
                    break;
                }
                SpinTick::Idle => unreachable!("spin cannot go idle before finishing"),
            }
        }
        assert!(!spinner.is_spinning());
    }

    #[test]
    fn test_decay_reaches_threshold_in_expected_ticks() {
        // 0.4 * 0.985^k first dips to 0.005 at k = 290
        let mut spinner = Spinner::new();
        spinner.start(&mut rng());
        let mut ticks = 0u32;
        while let SpinTick::Advanced { .. } = spinner.tick(4) {
            ticks += 1;
            assert!(ticks < 1000, "spin failed to terminate");
        }
        assert!((280..=300).contains(&ticks), "spin took {ticks} ticks");
    }

    #[test]
    fn test_angle_persists_across_spins() {
        let mut r = rng();
        let mut spinner = Spinner::new();
        spinner.start(&mut r);
        while !matches!(spinner.tick(4), SpinTick::Finished { .. }) {}
        let settled = spinner.wheel_angle();
        assert!(settled > TAU, "a spin covers at least one full turn");

        spinner.start(&mut r);
        spinner.tick(4);
        assert!(spinner.wheel_angle() > settled);
    }

    #[test]
    fn test_tick_while_idle() {
        let mut spinner = Spinner::new();
        assert_eq!(spinner.tick(5), SpinTick::Idle);
        assert_eq!(spinner.wheel_angle(), 0.0);
    }

    #[test]
    fn test_finish_winner_matches_geometry() {
        let mut spinner = Spinner::new();
        spinner.start(&mut rng());
        let (winner, angle) = loop {
            if let SpinTick::Finished { winner, wheel_angle } = spinner.tick(6) {
                break (winner, wheel_angle);
            }
        };
        assert!(winner < 6);
        assert_eq!(winner, winner_at(POINTER_ANGLE, 6, angle));
    }
}
