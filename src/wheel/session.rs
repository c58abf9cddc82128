//! Session facade
//!
//! Couples the roster to the spinner and enforces the interaction rules:
//! no spin on an empty wheel, no second spin while one runs, and a frozen
//! roster for the duration of a spin so the settled angle still maps to
//! the names the player watched go around.

use rand::Rng;

use crate::wheel::roster::Roster;
use crate::wheel::spin::{SpinTick, Spinner};

/// Receives session events as they happen.
///
/// The shell points this at whatever surface it drives (page chrome,
/// logs); tests use a recording impl.
pub trait FeedbackSink {
    /// A spin request was accepted
    fn spin_started(&mut self);
    /// The wheel settled; fires exactly once per accepted spin
    fn winner_selected(&mut self, name: &str, index: usize);
}

/// Roster + spinner with the interaction rules between them
#[derive(Debug, Default)]
pub struct WheelSession {
    roster: Roster,
    spinner: Spinner,
}

impl WheelSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.spinner.is_spinning()
    }

    #[inline]
    pub fn wheel_angle(&self) -> f32 {
        self.spinner.wheel_angle()
    }

    #[inline]
    pub fn requested_rotation(&self) -> f32 {
        self.spinner.requested_rotation()
    }

    /// Replace the roster. Rejected while spinning.
    pub fn set_participants<I>(&mut self, names: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if self.is_spinning() {
            return false;
        }
        self.roster.set(names);
        true
    }

    /// Parse and append a batch of names. Returns 0 while spinning.
    pub fn add_names(&mut self, input: &str) -> usize {
        if self.is_spinning() {
            return 0;
        }
        self.roster.add_names(input)
    }

    /// Remove one participant by name. Rejected while spinning.
    pub fn remove_participant(&mut self, name: &str) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.roster.remove(name)
    }

    /// Empty the roster. Rejected while spinning or when already empty.
    pub fn clear_participants(&mut self) -> bool {
        if self.is_spinning() || self.roster.is_empty() {
            return false;
        }
        self.roster.clear();
        true
    }

    /// Reorder the roster. Rejected while spinning or under two names.
    pub fn shuffle_participants(&mut self, rng: &mut impl Rng) -> bool {
        if self.is_spinning() || self.roster.len() < 2 {
            return false;
        }
        self.roster.shuffle(rng);
        true
    }

    /// Try to start a spin. Ignored on an empty wheel or mid-spin.
    pub fn request_spin(&mut self, rng: &mut impl Rng, sink: &mut dyn FeedbackSink) -> bool {
        if self.roster.is_empty() || !self.spinner.start(rng) {
            return false;
        }
        sink.spin_started();
        true
    }

    /// Advance one frame, reporting the winner through `sink` on the
    /// finishing tick.
    pub fn tick(&mut self, sink: &mut dyn FeedbackSink) -> SpinTick {
        let outcome = self.spinner.tick(self.roster.len());
        if let SpinTick::Finished { winner, .. } = outcome {
            // roster is locked during a spin, so winner is in range
            let name = &self.roster.names()[winner];
            sink.winner_selected(name, winner);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::POINTER_ANGLE;
    use crate::wheel::geometry::winner_at;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[derive(Default)]
    struct RecordingSink {
        started: usize,
        winners: Vec<(String, usize)>,
    }

    impl FeedbackSink for RecordingSink {
        fn spin_started(&mut self) {
            self.started += 1;
        }

        fn winner_selected(&mut self, name: &str, index: usize) {
            self.winners.push((name.to_string(), index));
        }
    }

    fn session_with(names: &str) -> WheelSession {
        let mut session = WheelSession::new();
        session.add_names(names);
        session
    }

    fn run_to_finish(session: &mut WheelSession, sink: &mut RecordingSink) -> SpinTick {
        for _ in 0..10_000 {
            if let outcome @ SpinTick::Finished { .. } = session.tick(sink) {
                return outcome;
            }
        }
        panic!("spin did not finish");
    }

    #[test]
    fn test_spin_empty_wheel_is_ignored() {
        let mut session = WheelSession::new();
        let mut sink = RecordingSink::default();
        let mut rng = Pcg32::seed_from_u64(1);

        assert!(!session.request_spin(&mut rng, &mut sink));
        assert_eq!(session.tick(&mut sink), SpinTick::Idle);
        assert_eq!(sink.started, 0);
    }

    #[test]
    fn test_double_request_yields_single_winner() {
        let mut session = session_with("Ada, Grace, Alan");
        let mut sink = RecordingSink::default();
        let mut rng = Pcg32::seed_from_u64(2);

        assert!(session.request_spin(&mut rng, &mut sink));
        assert!(!session.request_spin(&mut rng, &mut sink));
        run_to_finish(&mut session, &mut sink);

        assert_eq!(sink.started, 1);
        assert_eq!(sink.winners.len(), 1);
    }

    #[test]
    fn test_winner_event_matches_final_geometry() {
        let mut session = session_with("A, B, C, D, E");
        let mut sink = RecordingSink::default();
        let mut rng = Pcg32::seed_from_u64(3);

        session.request_spin(&mut rng, &mut sink);
        let SpinTick::Finished { winner, wheel_angle } = run_to_finish(&mut session, &mut sink)
        else {
            unreachable!()
        };

        assert_eq!(winner, winner_at(POINTER_ANGLE, 5, wheel_angle));
        let (name, index) = &sink.winners[0];
        assert_eq!(*index, winner);
        assert_eq!(session.roster().name_at(winner), Some(name.as_str()));
        assert_eq!(session.wheel_angle(), wheel_angle);
        assert!(!session.is_spinning());
    }

    #[test]
    fn test_roster_locked_while_spinning() {
        let mut session = session_with("Ada, Grace");
        let mut sink = RecordingSink::default();
        let mut rng = Pcg32::seed_from_u64(4);

        session.request_spin(&mut rng, &mut sink);
        assert!(session.is_spinning());

        assert_eq!(session.add_names("Alan"), 0);
        assert!(!session.remove_participant("Ada"));
        assert!(!session.clear_participants());
        assert!(!session.shuffle_participants(&mut rng));
        assert!(!session.set_participants(["X", "Y"]));
        assert_eq!(session.roster().len(), 2);

        run_to_finish(&mut session, &mut sink);
        assert_eq!(session.add_names("Alan"), 1);
    }

    #[test]
    fn test_spin_after_finish_is_accepted() {
        let mut session = session_with("A, B, C, D");
        let mut sink = RecordingSink::default();
        let mut rng = Pcg32::seed_from_u64(5);

        session.request_spin(&mut rng, &mut sink);
        run_to_finish(&mut session, &mut sink);
        assert!(session.request_spin(&mut rng, &mut sink));
        run_to_finish(&mut session, &mut sink);

        assert_eq!(sink.started, 2);
        assert_eq!(sink.winners.len(), 2);
        assert!(sink.winners.iter().all(|(_, index)| *index < 4));
    }
}
