//! Participant list
//!
//! Ordered, duplicate-free list of display names. Order decides segment
//! index and with it color and winner mapping.

use rand::Rng;
use rand::seq::SliceRandom;

/// Ordered participant names
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Names in segment order
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Parse a free-form batch and append the new names.
    ///
    /// Splits on commas and newlines, trims whitespace, drops empties and
    /// anything already on the wheel (including repeats inside the batch).
    /// Returns how many names were actually added.
    pub fn add_names(&mut self, input: &str) -> usize {
        let before = self.names.len();
        for raw in input.split([',', '\n']) {
            let name = raw.trim();
            if !name.is_empty() && !self.contains(name) {
                self.names.push(name.to_string());
            }
        }
        self.names.len() - before
    }

    /// Replace the whole list, applying the same sanitation as `add_names`.
    pub fn set<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.names.clear();
        for raw in names {
            let name = raw.as_ref().trim();
            if !name.is_empty() && !self.contains(name) {
                self.names.push(name.to_string());
            }
        }
    }

    /// Remove the first entry matching `name`. Returns false when absent.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Fisher-Yates reorder; segment indexes are reassigned by position.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.names.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_add_names_parses_commas_and_newlines() {
        let mut roster = Roster::new();
        let added = roster.add_names("Ada, Grace\nKatherine , \n,Edsger");
        assert_eq!(added, 4);
        assert_eq!(roster.names(), ["Ada", "Grace", "Katherine", "Edsger"]);
    }

    #[test]
    fn test_add_names_rejects_duplicates() {
        let mut roster = Roster::new();
        roster.add_names("Ada, Grace");
        let added = roster.add_names("Grace, Alan");
        assert_eq!(added, 1);
        assert_eq!(roster.names(), ["Ada", "Grace", "Alan"]);
    }

    #[test]
    fn test_add_names_rejects_duplicates_within_batch() {
        let mut roster = Roster::new();
        let added = roster.add_names("Bob, Bob\nBob");
        assert_eq!(added, 1);
        assert_eq!(roster.names(), ["Bob"]);
    }

    #[test]
    fn test_remove_by_name() {
        let mut roster = Roster::new();
        roster.add_names("Ada, Grace, Alan");
        assert!(roster.remove("Grace"));
        assert!(!roster.remove("Grace"));
        assert_eq!(roster.names(), ["Ada", "Alan"]);
    }

    #[test]
    fn test_set_replaces_and_sanitizes() {
        let mut roster = Roster::new();
        roster.add_names("Old");
        roster.set(["  Ada ", "", "Grace", "Ada"]);
        assert_eq!(roster.names(), ["Ada", "Grace"]);
    }

    #[test]
    fn test_shuffle_keeps_members() {
        let mut roster = Roster::new();
        roster.add_names("A, B, C, D, E, F, G, H");
        let mut before: Vec<String> = roster.names().to_vec();

        let mut rng = Pcg32::seed_from_u64(42);
        roster.shuffle(&mut rng);

        let mut after: Vec<String> = roster.names().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(roster.len(), 8);
    }

    #[test]
    fn test_clear() {
        let mut roster = Roster::new();
        roster.add_names("Ada, Grace");
        roster.clear();
        assert!(roster.is_empty());
    }
}
