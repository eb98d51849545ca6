//! Which numbers the player currently has marked on the ticket.

use shared::domain::{PRIMARY_PICK_COUNT, PRIMARY_RANGE, SECONDARY_RANGE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Kept sorted ascending, never longer than `PRIMARY_PICK_COUNT`.
    primary: Vec<u8>,
    secondary: Option<u8>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> &[u8] {
        &self.primary
    }

    pub fn secondary(&self) -> Option<u8> {
        self.secondary
    }

    pub fn is_primary_selected(&self, number: u8) -> bool {
        self.primary.binary_search(&number).is_ok()
    }

    pub fn is_primary_full(&self) -> bool {
        self.primary.len() >= PRIMARY_PICK_COUNT
    }

    pub fn is_complete(&self) -> bool {
        self.primary.len() == PRIMARY_PICK_COUNT && self.secondary.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_none()
    }

    /// Deselects `number` if marked, otherwise marks it while there is room.
    /// A full selection ignores new numbers.
    pub fn toggle_primary(&mut self, number: u8) {
        if !PRIMARY_RANGE.contains(&number) {
            tracing::debug!(number, "ignoring out-of-range main number");
            return;
        }
        match self.primary.binary_search(&number) {
            Ok(index) => {
                self.primary.remove(index);
            }
            Err(index) if self.primary.len() < PRIMARY_PICK_COUNT => {
                self.primary.insert(index, number);
            }
            Err(_) => {}
        }
    }

    pub fn toggle_secondary(&mut self, number: u8) {
        if !SECONDARY_RANGE.contains(&number) {
            tracing::debug!(number, "ignoring out-of-range powerball");
            return;
        }
        self.secondary = if self.secondary == Some(number) {
            None
        } else {
            Some(number)
        };
    }

    /// Overwrites both selections at once.
    pub fn replace(&mut self, primary: [u8; PRIMARY_PICK_COUNT], secondary: u8) {
        let mut primary = primary.to_vec();
        primary.sort_unstable();
        primary.dedup();
        self.primary = primary;
        self.secondary = Some(secondary);
    }

    pub fn clear(&mut self) {
        self.primary.clear();
        self.secondary = None;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    #[test]
    fn keeps_primary_sorted_and_unique() {
        let mut selection = SelectionState::new();
        for number in [42, 7, 19, 7, 3] {
            selection.toggle_primary(number);
        }
        // second 7 deselected the first
        assert_eq!(selection.primary(), &[3, 19, 42]);
    }

    #[test]
    fn saturates_at_five_numbers() {
        let mut selection = SelectionState::new();
        for number in 1..=10 {
            selection.toggle_primary(number);
        }
        assert_eq!(selection.primary(), &[1, 2, 3, 4, 5]);
        assert!(selection.is_primary_full());
    }

    #[test]
    fn toggling_selected_number_removes_it_even_when_full() {
        let mut selection = SelectionState::new();
        for number in [10, 20, 30, 40, 50] {
            selection.toggle_primary(number);
        }
        selection.toggle_primary(30);
        assert_eq!(selection.primary(), &[10, 20, 40, 50]);
        selection.toggle_primary(69);
        assert_eq!(selection.primary(), &[10, 20, 40, 50, 69]);
    }

    #[test]
    fn arbitrary_toggle_sequences_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(0x2545_f491);
        let mut selection = SelectionState::new();
        for _ in 0..2_000 {
            let number = rng.gen_range(PRIMARY_RANGE);
            let was_selected = selection.is_primary_selected(number);
            selection.toggle_primary(number);

            if was_selected {
                assert!(!selection.is_primary_selected(number));
            }
            let primary = selection.primary();
            assert!(primary.len() <= PRIMARY_PICK_COUNT);
            assert!(primary.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn secondary_toggle_twice_clears() {
        let mut selection = SelectionState::new();
        selection.toggle_secondary(12);
        assert_eq!(selection.secondary(), Some(12));
        selection.toggle_secondary(12);
        assert_eq!(selection.secondary(), None);
    }

    #[test]
    fn secondary_toggle_replaces_other_value() {
        let mut selection = SelectionState::new();
        selection.toggle_secondary(3);
        selection.toggle_secondary(26);
        assert_eq!(selection.secondary(), Some(26));
    }

    #[test]
    fn ignores_out_of_range_numbers() {
        let mut selection = SelectionState::new();
        selection.toggle_primary(0);
        selection.toggle_primary(70);
        selection.toggle_secondary(27);
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_and_complete() {
        let mut selection = SelectionState::new();
        selection.replace([5, 4, 3, 2, 1], 9);
        assert!(selection.is_complete());
        assert_eq!(selection.primary(), &[1, 2, 3, 4, 5]);

        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.is_complete());
    }
}
