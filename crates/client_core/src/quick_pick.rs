//! Random ticket generation.

use rand::{seq::SliceRandom, Rng};
use shared::domain::{PRIMARY_PICK_COUNT, PRIMARY_RANGE, SECONDARY_RANGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPick {
    /// Sorted ascending, all distinct.
    pub main_numbers: [u8; PRIMARY_PICK_COUNT],
    pub powerball: u8,
}

pub fn quick_pick() -> QuickPick {
    quick_pick_with(&mut rand::thread_rng())
}

/// Draws main numbers without replacement via a partial Fisher-Yates shuffle,
/// so the draw always finishes in `PRIMARY_PICK_COUNT` swaps.
pub fn quick_pick_with<R: Rng + ?Sized>(rng: &mut R) -> QuickPick {
    let mut pool: Vec<u8> = PRIMARY_RANGE.collect();
    let (drawn, _) = pool.partial_shuffle(rng, PRIMARY_PICK_COUNT);

    let mut main_numbers = [0u8; PRIMARY_PICK_COUNT];
    main_numbers.copy_from_slice(drawn);
    main_numbers.sort_unstable();

    QuickPick {
        main_numbers,
        powerball: rng.gen_range(SECONDARY_RANGE),
    }
}
