//! Wheel rotation targeting
//!
//! Pure arithmetic mapping a uniform random draw to a cumulative rotation
//! angle. The wheel always spins further counter-clockwise (the rotation
//! scalar only ever decreases) and always stops with the chosen slot's
//! center exactly at the fixed marker at 0 degrees.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SPINS, MIN_SPINS};
use crate::degrees_per_slot;

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Result of one spin draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTarget {
    /// New cumulative rotation in degrees; always more negative than the input
    pub target_rotation: f64,
    /// Index into the active pool that lands at the marker
    pub final_index: usize,
}

/// Compute the rotation that lands a uniformly chosen slot at the marker.
///
/// `rotation` is the current cumulative rotation in degrees (0 at session
/// start, decreasing with every spin). `item_count` is the size of the
/// active pool. Two independent draws are made: the number of full visual
/// turns (which never affects the outcome) and the winning index.
///
/// The returned target satisfies two guarantees:
/// - `slot_angle(final_index, item_count) + target_rotation ≡ 0 (mod 360)`,
///   so the chosen slot stops exactly at the marker
/// - `rotation - target_rotation >= MIN_SPINS * 360`, so the wheel never
///   reverses and never finishes in fewer than the minimum visual turns
///
/// Panics if `item_count` is 0 - spinning an empty pool is a caller
/// contract violation, guarded upstream.
pub fn calculate_target_rotation(
    rotation: f64,
    item_count: usize,
    rng: &mut impl Rng,
) -> SpinTarget {
    assert!(item_count >= 1, "cannot spin an empty wheel");
    debug_assert!(rotation <= 0.0, "rotation accumulates counter-clockwise");

    let spins = rng.random_range(MIN_SPINS..MAX_SPINS);
    let final_index = rng.random_range(0..item_count);

    // Slot final_index starts at -90 + final_index * (360 / item_count),
    // so the wheel must end at 90 - final_index * (360 / item_count) mod 360
    // for that slot to sit on the marker.
    let landing_offset = 90.0 - final_index as f64 * degrees_per_slot(item_count);

    // Full turns already accumulated, truncated toward the spin direction
    let completed_turns = (rotation / -360.0).floor();

    let mut target = (completed_turns + spins.ceil()) * -360.0 + landing_offset;

    // The turn arithmetic above can come up short of the minimum when the
    // current rotation sits just shy of a full-turn boundary; landing
    // congruence is unaffected by whole extra turns.
    while rotation - target < MIN_SPINS * 360.0 {
        target -= 360.0;
    }

    SpinTarget {
        target_rotation: target,
        final_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LANDING_TOLERANCE_DEG;
    use crate::{normalize_degrees, slot_angle};
    use proptest::prelude::*;

    /// Distance from the marker after applying `target` to the chosen slot
    fn landing_error(target: &SpinTarget, count: usize) -> f64 {
        let final_angle = normalize_degrees(slot_angle(target.final_index, count) + target.target_rotation);
        final_angle.min(360.0 - final_angle)
    }

    #[test]
    fn test_landing_correctness_grid() {
        let rotations = [0.0, -360.0, -1080.0, -3600.0, -7200.0];
        let counts = [1usize, 2, 3, 12, 24];

        for &rotation in &rotations {
            for &count in &counts {
                let mut rng = Pcg32::seed_from_u64(7);
                let mut seen = vec![false; count];
                // Enough draws to hit every index of a 24-slot wheel
                for _ in 0..2000 {
                    let target = calculate_target_rotation(rotation, count, &mut rng);
                    assert!(target.final_index < count);
                    seen[target.final_index] = true;
                    assert!(
                        landing_error(&target, count) <= LANDING_TOLERANCE_DEG,
                        "slot {} of {} missed the marker from rotation {}",
                        target.final_index,
                        count,
                        rotation
                    );
                }
                assert!(seen.iter().all(|&s| s), "not every index drawn for count {count}");
            }
        }
    }

    #[test]
    fn test_single_item_always_index_zero() {
        let mut rng = Pcg32::seed_from_u64(99);
        for spin in 0..100 {
            let target = calculate_target_rotation(-(spin as f64) * 1234.0, 1, &mut rng);
            assert_eq!(target.final_index, 0);
        }
    }

    #[test]
    fn test_uniform_index_distribution() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut counts = [0u32; 12];
        let draws = 12_000;
        for _ in 0..draws {
            let target = calculate_target_rotation(0.0, 12, &mut rng);
            counts[target.final_index] += 1;
        }
        // Expected 1000 per bucket; a fair draw stays well inside +/- 200
        for (index, &count) in counts.iter().enumerate() {
            assert!(
                (800..1200).contains(&count),
                "index {index} drawn {count} times out of {draws}"
            );
        }
    }

    #[test]
    fn test_successive_spins_monotonic() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut rotation = 0.0;
        for _ in 0..200 {
            let target = calculate_target_rotation(rotation, 12, &mut rng);
            let delta = target.target_rotation - rotation;
            assert!(delta < 0.0, "spin reversed direction");
            assert!(
                -delta >= MIN_SPINS * 360.0,
                "spin shorter than minimum: {delta}"
            );
            rotation = target.target_rotation;
        }
    }

    #[test]
    #[should_panic(expected = "cannot spin an empty wheel")]
    fn test_empty_pool_panics() {
        let mut rng = Pcg32::seed_from_u64(0);
        calculate_target_rotation(0.0, 0, &mut rng);
    }

    proptest! {
        #[test]
        fn prop_landing_and_minimum_delta(
            turns in 0u32..200,
            frac in 0.0f64..360.0,
            count in 1usize..=48,
            seed in any::<u64>(),
        ) {
            let rotation = -(turns as f64 * 360.0 + frac);
            let mut rng = Pcg32::seed_from_u64(seed);
            let target = calculate_target_rotation(rotation, count, &mut rng);

            prop_assert!(target.target_rotation < rotation);
            prop_assert!(rotation - target.target_rotation >= MIN_SPINS * 360.0);
            prop_assert!(landing_error(&target, count) <= LANDING_TOLERANCE_DEG);
        }
    }
}
