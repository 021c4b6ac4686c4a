//! Radial Randomizer - a wheel-of-fortune selection engine
//!
//! Core modules:
//! - `wheel`: Deterministic selection core (rotation targeting, spin lifecycle)
//! - `roster`: Named entry lists and exclusion state
//! - `history`: Append-only selection log
//! - `settings`: Behavior flags
//!
//! The engine owns no rendering, no real timers, and no storage backend.
//! A presentation layer animates to the rotation the engine computes and
//! drives the engine's virtual clock from its own event loop.

pub mod history;
pub mod roster;
pub mod settings;
pub mod wheel;

pub use history::{SelectionHistory, SelectionMethod, SelectionRecord};
pub use roster::{Item, Roster, RosterStore};
pub use settings::Settings;
pub use wheel::{Session, SessionEvent, SpinPlan, SpinTarget, calculate_target_rotation};

/// Wheel geometry and timing constants
pub mod consts {
    /// Minimum full turns per spin (visual effect only)
    pub const MIN_SPINS: f64 = 3.0;
    /// Maximum full turns per spin (visual effect only)
    pub const MAX_SPINS: f64 = 5.0;
    /// Duration of the spin animation in milliseconds
    pub const SPIN_DURATION_MS: u64 = 3000;
    /// Delay before a selected entry is auto-excluded
    pub const AUTO_EXCLUDE_DELAY_MS: u64 = 2000;

    /// Angle of the first slot's center - index 0 starts at the top (12 o'clock)
    pub const FIRST_SLOT_ANGLE_DEG: f64 = -90.0;
    /// The fixed marker sits at 0 degrees (3 o'clock)
    pub const MARKER_ANGLE_DEG: f64 = 0.0;
    /// Floating-point tolerance for landing alignment
    pub const LANDING_TOLERANCE_DEG: f64 = 0.01;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Angular width of one slot on a wheel with `count` entries
#[inline]
pub fn degrees_per_slot(count: usize) -> f64 {
    debug_assert!(count >= 1);
    360.0 / count as f64
}

/// Nominal center angle of slot `index` on an unrotated wheel with `count` entries
#[inline]
pub fn slot_angle(index: usize, count: usize) -> f64 {
    consts::FIRST_SLOT_ANGLE_DEG + index as f64 * degrees_per_slot(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-1080.0), 0.0);
        assert!((normalize_degrees(725.5) - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_slot_angle() {
        // 12 entries: 30 degrees apart, index 0 at the top
        assert_eq!(slot_angle(0, 12), -90.0);
        assert_eq!(slot_angle(3, 12), 0.0);
        assert_eq!(slot_angle(6, 12), 90.0);
        // Single entry occupies the whole wheel
        assert_eq!(slot_angle(0, 1), -90.0);
    }
}
