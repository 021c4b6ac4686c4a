//! Deterministic selection core
//!
//! Everything the randomizer decides lives here. This module must be pure
//! and deterministic:
//! - Seeded RNG only
//! - Virtual clock only (the host advances time explicitly)
//! - Stable iteration order (roster insertion order)
//! - No rendering or platform dependencies

pub mod rotation;
pub mod session;

pub use rotation::{RngState, SpinTarget, calculate_target_rotation};
pub use session::{Session, SessionEvent, SpinPlan};
