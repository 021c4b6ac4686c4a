//! Radial Randomizer entry point
//!
//! Terminal demo: runs a seeded session against the default roster,
//! spinning until a single entry remains in the pool.

use radial_randomizer::consts::AUTO_EXCLUDE_DELAY_MS;
use radial_randomizer::{Session, SessionEvent};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xD1CE);
    let mut session = Session::with_defaults(seed);
    log::info!("session seed: {seed}");

    let mut now = 0u64;
    while let Some(plan) = session.spin() {
        // Stand in for the animation layer: let the spin play out, finalize
        // it, then wait out the exclusion delay.
        now += plan.duration_ms;
        session.advance_to(now);
        session.complete_spin(plan.roster_id, plan.item_id);

        now += AUTO_EXCLUDE_DELAY_MS;
        session.advance_to(now);

        for event in session.take_events() {
            match event {
                SessionEvent::SelectionAnnounced {
                    value,
                    timestamp_ms,
                    ..
                } => println!("[{timestamp_ms:>6} ms] the wheel picked {value}"),
                SessionEvent::ItemExcluded { item_id } => {
                    log::info!("item {item_id} left the pool");
                }
                SessionEvent::SelectionCleared => {}
            }
        }

        // Auto-exclusion spares the last entry, so stop once only one is left
        let remaining = session
            .rosters
            .active()
            .map(|roster| roster.active_count())
            .unwrap_or(0);
        if remaining <= 1 {
            break;
        }
    }

    if let Some(last) = session
        .rosters
        .active()
        .and_then(|roster| roster.active_items().next())
    {
        println!("last one standing: {}", last.value);
    }
    println!(
        "{} selections in {} ms of virtual time",
        session.history.len(),
        now
    );
}
